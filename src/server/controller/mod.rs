pub(crate) mod error;
pub(crate) mod health;
pub(crate) mod orders;
