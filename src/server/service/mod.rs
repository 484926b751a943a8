pub(crate) mod orders;
pub(crate) mod validation;
