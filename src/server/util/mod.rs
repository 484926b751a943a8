pub(crate) mod id;
pub(crate) mod time;
