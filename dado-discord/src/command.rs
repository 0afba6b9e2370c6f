pub(crate) mod attribute;
pub(crate) mod meta;
pub(crate) mod roll;
