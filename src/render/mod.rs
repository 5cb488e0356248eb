pub(crate) mod layout;
pub(crate) mod sink;
pub(crate) mod svg;
