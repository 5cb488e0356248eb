pub(crate) mod color;
pub(crate) mod order;
