pub(crate) mod linestring;
pub(crate) mod view;
