//! Input boundary: turning vector art into an ordered period of complex samples.

pub(crate) mod path_sample;
pub(crate) mod svg;
