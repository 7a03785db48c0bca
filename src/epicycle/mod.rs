//! Redrawing a path from rotating vectors.

pub(crate) mod chain;
pub(crate) mod tracer;
