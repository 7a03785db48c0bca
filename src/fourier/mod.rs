//! Frequency-domain view of a path sample and the rotating vectors drawn from it.

pub(crate) mod decompose;
pub(crate) mod select;
