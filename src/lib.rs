//! Fourier-series approximation of closed 2D outlines, redrawn with rotating vectors.
//!
//! # Pipeline overview
//!
//! 1. **Sample**: vector art or raw points -> [`PathSample`] (one period of complex samples)
//! 2. **Decompose**: `PathSample -> FourierSeries` (normalized DFT, bin `k` <-> frequency)
//! 3. **Select**: `FourierSeries -> Vec<RotatingVector>` (DC term always dropped)
//! 4. **Reconstruct**: step an [`EpicycleTracer`] from a [`Playback`] schedule into a
//!    [`SegmentSink`], or sample the continuous chain with [`reconstruct_outline`]
//!
//! The crate only produces geometry: points, line segments and `kurbo` paths. Drawing
//! them is left to the caller.
//!
//! # Conventions
//!
//! - The zero-frequency (DC) term is never turned into a rotating vector, and the tracer
//!   starts every vector at the origin, so the reconstruction is offset from the source by
//!   the sample centroid unless the caller passes [`FourierSeries::dc`] as chain origin.
//! - Requesting more vectors than samples is allowed; frequencies then alias onto the
//!   same coefficients.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod epicycle;
mod foundation;
mod fourier;
mod sample;

/// JSON job description consumed by the CLI.
pub mod config;
/// Frame schedule driving a tracer.
pub mod playback;
/// Consumers of traced segments.
pub mod sink;

pub use config::{JobConfig, PathSource};
pub use epicycle::chain::{chain_joints, pen_tip, reconstruct_outline};
pub use epicycle::tracer::EpicycleTracer;
pub use foundation::core::{
    Affine, BezPath, Complex64, Fps, FrameIndex, FrameRange, Line, Point, Vec2, to_complex,
    to_point,
};
pub use foundation::error::{EpicycleError, EpicycleResult};
pub use foundation::math::max_abs_error;
pub use fourier::decompose::FourierSeries;
pub use fourier::select::{RotatingVector, SelectionPolicy, select_vectors};
pub use playback::{Playback, PlaybackStats};
pub use sample::path_sample::PathSample;
pub use sample::svg::{outline_from_svg, parse_svg_path_d};
pub use sink::{InMemorySegmentSink, JsonlSegmentSink, SegmentSink, SinkConfig, Tick, TickRecord};
