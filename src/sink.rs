//! Output boundary: consumers of the segments produced on every playback tick.

use std::io::Write;

use anyhow::Context as _;

use crate::foundation::core::{Fps, FrameIndex, FrameRange, Line};
use crate::foundation::error::EpicycleResult;

/// Configuration provided to a [`SegmentSink`] before the first tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkConfig {
    /// Number of rotating vectors, i.e. segments per tick.
    pub vectors: usize,
    /// Playback frame rate.
    pub fps: Fps,
    /// Frames that will be pushed.
    pub range: FrameRange,
}

/// Segments appended by one tracer step.
#[derive(Clone, Copy, Debug)]
pub struct Tick<'a> {
    /// Frame that produced the step.
    pub frame: FrameIndex,
    /// Scaled time passed to the tracer.
    pub scaled_time: f64,
    /// One new segment per vector, in vector order.
    pub segments: &'a [Line],
}

/// Sink contract for consuming traced segments.
///
/// Ordering contract: `push_tick` is called in strictly increasing `FrameIndex` order.
pub trait SegmentSink: Send {
    /// Called once before any tick is pushed.
    fn begin(&mut self, cfg: SinkConfig) -> EpicycleResult<()>;
    /// Push one tick.
    fn push_tick(&mut self, tick: &Tick<'_>) -> EpicycleResult<()>;
    /// Called once after the last tick.
    fn end(&mut self) -> EpicycleResult<()>;
}

/// Owned copy of a [`Tick`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TickRecord {
    /// Frame that produced the step.
    pub frame: FrameIndex,
    /// Scaled time passed to the tracer.
    pub scaled_time: f64,
    /// New segments as `[x0, y0, x1, y1]`, in vector order.
    pub segments: Vec<[f64; 4]>,
}

impl From<&Tick<'_>> for TickRecord {
    fn from(tick: &Tick<'_>) -> Self {
        Self {
            frame: tick.frame,
            scaled_time: tick.scaled_time,
            segments: tick
                .segments
                .iter()
                .map(|l| [l.p0.x, l.p0.y, l.p1.x, l.p1.y])
                .collect(),
        }
    }
}

/// In-memory sink for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySegmentSink {
    cfg: Option<SinkConfig>,
    ticks: Vec<TickRecord>,
    finished: bool,
}

impl InMemorySegmentSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Ticks in push order.
    pub fn ticks(&self) -> &[TickRecord] {
        &self.ticks
    }

    /// True once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SegmentSink for InMemorySegmentSink {
    fn begin(&mut self, cfg: SinkConfig) -> EpicycleResult<()> {
        self.cfg = Some(cfg);
        self.ticks.clear();
        self.finished = false;
        Ok(())
    }

    fn push_tick(&mut self, tick: &Tick<'_>) -> EpicycleResult<()> {
        self.ticks.push(TickRecord::from(tick));
        Ok(())
    }

    fn end(&mut self) -> EpicycleResult<()> {
        self.finished = true;
        Ok(())
    }
}

/// Writes one JSON object per tick, newline separated.
pub struct JsonlSegmentSink<W: Write + Send> {
    out: W,
    written: u64,
}

impl<W: Write + Send> JsonlSegmentSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    /// Ticks written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> SegmentSink for JsonlSegmentSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> EpicycleResult<()> {
        self.written = 0;
        Ok(())
    }

    fn push_tick(&mut self, tick: &Tick<'_>) -> EpicycleResult<()> {
        serde_json::to_writer(&mut self.out, &TickRecord::from(tick))?;
        self.out.write_all(b"\n").context("write tick separator")?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> EpicycleResult<()> {
        self.out.flush().context("flush tick stream")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/sink/sink.rs"]
mod tests;
