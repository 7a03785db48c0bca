//! Driver boundary: a fixed frame schedule feeding scaled time into an [`EpicycleTracer`].

use crate::{
    epicycle::tracer::EpicycleTracer,
    foundation::core::{Fps, FrameIndex, FrameRange},
    foundation::error::{EpicycleError, EpicycleResult},
    sink::{SegmentSink, SinkConfig, Tick},
};

/// Frame schedule for a tracer run.
///
/// Frame `f` has elapsed fraction `f / (duration_frames - 1)`, reaching 1 on the last frame,
/// and scaled time `fraction * time_scale`. With the default `time_scale` of `2*pi` a
/// frequency-1 vector turns once over the whole playback.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Playback {
    /// Frame rate of the host driver.
    pub fps: Fps,
    /// Total playback length in frames.
    pub duration_frames: u64,
    /// Angle multiplier applied to the elapsed fraction.
    pub time_scale: f64,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            fps: Fps::default(),
            duration_frames: 300,
            time_scale: std::f64::consts::TAU,
        }
    }
}

/// Counters reported by [`Playback::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Tracer steps taken.
    pub ticks: u64,
    /// Segments pushed to the sink.
    pub segments: u64,
}

impl Playback {
    /// Check the schedule is usable.
    pub fn validate(&self) -> EpicycleResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.duration_frames == 0 {
            return Err(EpicycleError::validation(
                "playback duration_frames must be > 0",
            ));
        }
        if !(self.time_scale.is_finite() && self.time_scale > 0.0) {
            return Err(EpicycleError::validation(
                "playback time_scale must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Wall-clock length of the playback.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration_frames)
    }

    /// All frames of the playback.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration_frames),
        }
    }

    /// Elapsed fraction of the playback at `frame`.
    ///
    /// The first frame maps to 0 and the last to 1; a single-frame playback stays at 0.
    pub fn elapsed_fraction(&self, frame: FrameIndex) -> f64 {
        if self.duration_frames <= 1 {
            return 0.0;
        }
        frame.0 as f64 / (self.duration_frames - 1) as f64
    }

    /// Scaled time handed to the tracer at `frame`.
    pub fn scaled_time(&self, frame: FrameIndex) -> f64 {
        self.elapsed_fraction(frame) * self.time_scale
    }

    /// Step `tracer` once per frame of the whole playback, pushing every tick to `sink`.
    pub fn run<S: SegmentSink + ?Sized>(
        &self,
        tracer: &mut EpicycleTracer,
        sink: &mut S,
    ) -> EpicycleResult<PlaybackStats> {
        self.run_range(self.range(), tracer, sink)
    }

    /// Step `tracer` once per frame of `range`, in increasing frame order.
    ///
    /// The tracer is not reset first, so consecutive ranges continue the same traces.
    #[tracing::instrument(skip(self, tracer, sink), fields(vectors = tracer.vectors().len()))]
    pub fn run_range<S: SegmentSink + ?Sized>(
        &self,
        range: FrameRange,
        tracer: &mut EpicycleTracer,
        sink: &mut S,
    ) -> EpicycleResult<PlaybackStats> {
        self.validate()?;
        if !range.is_empty() && !self.range().contains(FrameIndex(range.end.0 - 1)) {
            return Err(EpicycleError::validation(format!(
                "frame range end {} exceeds playback duration {}",
                range.end.0, self.duration_frames
            )));
        }

        sink.begin(SinkConfig {
            vectors: tracer.vectors().len(),
            fps: self.fps,
            range,
        })?;

        let mut stats = PlaybackStats::default();
        for frame in range.iter() {
            let scaled_time = self.scaled_time(frame);
            let segments = tracer.step(scaled_time);
            sink.push_tick(&Tick {
                frame,
                scaled_time,
                segments: &segments,
            })?;
            stats.ticks += 1;
            stats.segments += segments.len() as u64;
        }

        sink.end()?;
        tracing::debug!(
            frames = range.len_frames(),
            ticks = stats.ticks,
            segments = stats.segments,
            "playback finished"
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../tests/unit/playback/playback.rs"]
mod tests;
