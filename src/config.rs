//! JSON job description consumed by the `epicycles` CLI.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::{Complex64, Point},
    foundation::error::{EpicycleError, EpicycleResult},
    fourier::select::SelectionPolicy,
    playback::Playback,
    sample::path_sample::PathSample,
    sample::svg::{outline_from_svg, parse_svg_path_d},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete decomposition and playback job.
///
/// Example:
///
/// ```json
/// { "source": { "svg_file": "rose.svg" }, "samples": 512, "vectors": 101 }
/// ```
pub struct JobConfig {
    /// Where the outline comes from.
    pub source: PathSource,
    /// Arc-length samples taken from vector sources (ignored for raw points).
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Target rotating vector count `M`.
    #[serde(default = "default_vectors")]
    pub vectors: usize,
    /// Frequency selection rule.
    #[serde(default)]
    pub selection: SelectionPolicy,
    /// Use the DC term as chain origin when drawing the continuous outline.
    #[serde(default)]
    pub recenter: bool,
    /// Move the sampled outline so its bounding-box center is the origin before decomposing.
    #[serde(default)]
    pub center: bool,
    /// Tracer frame schedule.
    #[serde(default)]
    pub playback: Playback,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Outline source of a job.
pub enum PathSource {
    /// SVG document on disk, relative paths resolved against the job file directory.
    SvgFile(String),
    /// Inline SVG path data.
    SvgPathD(String),
    /// Raw `[x, y]` samples in traversal order.
    Points(Vec<[f64; 2]>),
}

fn default_samples() -> usize {
    512
}

fn default_vectors() -> usize {
    101
}

impl JobConfig {
    /// Read and validate a job file.
    pub fn from_path(path: &Path) -> EpicycleResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read job config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a job from JSON text.
    pub fn from_json_str(text: &str) -> EpicycleResult<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check counts, the playback schedule and the inline source.
    pub fn validate(&self) -> EpicycleResult<()> {
        if self.samples == 0 {
            return Err(EpicycleError::validation("samples must be > 0"));
        }
        match &self.source {
            PathSource::SvgFile(p) if p.trim().is_empty() => {
                return Err(EpicycleError::validation("svg_file must be non-empty"));
            }
            PathSource::Points(pts) if pts.is_empty() => {
                return Err(EpicycleError::validation("points must be non-empty"));
            }
            _ => {}
        }
        self.playback.validate()
    }

    /// Resolve the source into a path sample; `root` anchors relative SVG paths.
    ///
    /// With `center` set the sample is translated by its bounding-box center.
    #[tracing::instrument(skip(self))]
    pub fn load_sample(&self, root: &Path) -> EpicycleResult<PathSample> {
        let sample = match &self.source {
            PathSource::SvgFile(rel) => {
                let path = root.join(rel);
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("read svg '{}'", path.display()))?;
                let outline = outline_from_svg(&bytes)?;
                PathSample::from_bez_path(&outline, self.samples)?
            }
            PathSource::SvgPathD(d) => {
                PathSample::from_bez_path(&parse_svg_path_d(d)?, self.samples)?
            }
            PathSource::Points(pts) => PathSample::from_points(
                pts.iter().map(|&[x, y]| Point::new(x, y)),
            )?,
        };
        let sample = if self.center {
            sample.centered()
        } else {
            sample
        };
        tracing::debug!(n = sample.len(), centered = self.center, "loaded path sample");
        Ok(sample)
    }

    /// Chain origin used for the continuous outline.
    pub fn outline_origin(&self, dc: Complex64) -> Complex64 {
        if self.recenter {
            dc
        } else {
            Complex64::new(0.0, 0.0)
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
