use crate::{
    foundation::core::{Complex64, Line, to_point},
    foundation::error::{EpicycleError, EpicycleResult},
    fourier::select::RotatingVector,
};

/// Time-stepped epicycle reconstruction.
///
/// Every vector keeps its own running position, starting at the origin. Each call to
/// [`EpicycleTracer::step`] moves every position by that vector evaluated at the given
/// scaled time and records the move as one line segment, so each trace is a connected
/// polyline with exactly one segment per step.
#[derive(Clone, Debug)]
pub struct EpicycleTracer {
    vectors: Vec<RotatingVector>,
    positions: Vec<Complex64>,
    traces: Vec<Vec<Line>>,
    steps: u64,
}

impl EpicycleTracer {
    /// Create a tracer over `vectors`.
    ///
    /// An empty list or a zero-frequency vector is rejected up front.
    pub fn new(vectors: Vec<RotatingVector>) -> EpicycleResult<Self> {
        if vectors.is_empty() {
            return Err(EpicycleError::validation(
                "epicycle tracer needs at least one rotating vector",
            ));
        }
        if let Some(idx) = vectors.iter().position(|v| v.frequency == 0) {
            return Err(EpicycleError::validation(format!(
                "rotating vector {idx} has zero frequency"
            )));
        }

        let n = vectors.len();
        Ok(Self {
            vectors,
            positions: vec![Complex64::new(0.0, 0.0); n],
            traces: vec![Vec::new(); n],
            steps: 0,
        })
    }

    /// Advance every vector at `scaled_time` and return the segment appended to each trace,
    /// in vector order.
    pub fn step(&mut self, scaled_time: f64) -> Vec<Line> {
        let mut appended = Vec::with_capacity(self.vectors.len());
        for ((v, pos), trace) in self
            .vectors
            .iter()
            .zip(self.positions.iter_mut())
            .zip(self.traces.iter_mut())
        {
            let prev = *pos;
            let next = prev + v.at(scaled_time);
            *pos = next;

            let seg = Line::new(to_point(prev), to_point(next));
            trace.push(seg);
            appended.push(seg);
        }
        self.steps += 1;
        appended
    }

    /// Return every position to the origin and drop all traced segments.
    pub fn reset(&mut self) {
        self.positions.fill(Complex64::new(0.0, 0.0));
        for trace in &mut self.traces {
            trace.clear();
        }
        self.steps = 0;
    }

    /// Vectors driven by this tracer.
    pub fn vectors(&self) -> &[RotatingVector] {
        &self.vectors
    }

    /// Current running position of each vector.
    pub fn positions(&self) -> &[Complex64] {
        &self.positions
    }

    /// Polyline traced so far by vector `idx`, if it exists.
    pub fn trace(&self, idx: usize) -> Option<&[Line]> {
        self.traces.get(idx).map(Vec::as_slice)
    }

    /// All traces in vector order.
    pub fn traces(&self) -> &[Vec<Line>] {
        &self.traces
    }

    /// Number of `step` calls since creation or the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

#[cfg(test)]
#[path = "../../tests/unit/epicycle/tracer.rs"]
mod tests;
