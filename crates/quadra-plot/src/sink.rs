//! Point sinks.
//!
//! A sink receives one batch of `(x, y)` samples per draw call.

use std::fmt::Display;
use std::io::Write;

use crate::error::PlotError;

/// Something that displays sampled points.
pub trait PointSink<R> {
    /// Displays one batch of `(x, y)` points.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::Sink`] if the points could not be displayed.
    fn show(&mut self, points: &[(R, R)]) -> Result<(), PlotError>;
}

/// A sink that keeps every batch it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink<R> {
    batches: Vec<Vec<(R, R)>>,
}

impl<R> RecordingSink<R> {
    /// Creates an empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            batches: Vec::new(),
        }
    }

    /// Returns every recorded batch, oldest first.
    #[must_use]
    pub fn batches(&self) -> &[Vec<(R, R)>] {
        &self.batches
    }

    /// Returns the most recent batch.
    #[must_use]
    pub fn last(&self) -> Option<&[(R, R)]> {
        self.batches.last().map(Vec::as_slice)
    }
}

impl<R: Clone> PointSink<R> for RecordingSink<R> {
    fn show(&mut self, points: &[(R, R)]) -> Result<(), PlotError> {
        self.batches.push(points.to_vec());
        Ok(())
    }
}

/// A sink that writes points as a two-column table, one `x y` row per line.
#[derive(Debug)]
pub struct TableSink<W: Write> {
    out: W,
}

impl<W: Write> TableSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<R: Display, W: Write> PointSink<R> for TableSink<W> {
    fn show(&mut self, points: &[(R, R)]) -> Result<(), PlotError> {
        for (x, y) in points {
            writeln!(self.out, "{x} {y}").map_err(|e| PlotError::Sink(e.to_string()))?;
        }
        self.out.flush().map_err(|e| PlotError::Sink(e.to_string()))
    }
}
