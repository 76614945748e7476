//! Sampling domains.

use crate::error::PlotError;

/// Configuration for the x values a polynomial is sampled at.
///
/// The range is inclusive at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleDomain {
    /// First x value.
    pub start: i64,
    /// Last x value, included when reachable from `start` by `step`.
    pub end: i64,
    /// Distance between consecutive x values.
    pub step: i64,
}

impl Default for SampleDomain {
    fn default() -> Self {
        Self {
            start: 0,
            end: 10,
            step: 1,
        }
    }
}

impl SampleDomain {
    /// Creates a validated domain.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidDomain`] if `step <= 0` or `end < start`.
    pub fn new(start: i64, end: i64, step: i64) -> Result<Self, PlotError> {
        let domain = Self { start, end, step };
        domain.validate()?;
        Ok(domain)
    }

    /// Checks the domain describes at least one point.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidDomain`] if `step <= 0` or `end < start`.
    pub fn validate(&self) -> Result<(), PlotError> {
        if self.step <= 0 || self.end < self.start {
            return Err(PlotError::InvalidDomain {
                start: self.start,
                end: self.end,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Returns the x values of the domain in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::InvalidDomain`] if the domain is invalid.
    pub fn points(&self) -> Result<Vec<i64>, PlotError> {
        self.validate()?;
        let step = usize::try_from(self.step).map_err(|_| PlotError::InvalidDomain {
            start: self.start,
            end: self.end,
            step: self.step,
        })?;
        Ok((self.start..=self.end).step_by(step).collect())
    }
}
