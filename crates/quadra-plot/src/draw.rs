//! Drawing polynomials into point sinks.

use quadra_poly::Poly2;
use quadra_rings::Ring;
use tracing::debug;

use crate::domain::SampleDomain;
use crate::error::PlotError;
use crate::sink::PointSink;

/// Samples `poly` over the default domain (`0..=10`, step 1) into `sink`.
///
/// # Errors
///
/// Propagates evaluation and sink failures.
pub fn draw<R, S>(poly: &Poly2<R>, sink: &mut S) -> Result<(), PlotError>
where
    R: Ring,
    S: PointSink<R> + ?Sized,
{
    draw_over(poly, &SampleDomain::default(), sink)
}

/// Samples `poly` over `domain` into `sink`.
///
/// The sink receives all points in one batch, or nothing if evaluation fails.
///
/// # Errors
///
/// Returns [`PlotError::InvalidDomain`] for an invalid domain and propagates
/// evaluation and sink failures.
pub fn draw_over<R, S>(
    poly: &Poly2<R>,
    domain: &SampleDomain,
    sink: &mut S,
) -> Result<(), PlotError>
where
    R: Ring,
    S: PointSink<R> + ?Sized,
{
    let xs: Vec<R> = domain.points()?.into_iter().map(R::from_i64).collect();
    let ys = poly.evaluate_many(&xs)?;
    let points: Vec<(R, R)> = xs.into_iter().zip(ys).collect();

    debug!(
        samples = points.len(),
        start = domain.start,
        end = domain.end,
        "drawing polynomial"
    );
    sink.show(&points)
}

/// Method form of [`draw`] and [`draw_over`].
pub trait Draw<R: Ring> {
    /// See [`draw`].
    ///
    /// # Errors
    ///
    /// Propagates evaluation and sink failures.
    fn draw<S: PointSink<R> + ?Sized>(&self, sink: &mut S) -> Result<(), PlotError>;

    /// See [`draw_over`].
    ///
    /// # Errors
    ///
    /// Propagates domain, evaluation and sink failures.
    fn draw_over<S: PointSink<R> + ?Sized>(
        &self,
        domain: &SampleDomain,
        sink: &mut S,
    ) -> Result<(), PlotError>;
}

impl<R: Ring> Draw<R> for Poly2<R> {
    fn draw<S: PointSink<R> + ?Sized>(&self, sink: &mut S) -> Result<(), PlotError> {
        draw(self, sink)
    }

    fn draw_over<S: PointSink<R> + ?Sized>(
        &self,
        domain: &SampleDomain,
        sink: &mut S,
    ) -> Result<(), PlotError> {
        draw_over(self, domain, sink)
    }
}
