//! # quadra
//!
//! Quadratic polynomials as small immutable values.
//!
//! ## Features
//!
//! - **Arithmetic**: exponent-wise addition and subtraction
//! - **Rendering**: conventional notation such as `x^2 - 4x + 3`
//! - **Root Finding**: real, repeated and complex conjugate roots
//! - **Drawing**: sample over an integer domain into any point sink
//!
//! ## Quick Start
//!
//! ```rust
//! use quadra::prelude::*;
//!
//! let p = Poly2::new(vec![1.0, -3.0, 2.0]);
//! assert_eq!(p.to_string(), "x^2 - 3x + 2");
//! assert_eq!(p.solve().unwrap(), Roots::Real([1.0, 2.0]));
//! assert_eq!(p.evaluate(&4.0).unwrap(), 6.0);
//!
//! let mut sink = RecordingSink::<f64>::new();
//! p.draw(&mut sink).unwrap();
//! assert_eq!(sink.last().unwrap().len(), 11);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod logging;

pub use quadra_plot as plot;
pub use quadra_poly as poly;
pub use quadra_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quadra_plot::{
        draw, draw_over, Draw, PlotError, PointSink, RecordingSink, SampleDomain, TableSink,
    };
    pub use quadra_poly::{Poly2, PolyError, PolyResult, Positional, Roots};
    pub use quadra_rings::{Complex64, IBig, RealRing, Ring};
}
