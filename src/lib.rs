// MIT/Apache2 License

//! Turns a sequence of pointer samples into the outline of an ink stroke.
//!
//! The pipeline runs in three stages. [`stroke_points`] smooths raw [`InputPoint`]s into [`StrokePoint`]s
//! with tangents and arc lengths. [`stroke_radius`] decides how wide the stroke is at each point.
//! [`stroke_outline`] walks the stroke points, offsets them to either side, rounds off sharp corners and
//! adds caps, giving a closed polygon. [`stroke`] runs the whole thing, and [`outline_path`] turns the
//! polygon into a smooth `lyon` path ready to be filled.
//!
//! Every function here is pure: the same input and options always give the same outline.

#![forbid(unsafe_code)]

mod error;
mod options;
mod outline;
mod path;
mod point;
mod radius;
mod resample;
mod stroke;

pub use error::*;
pub use options::*;
pub use outline::*;
pub use path::*;
pub use point::*;
pub use radius::{simulate_pressure, stroke_radius};
pub use resample::*;
pub use stroke::*;

#[doc(inline)]
pub use freehand_geometry::{Angle, Point, Vector};

/// Compute the outline of a stroke from raw samples.
///
/// This is [`stroke_points`] followed by [`stroke_outline`].
pub fn stroke(input: &[InputPoint], options: &StrokeOptions) -> Vec<Point> {
    stroke_outline(&stroke_points(input, options), options)
}
