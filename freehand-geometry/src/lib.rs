//               Copyright John Nunley, 2022.
// Distributed under the Boost Software License, Version 1.0.
//       (See accompanying file LICENSE or copy at
//         https://www.boost.org/LICENSE_1_0.txt)

//! Vector primitives used by the `freehand` crate. Everything here works in `f64` coordinates on top of
//! `euclid`, which already supplies addition, scaling, dot products, lengths and interpolation. This crate
//! fills in the few operations the stroke pipeline needs on top of that.

#![no_std]
#![warn(clippy::pedantic)]

mod angle;
pub use angle::*;

mod vector;
pub use vector::*;

/// A point in two-dimensional space. The X axis represents horizontal space, from left to right. The Y axis
/// represents vertical space, from top to bottom.
pub type Point = euclid::default::Point2D<f64>;

/// A displacement in two-dimensional space.
pub type Vector = euclid::default::Vector2D<f64>;
