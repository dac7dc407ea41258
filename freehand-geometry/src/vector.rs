//               Copyright John Nunley, 2022.
// Distributed under the Boost Software License, Version 1.0.
//       (See accompanying file LICENSE or copy at
//         https://www.boost.org/LICENSE_1_0.txt)

use super::{Angle, Point, Vector};

/// Operations on vectors that `euclid` does not provide in the shape we need.
pub trait VectorExt: Sized {
    /// Rotate this vector by a quarter turn, mapping `(x, y)` to `(y, -x)`.
    #[must_use]
    fn per(self) -> Self;

    /// Get the unit vector pointing in the same direction as this one.
    ///
    /// Unlike `euclid`'s `normalize`, a zero-length vector produces the zero vector instead of NaN.
    #[must_use]
    fn uni(self) -> Self;
}

impl VectorExt for Vector {
    #[inline]
    fn per(self) -> Vector {
        Vector::new(self.y, -self.x)
    }

    #[inline]
    fn uni(self) -> Vector {
        let length = self.length();
        if length == 0.0 {
            Vector::zero()
        } else {
            self / length
        }
    }
}

/// Operations on points that `euclid` does not provide in the shape we need.
pub trait PointExt: Sized {
    /// Rotate this point around `center` by `angle`.
    #[must_use]
    fn rotate_around(self, center: Self, angle: Angle) -> Self;

    /// Move this point along `direction`, scaled by `distance`.
    #[must_use]
    fn project(self, direction: Vector, distance: f64) -> Self;

    /// The point halfway between this point and `other`.
    #[must_use]
    fn midpoint(self, other: Self) -> Self;

    /// The squared distance between this point and `other`.
    #[must_use]
    fn distance_squared(self, other: Self) -> f64;
}

impl PointExt for Point {
    #[inline]
    fn rotate_around(self, center: Point, angle: Angle) -> Point {
        let (s, c) = angle.sin_cos();
        let offset = self - center;

        Point::new(
            offset.x * c - offset.y * s + center.x,
            offset.x * s + offset.y * c + center.y,
        )
    }

    #[inline]
    fn project(self, direction: Vector, distance: f64) -> Point {
        self + direction * distance
    }

    #[inline]
    fn midpoint(self, other: Point) -> Point {
        self.lerp(other, 0.5)
    }

    #[inline]
    fn distance_squared(self, other: Point) -> f64 {
        (self - other).square_length()
    }
}
