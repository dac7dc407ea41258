//               Copyright John Nunley, 2022.
// Distributed under the Boost Software License, Version 1.0.
//       (See accompanying file LICENSE or copy at
//         https://www.boost.org/LICENSE_1_0.txt)

#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

use core::ops;
use num_traits::Float;
use ordered_float::NotNan;

/// An angle of rotation, in radians.
///
/// Positive angles rotate from the positive X axis towards the positive Y axis. Since the Y axis points
/// downwards on most drawing surfaces, that reads as clockwise on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Angle {
    radians: NotNan<f64>,
}

impl Angle {
    pub const ZERO: Angle = unsafe { Angle::from_radians_unchecked(0.0) };
    pub const HALF_TURN: Angle = unsafe { Angle::from_radians_unchecked(core::f64::consts::PI) };
    pub const FULL_TURN: Angle = unsafe { Angle::from_radians_unchecked(core::f64::consts::TAU) };
    /// Slightly more than a half turn. Sweeping this far closes the seam between the last point of a
    /// fan and the point it is meant to meet.
    pub const FIXED_HALF_TURN: Angle =
        unsafe { Angle::from_radians_unchecked(core::f64::consts::PI + 0.00001) };

    /// Create an angle based on the number of radians in the angle.
    ///
    /// # Safety
    ///
    /// Behavior is undefined if the radians passed in is equal to NaN.
    #[allow(unused_unsafe)]
    #[must_use]
    #[inline]
    pub const unsafe fn from_radians_unchecked(radians: f64) -> Angle {
        Angle {
            radians: unsafe { NotNan::new_unchecked(radians) },
        }
    }

    /// Create an angle based on the number of radians in the angle. This function returns `None` if the radians
    /// given is NaN.
    #[must_use]
    #[inline]
    pub fn from_radians(radians: f64) -> Option<Angle> {
        NotNan::new(radians).ok().map(|radians| Angle { radians })
    }

    /// Create an angle based on the number of degrees in the angle. This function returns `None` if the degrees
    /// given times pi divided by 180 is NaN.
    #[must_use]
    #[inline]
    pub fn from_degrees(degrees: f64) -> Option<Angle> {
        Angle::from_radians(Float::to_radians(degrees))
    }

    /// Get the number of radians in this angle.
    #[must_use]
    #[inline]
    pub fn radians(self) -> f64 {
        self.radians.into_inner()
    }

    /// Get the number of degrees in this angle.
    #[must_use]
    #[inline]
    pub fn degrees(self) -> f64 {
        Float::to_degrees(self.radians())
    }

    /// Get the sine and cosine of this angle.
    #[must_use]
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        Float::sin_cos(self.radians())
    }
}

impl ops::Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, other: Angle) -> Angle {
        Angle {
            radians: self.radians + other.radians,
        }
    }
}

impl ops::Mul<f64> for Angle {
    type Output = Angle;

    /// # Panics
    ///
    /// Panics if the product is NaN, e.g. for an infinite factor applied to a zero angle.
    #[inline]
    fn mul(self, factor: f64) -> Angle {
        Angle {
            radians: self.radians * factor,
        }
    }
}

impl ops::Neg for Angle {
    type Output = Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle {
            radians: -self.radians,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn nan_is_rejected() {
        assert!(Angle::from_radians(f64::NAN).is_none());
        assert!(Angle::from_radians(f64::INFINITY - f64::INFINITY).is_none());
    }

    #[test]
    fn scaling_sweeps_fractions_of_a_turn() {
        assert_relative_eq!((Angle::FULL_TURN * 0.25).degrees(), 90.0);
        assert_eq!(Angle::HALF_TURN * 0.0, Angle::ZERO);
    }

    #[test]
    fn degrees_round_trip_through_radians() {
        let angle = Angle::from_degrees(180.0).unwrap();
        assert_relative_eq!(angle.radians(), Angle::HALF_TURN.radians());
        assert_relative_eq!(Angle::FULL_TURN.degrees(), 360.0);
    }

    #[test]
    fn fixed_half_turn_overshoots() {
        assert!(Angle::FIXED_HALF_TURN > Angle::HALF_TURN);
        assert!(Angle::FIXED_HALF_TURN.radians() - Angle::HALF_TURN.radians() < 1e-4);
    }

    #[test]
    fn negation_and_addition() {
        let sum = Angle::HALF_TURN + -Angle::HALF_TURN;
        assert_eq!(sum, Angle::ZERO);
    }
}
