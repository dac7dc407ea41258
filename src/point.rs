// MIT/Apache2 License

use freehand_geometry::{Point, Vector};

/// A raw sample from a pointer or stylus.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InputPoint {
    /// Where the sample was taken.
    pub position: Point,
    /// The recorded pressure, if the device reports one.
    pub pressure: Option<f64>,
}

impl InputPoint {
    /// A sample without pressure information.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        InputPoint {
            position: Point::new(x, y),
            pressure: None,
        }
    }

    /// A sample with a recorded pressure.
    #[inline]
    #[must_use]
    pub fn with_pressure(x: f64, y: f64, pressure: f64) -> Self {
        InputPoint {
            position: Point::new(x, y),
            pressure: Some(pressure),
        }
    }
}

impl From<(f64, f64)> for InputPoint {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        InputPoint::new(x, y)
    }
}

impl From<(f64, f64, f64)> for InputPoint {
    #[inline]
    fn from((x, y, pressure): (f64, f64, f64)) -> Self {
        InputPoint::with_pressure(x, y, pressure)
    }
}

impl From<Point> for InputPoint {
    #[inline]
    fn from(position: Point) -> Self {
        InputPoint {
            position,
            pressure: None,
        }
    }
}

/// A resampled point on the stroke's center line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokePoint {
    /// The smoothed position.
    pub position: Point,
    /// The pressure at this point, within `0..=1`.
    pub pressure: f64,
    /// The distance from the previous stroke point.
    pub distance: f64,
    /// The unit vector pointing from this point back towards the previous one.
    pub tangent: Vector,
    /// The distance along the stroke from its first point.
    pub arc_length: f64,
}
