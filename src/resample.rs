// MIT/Apache2 License

use crate::{InputPoint, StrokeOptions, StrokePoint};
use freehand_geometry::{Vector, VectorExt};
use std::{borrow::Cow, f64::consts::FRAC_1_SQRT_2};

/// The pressure ceiling for the first point. Drawn lines almost always start slow, and a full-pressure
/// first sample makes for a blobby start.
const FIRST_PRESSURE_CAP: f64 = 0.25;
/// The pressure ceiling for every other point.
const PRESSURE_CAP: f64 = 0.5;

/// Resample raw input into a smoothed stream of stroke points.
///
/// Each point after the first is pulled from the previously accepted point towards its input sample, by a
/// factor derived from `options.streamline`. Samples that land exactly on the previous point are dropped,
/// as are samples within `options.size` of the start of the stroke (except the final one), which is where
/// most pointer noise lives.
///
/// The resulting arc lengths are non-decreasing, every tangent is a unit vector once there are at least
/// two points, and the first point shares the second point's tangent.
pub fn stroke_points(input: &[InputPoint], options: &StrokeOptions) -> Vec<StrokePoint> {
    let input = pad(input);
    let first = match input.first() {
        Some(first) => first,
        None => return Vec::new(),
    };

    let t = 0.15 + (1.0 - options.streamline) * 0.85;

    let mut points = Vec::with_capacity(input.len());
    points.push(StrokePoint {
        position: first.position,
        pressure: clamp_pressure(first.pressure, FIRST_PRESSURE_CAP),
        distance: 0.0,
        // placeholder, replaced by the second point's tangent once there is one
        tangent: Vector::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
        arc_length: 0.0,
    });

    let mut walk = Walk {
        prev: points[0],
        reached_minimum_length: false,
    };
    let max = input.len() - 1;

    for (i, sample) in input.iter().enumerate().skip(1) {
        let position = walk.prev.position.lerp(sample.position, t);

        if position == walk.prev.position {
            log::trace!("sample {} lands on the previous point, skipping", i);
            continue;
        }

        let distance = position.distance_to(walk.prev.position);
        let arc_length = walk.prev.arc_length + distance;

        // until the stroke has moved a little, samples are mostly noise
        if i < max && !walk.reached_minimum_length {
            if arc_length < options.size {
                log::trace!("sample {} is within the start of the stroke, skipping", i);
                continue;
            }
            walk.reached_minimum_length = true;
        }

        let point = StrokePoint {
            position,
            pressure: clamp_pressure(sample.pressure, PRESSURE_CAP),
            distance,
            tangent: (walk.prev.position - position).uni(),
            arc_length,
        };
        points.push(point);
        walk.prev = point;
    }

    // the first point has no predecessor to point back at
    if points.len() > 1 {
        points[0].tangent = points[1].tangent;
    }

    log::debug!(
        "resampled {} input points into {} stroke points",
        input.len(),
        points.len()
    );

    points
}

/// State carried from one sample to the next.
struct Walk {
    /// The last point that was emitted.
    prev: StrokePoint,
    /// Latched once the stroke has left the noisy region around its first point.
    reached_minimum_length: bool,
}

/// Make sure there are enough samples to work with.
///
/// A single sample gets a companion one unit away, so that it has a direction. Two samples get three more
/// between them, which keeps short tapered strokes from collapsing into a dash.
fn pad(input: &[InputPoint]) -> Cow<'_, [InputPoint]> {
    match *input {
        [only] => Cow::Owned(vec![
            only,
            InputPoint {
                position: only.position + Vector::new(1.0, 1.0),
                pressure: only.pressure,
            },
        ]),
        [first, last] => {
            let mut padded = Vec::with_capacity(5);
            padded.push(first);
            padded.extend((1..=4).map(|i| InputPoint {
                position: first.position.lerp(last.position, f64::from(i) / 4.0),
                pressure: last.pressure,
            }));
            Cow::Owned(padded)
        }
        _ => Cow::Borrowed(input),
    }
}

#[inline]
fn clamp_pressure(pressure: Option<f64>, cap: f64) -> f64 {
    num_traits::clamp(pressure.unwrap_or(cap), 0.0, cap)
}

/// The total length of a resampled stroke.
#[inline]
pub(crate) fn total_length(points: &[StrokePoint]) -> f64 {
    points.last().map_or(0.0, |p| p.arc_length)
}
