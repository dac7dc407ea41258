// MIT/Apache2 License

use crate::{
    radius::{initial_pressure, simulate_pressure, stroke_radius},
    resample::total_length,
    StrokeOptions, StrokePoint,
};
use freehand_geometry::{Angle, Point, PointExt, Vector, VectorExt};
use tinyvec::TinyVec;

/// Points within this arc length of the end of the stroke are dropped, apart from the last one.
const TAIL_NOISE_LENGTH: f64 = 3.0;
/// The radius never drops below this, so tapered ends keep a direction.
const MIN_RADIUS: f64 = 0.01;
/// Points in a corner fan, a round start cap and a dot.
const FAN_STEPS: usize = 13;
/// Points in a round end cap. It sweeps a turn and a half, so that a sharp turn on the very last point
/// still gets covered.
const END_CAP_STEPS: usize = 29;
const MAX_CAP_POINTS: usize = 32;

type Cap = TinyVec<[Point; MAX_CAP_POINTS]>;

/// Build the outline polygon of a resampled stroke.
///
/// The returned points run along the left side of the stroke from start to end, around the end cap, back
/// along the right side, and around the start cap. Connecting the last point to the first closes the
/// polygon. A stroke that collapses to a single point becomes a dot.
///
/// Points within three units of the end are dropped as noise. So a finished or tapered stroke shorter
/// than that collapses to a dot centred on its first point, and its last point may fall outside the dot.
///
/// An empty stroke, or a non-positive size, gives an empty outline.
pub fn stroke_outline(points: &[StrokePoint], options: &StrokeOptions) -> Vec<Point> {
    if points.is_empty() || !(options.size > 0.0) {
        return Vec::new();
    }

    let sides = walk(points, options);

    let first_point = points[0].position;
    let last_point = if points.len() > 1 {
        points[points.len() - 1].position
    } else {
        first_point + Vector::new(1.0, 1.0)
    };

    let tapered_start = options.start.taper_length() > 0.0;
    let tapered_end = options.end.taper_length() > 0.0;

    // too short to have sides; draw a dot if the stroke is tapered (or done) instead
    if sides.remaining == 1 && (tapered_start || tapered_end || options.last) {
        let radius = sides.first_radius.unwrap_or(sides.radius);
        log::debug!("stroke collapsed to a dot of radius {}", radius);
        return dot(first_point, last_point, radius).collect();
    }

    let start_cap = start_cap(first_point, &sides, options);
    let end_cap = end_cap(
        last_point,
        points[points.len() - 1].tangent,
        sides.radius,
        options,
    );

    log::debug!(
        "outline of {} stroke points: {} left, {} right, {} corner fans, caps {}/{}",
        points.len(),
        sides.left.len(),
        sides.right.len(),
        sides.fans,
        start_cap.len(),
        end_cap.len()
    );

    let Sides { left, right, .. } = sides;
    let mut outline = Vec::with_capacity(left.len() + right.len() + start_cap.len() + end_cap.len());
    outline.extend(left);
    outline.extend(end_cap);
    outline.extend(right.into_iter().rev());
    outline.extend(start_cap);
    outline
}

/// The two sides of the stroke, as gathered by the walk.
#[derive(Debug)]
struct Sides {
    left: Vec<Point>,
    right: Vec<Point>,
    /// The radius at the last point that was processed.
    radius: f64,
    /// The untapered radius at the first point that was processed.
    first_radius: Option<f64>,
    /// How many points survived the tail noise filter.
    remaining: usize,
    /// How many corner fans were drawn.
    fans: usize,
}

/// What the walk remembers from one point to the next.
struct WalkState {
    prev_pressure: f64,
    prev_tangent: Vector,
    /// The last point accepted on the left side.
    left: Point,
    /// The last point accepted on the right side.
    right: Point,
    /// Set when the previous point drew a fan for the corner at this point.
    prev_was_sharp: bool,
}

/// Walk the stroke once, offsetting each point to either side by its radius.
fn walk(points: &[StrokePoint], options: &StrokeOptions) -> Sides {
    let last_index = points.len() - 1;
    let total_length = total_length(points);
    let taper_start = options.start.taper_length();
    let taper_end = options.end.taper_length();
    // squared, compared against squared distances
    let min_distance = (options.size * options.smoothing).powi(2);

    let mut state = WalkState {
        prev_pressure: initial_pressure(points, options),
        prev_tangent: points[0].tangent,
        left: points[0].position,
        right: points[0].position,
        prev_was_sharp: false,
    };
    let mut sides = Sides {
        left: Vec::with_capacity(points.len()),
        right: Vec::with_capacity(points.len()),
        radius: stroke_radius(
            options.size,
            options.thinning,
            points[last_index].pressure,
            options.easing,
        ),
        first_radius: None,
        remaining: 0,
        fans: 0,
    };

    for (i, point) in points.iter().enumerate() {
        if i < last_index && total_length - point.arc_length < TAIL_NOISE_LENGTH {
            continue;
        }
        sides.remaining += 1;

        let mut pressure = point.pressure;
        let mut radius = if options.thinning > 0.0 {
            if options.simulate_pressure {
                pressure = simulate_pressure(state.prev_pressure, point.distance, options.size);
            }
            stroke_radius(options.size, options.thinning, pressure, options.easing)
        } else {
            options.size / 2.0
        };
        sides.first_radius.get_or_insert(radius);

        let ts = if point.arc_length < taper_start {
            options.start.easing.apply(point.arc_length / taper_start)
        } else {
            1.0
        };
        let remaining_length = total_length - point.arc_length;
        let te = if remaining_length < taper_end {
            options.end.easing.apply(remaining_length / taper_end)
        } else {
            1.0
        };
        radius = (radius * ts.min(te)).max(MIN_RADIUS);
        sides.radius = radius;

        let (next_tangent, next_dpr) = match points.get(i + 1) {
            Some(next) => (next.tangent, point.tangent.dot(next.tangent)),
            None => (point.tangent, 1.0),
        };
        let prev_dpr = point.tangent.dot(state.prev_tangent);

        let is_sharp = prev_dpr < 0.0 && !state.prev_was_sharp;
        let is_next_sharp = next_dpr < 0.0;

        if is_sharp || is_next_sharp {
            // the path doubles back on itself here; cover the turn with a half circle
            log::trace!("corner fan at stroke point {}", i);
            let offset = state.prev_tangent.per() * radius;
            for t in fan_steps(FAN_STEPS) {
                let sweep = Angle::FIXED_HALF_TURN * t;
                state.left = (point.position - offset).rotate_around(point.position, sweep);
                state.right = (point.position + offset).rotate_around(point.position, -sweep);
                sides.left.push(state.left);
                sides.right.push(state.right);
            }
            sides.fans += 1;
            state.prev_was_sharp = is_next_sharp;
            continue;
        }

        state.prev_was_sharp = false;

        if i == last_index {
            let offset = point.tangent.per() * radius;
            sides.left.push(point.position - offset);
            sides.right.push(point.position + offset);
            continue;
        }

        // lean the offset towards the next point's direction as the path bends
        let offset = next_tangent.lerp(point.tangent, next_dpr).per() * radius;

        let left = point.position - offset;
        if i <= 1 || state.left.distance_squared(left) > min_distance {
            sides.left.push(left);
            state.left = left;
        }

        let right = point.position + offset;
        if i <= 1 || state.right.distance_squared(right) > min_distance {
            sides.right.push(right);
            state.right = right;
        }

        state.prev_pressure = pressure;
        state.prev_tangent = point.tangent;
    }

    sides
}

/// `steps` evenly spaced fractions in `0..1`, excluding 1.
#[inline]
fn fan_steps(steps: usize) -> impl Iterator<Item = f64> {
    (0..steps).map(move |k| k as f64 / steps as f64)
}

/// A full circle of points around `center`.
fn dot(center: Point, toward: Point, radius: f64) -> impl Iterator<Item = Point> {
    let start = center.project((center - toward).per().uni(), -radius);
    fan_steps(FAN_STEPS).map(move |t| start.rotate_around(center, Angle::FIXED_HALF_TURN * (2.0 * t)))
}

fn start_cap(first_point: Point, sides: &Sides, options: &StrokeOptions) -> Cap {
    let mut cap = Cap::new();

    if options.start.taper_length() > 0.0 {
        // the taper already closes the start
        return cap;
    }

    let (first_left, first_right) = match (sides.left.first(), sides.right.first()) {
        (Some(&left), Some(&right)) => (left, right),
        _ => return cap,
    };

    if options.start.cap {
        // swing the right side around to meet the left
        cap.extend(
            fan_steps(FAN_STEPS)
                .map(|t| first_right.rotate_around(first_point, Angle::FIXED_HALF_TURN * t)),
        );
    } else {
        let corners = first_left - first_right;
        let a = corners * 0.5;
        let b = corners * 0.51;
        cap.extend_from_slice(&[
            first_point - a,
            first_point - b,
            first_point + b,
            first_point + a,
        ]);
    }

    cap
}

fn end_cap(last_point: Point, last_tangent: Vector, radius: f64, options: &StrokeOptions) -> Cap {
    let mut cap = Cap::new();
    let direction = (-last_tangent).per();

    if options.end.taper_length() > 0.0 {
        cap.push(last_point);
    } else if options.end.cap {
        let start = last_point.project(direction, radius);
        cap.extend(
            fan_steps(END_CAP_STEPS)
                .map(|t| start.rotate_around(last_point, Angle::FIXED_HALF_TURN * (3.0 * t))),
        );
    } else {
        cap.extend_from_slice(&[
            last_point + direction * radius,
            last_point + direction * (radius * 0.99),
            last_point - direction * (radius * 0.99),
            last_point - direction * radius,
        ]);
    }

    cap
}
