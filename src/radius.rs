// MIT/Apache2 License

use crate::{Easing, StrokeOptions, StrokePoint};

/// How quickly simulated pressure follows the pointer's speed.
const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;
/// How many leading points are averaged into the initial pressure.
const PRESSURE_SEED_WINDOW: usize = 10;

/// The radius of the stroke for a given pressure.
///
/// At zero thinning this is always half the size. Positive thinning makes the stroke thinner at low
/// pressure, negative thinning makes it thicker.
#[inline]
#[must_use]
pub fn stroke_radius(size: f64, thinning: f64, pressure: f64, easing: Easing) -> f64 {
    size * easing.apply(0.5 - thinning * (0.5 - pressure))
}

/// Infer pressure from the distance the pointer travelled since the previous point.
///
/// Fast strokes, where samples are far apart, thin out; slow strokes fill in. The result moves from
/// `prev_pressure` a fraction of the way towards the target, so it changes smoothly along the stroke.
#[inline]
#[must_use]
pub fn simulate_pressure(prev_pressure: f64, distance: f64, size: f64) -> f64 {
    let speed = (distance / size).min(1.0);
    let rate = (1.0 - speed).min(1.0);
    num_traits::clamp(
        prev_pressure + (rate - prev_pressure) * (speed * RATE_OF_PRESSURE_CHANGE),
        0.0,
        1.0,
    )
}

/// The pressure to start the outline walk with.
///
/// This is a running average over the first few points, which keeps the start of a stroke from being fat
/// when pressure data is missing or noisy.
pub(crate) fn initial_pressure(points: &[StrokePoint], options: &StrokeOptions) -> f64 {
    let first = match points.first() {
        Some(first) => first.pressure,
        None => return 0.0,
    };

    points
        .iter()
        .take(PRESSURE_SEED_WINDOW)
        .fold(first, |average, point| {
            let pressure = if options.simulate_pressure {
                simulate_pressure(average, point.distance, options.size)
            } else {
                point.pressure
            };
            (average + pressure) / 2.0
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use freehand_geometry::{Point, Vector};

    fn point(pressure: f64, distance: f64) -> StrokePoint {
        StrokePoint {
            position: Point::zero(),
            pressure,
            distance,
            tangent: Vector::new(-1.0, 0.0),
            arc_length: 0.0,
        }
    }

    #[test]
    fn no_thinning_is_half_size() {
        for &pressure in &[0.0, 0.3, 1.0] {
            assert_abs_diff_eq!(stroke_radius(20.0, 0.0, pressure, Easing::Linear), 10.0);
        }
    }

    #[test]
    fn thinning_scales_with_pressure() {
        assert_abs_diff_eq!(stroke_radius(20.0, 1.0, 0.0, Easing::Linear), 0.0);
        assert_abs_diff_eq!(stroke_radius(20.0, 1.0, 1.0, Easing::Linear), 20.0);
        assert_abs_diff_eq!(stroke_radius(20.0, 0.5, 0.5, Easing::Linear), 10.0);
        // negative thinning inverts the relationship
        assert!(
            stroke_radius(20.0, -0.5, 0.2, Easing::Linear)
                > stroke_radius(20.0, -0.5, 0.8, Easing::Linear)
        );
    }

    #[test]
    fn easing_shapes_the_radius() {
        let linear = stroke_radius(10.0, 0.5, 0.2, Easing::Linear);
        let eased = stroke_radius(10.0, 0.5, 0.2, Easing::EaseInQuad);
        assert_abs_diff_eq!(linear, 3.5, epsilon = 1e-12);
        assert_abs_diff_eq!(eased, 1.225, epsilon = 1e-12);
    }

    #[test]
    fn stationary_pointer_raises_pressure_slowly() {
        // no movement: speed is zero, so nothing changes
        assert_eq!(simulate_pressure(0.4, 0.0, 10.0), 0.4);
        // a slow step nudges pressure towards the rate
        let p = simulate_pressure(0.4, 2.0, 10.0);
        assert_abs_diff_eq!(p, 0.4 + (0.8 - 0.4) * (0.2 * 0.275), epsilon = 1e-12);
    }

    #[test]
    fn fast_pointer_lowers_pressure() {
        let p = simulate_pressure(0.5, 50.0, 10.0);
        assert!(p < 0.5);
        assert!(p >= 0.0);
    }

    #[test]
    fn simulated_pressure_is_clamped() {
        assert_eq!(simulate_pressure(1.5, 0.0, 10.0), 1.0);
        assert_eq!(simulate_pressure(-0.5, 0.0, 10.0), 0.0);
    }

    #[test]
    fn initial_pressure_averages_real_pressure() {
        let points = [point(0.25, 0.0), point(0.5, 4.0)];
        let options = StrokeOptions::default();
        // ((0.25 + 0.25) / 2 + 0.5) / 2
        assert_abs_diff_eq!(initial_pressure(&points, &options), 0.375);
    }

    #[test]
    fn initial_pressure_only_looks_at_the_first_points() {
        let mut points = vec![point(0.5, 1.0); 10];
        points.extend(vec![point(0.0, 1.0); 20]);
        let options = StrokeOptions::default();
        assert_abs_diff_eq!(initial_pressure(&points, &options), 0.5);
    }

    #[test]
    fn initial_pressure_can_be_simulated() {
        let points = vec![point(0.25, 30.0); 5];
        let options = StrokeOptions::default().with_simulated_pressure(true);
        // every step is a full size long, so the simulated pressure keeps dropping
        assert!(initial_pressure(&points, &options) < 0.25);
        assert!(initial_pressure(&[], &options) == 0.0);
    }
}
