// MIT/Apache2 License

use crate::{Error, InvalidInput, Result};

/// A shaping function applied to values in `0..=1`.
///
/// Easings are used to shape the stroke radius from pressure and to shape tapers. Every variant maps
/// `0..=1` into `0..=1`; none of them are required to be monotonic.
#[derive(Debug, Copy, Clone)]
pub enum Easing {
    /// `t`
    Linear,
    /// `t²`
    EaseInQuad,
    /// `t(2 - t)`
    EaseOutQuad,
    /// Quadratic ease in for the first half, ease out for the second.
    EaseInOutQuad,
    /// `t³`
    EaseInCubic,
    /// `(t - 1)³ + 1`
    EaseOutCubic,
    /// Cubic ease in for the first half, ease out for the second.
    EaseInOutCubic,
    /// A caller-supplied function.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Apply this easing to `t`.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (2.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    (t - 1.0) * u * u + 1.0
                }
            }
            Easing::Custom(f) => f(t),
        }
    }
}

impl Default for Easing {
    #[inline]
    fn default() -> Self {
        Easing::Linear
    }
}

/// How one end of the stroke is finished.
#[derive(Debug, Copy, Clone)]
pub struct StrokeEnd {
    /// Draw a round cap when `true`, a flat one otherwise. Ignored while the end is tapered.
    pub cap: bool,
    /// The arc length over which the radius shrinks to nothing at this end. `None` disables the taper.
    pub taper: Option<f64>,
    /// The easing applied to the taper.
    pub easing: Easing,
}

impl StrokeEnd {
    /// A round, untapered end with the given taper easing.
    #[inline]
    #[must_use]
    pub fn new(easing: Easing) -> Self {
        StrokeEnd {
            cap: true,
            taper: None,
            easing,
        }
    }

    /// Set whether this end is capped with a round cap.
    #[inline]
    #[must_use]
    pub fn with_cap(mut self, cap: bool) -> Self {
        self.cap = cap;
        self
    }

    /// Set the taper length of this end.
    #[inline]
    #[must_use]
    pub fn with_taper(mut self, taper: impl Into<Option<f64>>) -> Self {
        self.taper = taper.into();
        self
    }

    /// Set the taper easing of this end.
    #[inline]
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The taper length, with a missing taper counting as zero.
    #[inline]
    pub(crate) fn taper_length(&self) -> f64 {
        self.taper.unwrap_or(0.0)
    }
}

/// The configuration for one stroke.
#[derive(Debug, Copy, Clone)]
pub struct StrokeOptions {
    /// The base diameter of the stroke.
    pub size: f64,
    /// How strongly pressure affects the radius, from `-1` to `1`. Zero or below gives a constant width of
    /// half the size.
    pub thinning: f64,
    /// How aggressively outline points are thinned out on gentle curves, from `0` to `1`.
    pub smoothing: f64,
    /// How strongly raw input is low-pass filtered, from `0` to `1`.
    pub streamline: f64,
    /// Infer pressure from the spacing between samples instead of using the recorded pressure.
    pub simulate_pressure: bool,
    /// The easing applied to pressure before it becomes a radius.
    pub easing: Easing,
    /// How the start of the stroke is finished.
    pub start: StrokeEnd,
    /// How the end of the stroke is finished.
    pub end: StrokeEnd,
    /// Whether the input is complete, i.e. the pointer has been lifted.
    pub last: bool,
}

impl Default for StrokeOptions {
    #[inline]
    fn default() -> Self {
        StrokeOptions {
            size: 30.0,
            thinning: 0.5,
            smoothing: 0.5,
            streamline: 0.5,
            simulate_pressure: false,
            easing: Easing::Linear,
            start: StrokeEnd::new(Easing::EaseOutQuad),
            end: StrokeEnd::new(Easing::EaseOutCubic),
            last: false,
        }
    }
}

impl StrokeOptions {
    /// Set the base diameter of the stroke.
    #[inline]
    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Set the thinning coefficient.
    #[inline]
    #[must_use]
    pub fn with_thinning(mut self, thinning: f64) -> Self {
        self.thinning = thinning;
        self
    }

    /// Set the smoothing coefficient.
    #[inline]
    #[must_use]
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the streamline coefficient.
    #[inline]
    #[must_use]
    pub fn with_streamline(mut self, streamline: f64) -> Self {
        self.streamline = streamline;
        self
    }

    /// Set whether pressure is simulated from sample spacing.
    #[inline]
    #[must_use]
    pub fn with_simulated_pressure(mut self, simulate_pressure: bool) -> Self {
        self.simulate_pressure = simulate_pressure;
        self
    }

    /// Set the pressure easing.
    #[inline]
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set how the start of the stroke is finished.
    #[inline]
    #[must_use]
    pub fn with_start(mut self, start: StrokeEnd) -> Self {
        self.start = start;
        self
    }

    /// Set how the end of the stroke is finished.
    #[inline]
    #[must_use]
    pub fn with_end(mut self, end: StrokeEnd) -> Self {
        self.end = end;
        self
    }

    /// Mark the input as complete.
    #[inline]
    #[must_use]
    pub fn with_last(mut self, last: bool) -> Self {
        self.last = last;
        self
    }

    /// Check that every option lies within its documented range.
    ///
    /// The pipeline does not call this; it draws nothing for a non-positive size and otherwise trusts its
    /// input. Callers that want bad options reported rather than silently rendered can call this first.
    pub fn validate(&self) -> Result {
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(InvalidInput::Size(self.size).into());
        }
        if !(-1.0..=1.0).contains(&self.thinning) {
            return Err(InvalidInput::Thinning(self.thinning).into());
        }
        if !(0.0..=1.0).contains(&self.smoothing) {
            return Err(InvalidInput::Smoothing(self.smoothing).into());
        }
        if !(0.0..=1.0).contains(&self.streamline) {
            return Err(InvalidInput::Streamline(self.streamline).into());
        }

        let taper_ok = |taper: Option<f64>| taper.map_or(true, |t| t.is_finite() && t >= 0.0);
        if !taper_ok(self.start.taper) {
            return Err(Error::invalid_input(InvalidInput::StartTaper(
                self.start.taper_length(),
            )));
        }
        if !taper_ok(self.end.taper) {
            return Err(Error::invalid_input(InvalidInput::EndTaper(
                self.end.taper_length(),
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
    ];

    #[test]
    fn easings_pin_the_endpoints() {
        for easing in ALL.iter() {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn easings_stay_in_range() {
        for easing in ALL.iter() {
            for i in 0..=100 {
                let v = easing.apply(f64::from(i) / 100.0);
                assert!((-1e-12..=1.0 + 1e-12).contains(&v), "{:?} gave {}", easing, v);
            }
        }
    }

    #[test]
    fn ease_out_curves_lead_linear() {
        assert!(Easing::EaseOutQuad.apply(0.25) > 0.25);
        assert!(Easing::EaseOutCubic.apply(0.25) > Easing::EaseOutQuad.apply(0.25));
        assert_abs_diff_eq!(Easing::EaseInOutCubic.apply(0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Easing::EaseInOutQuad.apply(0.5), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn custom_easing_is_called() {
        fn half(t: f64) -> f64 {
            t / 2.0
        }
        assert_eq!(Easing::Custom(half).apply(0.5), 0.25);
    }

    #[test]
    fn defaults_are_valid() {
        let options = StrokeOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.size, 30.0);
        assert!(options.start.cap && options.end.cap);
        assert_eq!(options.start.taper_length(), 0.0);
    }

    #[test]
    fn validation_reports_first_bad_field() {
        let err = StrokeOptions::default()
            .with_size(0.0)
            .with_smoothing(2.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.as_invalid_input(), Some(InvalidInput::Size(0.0)));

        let err = StrokeOptions::default()
            .with_thinning(-1.5)
            .validate()
            .unwrap_err();
        assert_eq!(err.as_invalid_input(), Some(InvalidInput::Thinning(-1.5)));

        let err = StrokeOptions::default()
            .with_end(StrokeEnd::new(Easing::Linear).with_taper(-4.0))
            .validate()
            .unwrap_err();
        assert_eq!(err.as_invalid_input(), Some(InvalidInput::EndTaper(-4.0)));
    }

    #[test]
    fn nan_options_are_rejected() {
        assert!(StrokeOptions::default()
            .with_streamline(f64::NAN)
            .validate()
            .is_err());
        assert!(StrokeOptions::default()
            .with_size(f64::INFINITY)
            .validate()
            .is_err());
    }
}
