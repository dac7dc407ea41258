// MIT/Apache2 License

use crate::{outline_path, stroke, InputPoint, Result, StrokeOptions};
use freehand_geometry::Point;
use lyon_path::Path;

/// A stroke that is still being drawn.
///
/// Feed it samples as the pointer moves and ask for the outline to redraw. Each request recomputes the
/// outline from every sample so far; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Stroke {
    options: StrokeOptions,
    points: Vec<InputPoint>,
}

impl Stroke {
    /// Start a new stroke. Fails if the options are out of range.
    pub fn new(options: StrokeOptions) -> Result<Self> {
        options.validate()?;
        Ok(Stroke {
            options,
            points: Vec::new(),
        })
    }

    /// The options this stroke is drawn with.
    #[inline]
    pub fn options(&self) -> &StrokeOptions {
        &self.options
    }

    /// The samples collected so far.
    #[inline]
    pub fn points(&self) -> &[InputPoint] {
        &self.points
    }

    /// Whether no samples have been collected yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a sample.
    #[inline]
    pub fn push(&mut self, point: impl Into<InputPoint>) {
        self.points.push(point.into());
    }

    /// The outline of the stroke so far.
    pub fn outline(&self) -> Vec<Point> {
        stroke(&self.points, &self.options)
    }

    /// The fillable path of the stroke so far, if there is anything to fill.
    pub fn path(&self) -> Option<Path> {
        outline_path(&self.outline())
    }

    /// Throw away every sample, e.g. because the gesture was cancelled.
    pub fn cancel(&mut self) {
        log::debug!("discarding stroke of {} samples", self.points.len());
        self.points.clear();
    }

    /// The pointer has been lifted: compute the final outline.
    pub fn finish(self) -> Vec<Point> {
        let options = self.options.with_last(true);
        stroke(&self.points, &options)
    }
}

impl<P: Into<InputPoint>> Extend<P> for Stroke {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.points.extend(iter.into_iter().map(Into::into));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Easing, StrokeEnd};

    #[test]
    fn bad_options_are_refused() {
        let err = Stroke::new(StrokeOptions::default().with_size(-1.0)).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn outline_grows_with_samples() {
        let mut stroke = Stroke::new(StrokeOptions::default()).unwrap();
        assert!(stroke.is_empty());
        assert!(stroke.outline().is_empty());
        assert!(stroke.path().is_none());

        stroke.extend((0..10).map(|i| (f64::from(i) * 10.0, 0.0, 0.5)));
        let short = stroke.outline().len();
        stroke.extend((10..40).map(|i| (f64::from(i) * 10.0, f64::from(i - 10) * 4.0, 0.5)));
        assert_eq!(stroke.points().len(), 40);
        assert!(stroke.outline().len() > short);
        assert!(stroke.path().is_some());
    }

    #[test]
    fn cancel_discards_samples() {
        let mut stroke = Stroke::new(StrokeOptions::default()).unwrap();
        stroke.push((1.0, 2.0));
        stroke.push(InputPoint::with_pressure(3.0, 4.0, 0.5));
        stroke.cancel();
        assert!(stroke.is_empty());
        assert!(stroke.finish().is_empty());
    }

    #[test]
    fn finishing_a_tap_draws_a_dot() {
        let options = StrokeOptions::default()
            .with_start(StrokeEnd::new(Easing::Linear))
            .with_end(StrokeEnd::new(Easing::Linear));
        let mut stroke = Stroke::new(options).unwrap();
        stroke.push((5.0, 5.0, 0.5));

        // while the pointer is down, a tap still has its caps
        assert!(stroke.outline().len() > 13);
        assert_eq!(stroke.finish().len(), 13);
    }
}
