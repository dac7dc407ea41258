// MIT/Apache2 License

//! Turning an outline into a fillable path.
//!
//! The outline is a polygon; filling it directly gives visible facets on tight curves. These helpers join
//! consecutive outline points with quadratic curves through their midpoints, which smooths the facets
//! without moving the outline.

use crate::{stroke, InputPoint, StrokeOptions};
use freehand_geometry::{Point, PointExt};
use lyon_geom::QuadraticBezierSegment;
use lyon_path::{math, Path};

/// Outlines with fewer points than this are treated as empty.
const MIN_OUTLINE_POINTS: usize = 4;

#[inline]
fn to_lyon(p: Point) -> math::Point {
    math::point(p.x as f32, p.y as f32)
}

/// The curve segments that trace an outline, in order.
///
/// The first segment starts at the first outline point; each following outline point serves as the
/// control point of a segment ending halfway to the point after it. The closing edge back to the first
/// point is left to whoever fills the path.
pub fn outline_segments(outline: &[Point]) -> Vec<QuadraticBezierSegment<f32>> {
    if outline.len() < MIN_OUTLINE_POINTS {
        return Vec::new();
    }

    let mut from = to_lyon(outline[0]);
    outline
        .windows(2)
        .skip(1)
        .map(|pair| {
            let segment = QuadraticBezierSegment {
                from,
                ctrl: to_lyon(pair[0]),
                to: to_lyon(pair[0].midpoint(pair[1])),
            };
            from = segment.to;
            segment
        })
        .collect()
}

/// Build a closed path from an outline. Returns `None` if the outline is too short to fill.
pub fn outline_path(outline: &[Point]) -> Option<Path> {
    let segments = outline_segments(outline);
    let first = segments.first()?;

    let mut builder = Path::builder();
    builder.begin(first.from);
    for segment in &segments {
        builder.quadratic_bezier_to(segment.ctrl, segment.to);
    }
    builder.end(true);

    Some(builder.build())
}

/// Run the whole pipeline and build a closed path from the result.
pub fn stroke_path(input: &[InputPoint], options: &StrokeOptions) -> Option<Path> {
    outline_path(&stroke(input, options))
}
