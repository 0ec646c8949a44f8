//! Segment factories
//!
//! Pure functions producing segment sequences for common shapes. Rectangles
//! follow the paper.js segment order. Ovals start at 0° and run through 90°,
//! 180° and 270°.

use protokit_core::{Error, ErrorReporter, GeometryError, Point, Radian, Rect};

use crate::segment::Segment;

/// Bezier handle length, relative to the radius, for approximating a quarter
/// circle with one cubic curve: 4(√2 − 1)/3.
pub const KAPPA: f64 = 4.0 * (std::f64::consts::SQRT_2 - 1.0) / 3.0;

/// Unit circle template at 0°, 90°, 180° and 270°, handles tangent to the circle.
const UNIT_OVAL: [(Point, Point, Point); 4] = [
    (
        Point::new(1.0, 0.0),
        Point::new(0.0, -KAPPA),
        Point::new(0.0, KAPPA),
    ),
    (
        Point::new(0.0, 1.0),
        Point::new(KAPPA, 0.0),
        Point::new(-KAPPA, 0.0),
    ),
    (
        Point::new(-1.0, 0.0),
        Point::new(0.0, KAPPA),
        Point::new(0.0, -KAPPA),
    ),
    (
        Point::new(0.0, -1.0),
        Point::new(-KAPPA, 0.0),
        Point::new(KAPPA, 0.0),
    ),
];

/// Four segments approximating the ellipse inscribed in `rect`.
pub fn oval_segments(rect: Rect) -> Vec<Segment> {
    let radius = Point::new(rect.size.width / 2.0, rect.size.height / 2.0);
    let center = rect.center();

    UNIT_OVAL
        .iter()
        .map(|&(point, handle_in, handle_out)| {
            Segment::with_handles(
                point * radius + center,
                Some(handle_in * radius),
                Some(handle_out * radius),
            )
        })
        .collect()
}

/// Segments outlining `rect`.
///
/// Without a corner radius this is the four corners, bottom-left, top-left,
/// top-right, bottom-right. With a radius each corner becomes two segments
/// joined by a short Bezier arc. The radius is clamped to half of the smaller
/// side.
pub fn rect_segments(rect: Rect, corner_radius: f64) -> Vec<Segment> {
    let (x0, y0, x1, y1) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());

    if corner_radius <= 0.0 {
        return vec![
            Segment::new(Point::new(x0, y1)),
            Segment::new(Point::new(x0, y0)),
            Segment::new(Point::new(x1, y0)),
            Segment::new(Point::new(x1, y1)),
        ];
    }

    let r = corner_radius.min(rect.size.width.min(rect.size.height) / 2.0);
    let h = r * KAPPA;

    vec![
        // bottom-left
        Segment::with_handles(Point::new(x0 + r, y1), None, Some(Point::new(-h, 0.0))),
        Segment::with_handles(Point::new(x0, y1 - r), Some(Point::new(0.0, h)), None),
        // top-left
        Segment::with_handles(Point::new(x0, y0 + r), None, Some(Point::new(0.0, -h))),
        Segment::with_handles(Point::new(x0 + r, y0), Some(Point::new(-h, 0.0)), None),
        // top-right
        Segment::with_handles(Point::new(x1 - r, y0), None, Some(Point::new(h, 0.0))),
        Segment::with_handles(Point::new(x1, y0 + r), Some(Point::new(0.0, -h)), None),
        // bottom-right
        Segment::with_handles(Point::new(x1, y1 - r), None, Some(Point::new(0.0, h))),
        Segment::with_handles(Point::new(x1 - r, y1), Some(Point::new(h, 0.0)), None),
    ]
}

/// Two handle-less segments from `from` to `to`.
pub fn line_segments(from: Point, to: Point) -> Vec<Segment> {
    vec![Segment::new(from), Segment::new(to)]
}

/// Vertices of a regular polygon, the first one directly above `center`.
pub fn try_polygon_segments(
    center: Point,
    radius: f64,
    sides: usize,
) -> Result<Vec<Segment>, GeometryError> {
    if sides < 3 {
        return Err(GeometryError::InvalidPolygonSides { sides });
    }

    let step = 360.0 / sides as f64;
    Ok((0..sides)
        .map(|i| {
            let angle = Radian::from_degrees(i as f64 * step - 90.0);
            Segment::new(center.polar_offset(angle, radius))
        })
        .collect())
}

/// Like [`try_polygon_segments`], but hands failures to `reporter` and
/// returns no segments instead.
pub fn polygon_segments(
    center: Point,
    radius: f64,
    sides: usize,
    reporter: &dyn ErrorReporter,
) -> Vec<Segment> {
    match try_polygon_segments(center, radius, sides) {
        Ok(segments) => segments,
        Err(e) => {
            reporter.report(&Error::from(e));
            Vec::new()
        }
    }
}
