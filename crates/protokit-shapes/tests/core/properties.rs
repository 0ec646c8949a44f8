use proptest::prelude::*;
use protokit_core::{Point, Rect};
use protokit_shapes::{build_curve, compute_bounds, Segment, Shape};

fn point() -> impl Strategy<Value = Point> {
    (-1e3f64..1e3, -1e3f64..1e3).prop_map(|(x, y)| Point::new(x, y))
}

fn segment() -> impl Strategy<Value = Segment> {
    (
        point(),
        proptest::option::of(point()),
        proptest::option::of(point()),
    )
        .prop_map(|(p, handle_in, handle_out)| Segment::with_handles(p, handle_in, handle_out))
}

/// Anchors plus every handle the curve actually uses.
fn expected_bounds(segments: &[Segment], closed: bool) -> Rect {
    let last = segments.len() - 1;
    let mut points = Vec::new();
    for (i, s) in segments.iter().enumerate() {
        points.push(s.point);
        if closed || i > 0 {
            points.push(s.absolute_handle_in());
        }
        if closed || i < last {
            points.push(s.absolute_handle_out());
        }
    }
    Rect::bounding(points).unwrap()
}

proptest! {
    #[test]
    fn prop_bounds_cover_control_polygon(
        segments in proptest::collection::vec(segment(), 1..8),
        closed in any::<bool>(),
    ) {
        let bounds = compute_bounds(&build_curve(&segments, closed));
        prop_assert_eq!(bounds, expected_bounds(&segments, closed));
    }

    #[test]
    fn prop_set_position_preserves_size(
        segments in proptest::collection::vec(segment(), 1..8),
        closed in any::<bool>(),
        delta in point(),
    ) {
        let mut shape = Shape::new(segments, closed);
        let before = shape.bounds();

        shape.set_position(shape.position() + delta);

        let after = shape.bounds();
        prop_assert!(after.size.approx_eq(&before.size, 1e-6));
        prop_assert!(after.origin.distance_to(&(before.origin + delta)) < 1e-6);
    }

    #[test]
    fn prop_oval_bounds_match_rect(
        origin in point(),
        width in 0.1f64..500.0,
        height in 0.1f64..500.0,
    ) {
        let rect = Rect::new(origin.x, origin.y, width, height);
        let bounds = Shape::oval(rect).bounds();
        prop_assert!(bounds.origin.distance_to(&rect.origin) < 1e-9);
        prop_assert!(bounds.size.approx_eq(&rect.size, 1e-9));
    }
}
