use std::cell::RefCell;

use protokit_core::{Error, GeometryError, Point, Rect};
use protokit_shapes::{
    build_curve, compute_bounds, line_segments, oval_segments, polygon_segments, rect_segments,
    try_polygon_segments, KAPPA,
};

use crate::{assert_point_near, assert_rect_near};

#[test]
fn test_kappa_value() {
    assert!((KAPPA - 0.5522847498307936).abs() < 1e-12);
}

#[test]
fn test_oval_segments_bounds_match_rect() {
    let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    let segments = oval_segments(rect);
    assert_eq!(segments.len(), 4);

    let bounds = compute_bounds(&build_curve(&segments, true));
    assert_rect_near(bounds, rect);
}

#[test]
fn test_oval_segments_start_at_zero_degrees() {
    let segments = oval_segments(Rect::new(0.0, 0.0, 100.0, 50.0));

    assert_point_near(segments[0].point, Point::new(100.0, 25.0));
    assert_point_near(segments[1].point, Point::new(50.0, 50.0));
    assert_point_near(segments[2].point, Point::new(0.0, 25.0));
    assert_point_near(segments[3].point, Point::new(50.0, 0.0));

    // Handles are scaled by the half-extents and mirror each other.
    let first = segments[0];
    assert_point_near(first.handle_out.unwrap(), Point::new(0.0, 25.0 * KAPPA));
    assert_point_near(first.handle_in.unwrap(), Point::new(0.0, -25.0 * KAPPA));
    let second = segments[1];
    assert_point_near(second.handle_out.unwrap(), Point::new(-50.0 * KAPPA, 0.0));
}

#[test]
fn test_rect_segments_without_radius() {
    let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    let segments = rect_segments(rect, 0.0);

    assert_eq!(segments.len(), 4);
    assert!(segments.iter().all(|s| !s.has_handles()));
    let points: Vec<Point> = segments.iter().map(|s| s.point).collect();
    assert_eq!(
        points,
        vec![
            Point::new(0.0, 50.0),
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 50.0),
        ]
    );

    // Negative radii behave like no radius.
    assert_eq!(rect_segments(rect, -3.0), segments);
}

#[test]
fn test_rect_segments_with_radius() {
    let rect = Rect::new(10.0, 10.0, 100.0, 50.0);
    let segments = rect_segments(rect, 10.0);

    assert_eq!(segments.len(), 8);
    assert_eq!(segments[0].point, Point::new(20.0, 60.0));
    assert_point_near(segments[0].handle_out.unwrap(), Point::new(-10.0 * KAPPA, 0.0));
    assert_eq!(segments[0].handle_in, None);
    assert_eq!(segments[1].point, Point::new(10.0, 50.0));

    let bounds = compute_bounds(&build_curve(&segments, true));
    assert_rect_near(bounds, rect);
}

#[test]
fn test_rect_segments_radius_is_clamped() {
    let segments = rect_segments(Rect::new(0.0, 0.0, 100.0, 50.0), 100.0);
    assert_eq!(segments[0].point, Point::new(25.0, 50.0));
    assert_eq!(segments[1].point, Point::new(0.0, 25.0));
}

#[test]
fn test_line_segments() {
    let segments = line_segments(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].point, Point::new(1.0, 2.0));
    assert_eq!(segments[1].point, Point::new(3.0, 4.0));
    assert!(segments.iter().all(|s| !s.has_handles()));
}

#[test]
fn test_polygon_segments_square() {
    let segments = try_polygon_segments(Point::new(0.0, 0.0), 10.0, 4).unwrap();
    assert_eq!(segments.len(), 4);

    // First vertex directly above the center, then clockwise on screen.
    assert_point_near(segments[0].point, Point::new(0.0, -10.0));
    assert_point_near(segments[1].point, Point::new(10.0, 0.0));
    assert_point_near(segments[2].point, Point::new(0.0, 10.0));
    assert_point_near(segments[3].point, Point::new(-10.0, 0.0));
    assert!(segments.iter().all(|s| !s.has_handles()));
}

#[test]
fn test_polygon_segments_reports_too_few_sides() {
    let reported = RefCell::new(Vec::new());
    let reporter = |e: &Error| reported.borrow_mut().push(e.clone());

    let segments = polygon_segments(Point::new(5.0, 5.0), 10.0, 2, &reporter);

    assert!(segments.is_empty());
    assert_eq!(
        reported.borrow().as_slice(),
        &[Error::Geometry(GeometryError::InvalidPolygonSides { sides: 2 })]
    );
}

#[test]
fn test_polygon_segments_valid_input_reports_nothing() {
    let reported = RefCell::new(0usize);
    let reporter = |_: &Error| *reported.borrow_mut() += 1;

    let segments = polygon_segments(Point::new(0.0, 0.0), 10.0, 6, &reporter);

    assert_eq!(segments.len(), 6);
    assert_eq!(*reported.borrow(), 0);
}

#[test]
fn test_try_polygon_segments_error() {
    assert_eq!(
        try_polygon_segments(Point::ZERO, 1.0, 0),
        Err(GeometryError::InvalidPolygonSides { sides: 0 })
    );
}
