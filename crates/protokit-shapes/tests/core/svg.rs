use protokit_core::{Color, Point, Rect};
use protokit_shapes::svg::{document, path_element};
use protokit_shapes::{LineCap, Shape, ShapeStyle};

#[test]
fn test_path_element_maps_style() {
    let shape = Shape::line(Point::new(0.0, 0.0), Point::new(10.0, 5.0)).with_style(
        ShapeStyle::default()
            .with_fill(None)
            .with_stroke(Color::RED, 2.0)
            .with_dash(Some(4.0))
            .with_cap(LineCap::Round),
    );

    let element = path_element(&shape);

    assert!(element.starts_with("<path "));
    assert!(element.ends_with("/>"));
    assert!(element.contains(r#"d="M 0 0 L 10 5""#));
    assert!(element.contains(r#"fill="none""#));
    assert!(element.contains(r#"stroke="rgba(255,0,0,1)""#));
    assert!(element.contains(r#"stroke-width="2""#));
    assert!(element.contains(r#"stroke-linecap="round""#));
    assert!(element.contains(r#"stroke-dasharray="4 4""#));
}

#[test]
fn test_path_element_without_dash() {
    let shape = Shape::rectangle(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0);
    let element = path_element(&shape);

    assert!(!element.contains("stroke-dasharray"));
    assert!(element.contains(r#"fill="rgba(0,0,0,1)""#));
    assert!(element.contains(r#"stroke="none""#));
    assert!(element.contains(r#"fill-rule="nonzero""#));
}

#[test]
fn test_document_contains_every_shape() {
    let shapes = [
        Shape::oval(Rect::new(0.0, 0.0, 10.0, 10.0)),
        Shape::rectangle(Rect::new(20.0, 0.0, 10.0, 10.0), 2.0),
    ];

    let svg = document(&shapes, Rect::new(0.0, 0.0, 100.0, 50.0));

    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="0 0 100 50""#));
    assert_eq!(svg.matches("<path ").count(), 2);
    assert!(svg.trim_end().ends_with("</svg>"));
}
