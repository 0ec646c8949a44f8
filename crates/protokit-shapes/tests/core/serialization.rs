use protokit_core::{Color, Point, Rect};
use protokit_shapes::{FillRule, LineCap, Shape, ShapeStyle};

#[test]
fn test_shape_serializes_description_only() {
    let shape = Shape::rectangle(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0);
    let value = serde_json::to_value(&shape).unwrap();

    let object = value.as_object().unwrap();
    assert!(object.contains_key("segments"));
    assert!(object.contains_key("closed"));
    assert!(object.contains_key("style"));
    assert!(!object.contains_key("bounds"));
    assert!(!object.contains_key("geometry"));

    // Handle-less segments carry only their anchor.
    assert_eq!(
        value["segments"][0],
        serde_json::json!({ "point": { "x": 0.0, "y": 10.0 } })
    );
}

#[test]
fn test_deserialized_shape_rebuilds_geometry() {
    let json = r#"{
        "segments": [
            { "point": { "x": 0.0, "y": 0.0 } },
            { "point": { "x": 10.0, "y": 0.0 } },
            { "point": { "x": 10.0, "y": 10.0 } }
        ],
        "closed": true,
        "style": { "fill_rule": "even_odd", "line_cap": "round" }
    }"#;

    let shape: Shape = serde_json::from_str(json).unwrap();

    assert_eq!(shape.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
    assert!(shape.curve().is_closed());
    assert!(shape.encloses_point(Point::new(8.0, 2.0)));
    assert_eq!(shape.style().fill_rule, FillRule::EvenOdd);
    assert_eq!(shape.style().line_cap, LineCap::Round);
    // Unspecified style fields fall back to defaults.
    assert_eq!(shape.style().fill_color, Some(Color::BLACK));
}

#[test]
fn test_shape_survives_json() {
    let shape = Shape::oval(Rect::new(5.0, 5.0, 40.0, 20.0))
        .with_style(ShapeStyle::default().with_stroke(Color::RED, 2.0));

    let json = serde_json::to_string(&shape).unwrap();
    let restored: Shape = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, shape);
}
