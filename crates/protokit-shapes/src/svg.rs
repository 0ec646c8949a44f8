//! SVG export
//!
//! Renders shapes as SVG `<path>` elements so a scene can be previewed in any
//! browser without a native renderer.

use std::fmt::Write;

use protokit_core::{Color, Rect};

use crate::shape::Shape;

fn paint(color: Option<Color>) -> String {
    match color {
        Some(c) => c.to_css(),
        None => "none".to_string(),
    }
}

/// A `<path>` element for `shape` in parent coordinates.
pub fn path_element(shape: &Shape) -> String {
    let style = shape.style();
    let mut element = format!(
        r#"<path d="{}" fill="{}" fill-rule="{}" stroke="{}" stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}""#,
        shape.curve().to_svg_path_data(),
        paint(style.fill_color),
        style.fill_rule.as_svg(),
        paint(style.stroke_color),
        style.stroke_width,
        style.line_cap.as_svg(),
        style.line_join.as_svg(),
    );
    if let Some(dash) = style.dash_length {
        let _ = write!(element, r#" stroke-dasharray="{dash} {dash}""#);
    }
    element.push_str("/>");
    element
}

/// A standalone SVG document showing `shapes` through `viewport`.
pub fn document<'a, I>(shapes: I, viewport: Rect) -> String
where
    I: IntoIterator<Item = &'a Shape>,
{
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
        viewport.size.width,
        viewport.size.height,
        viewport.origin.x,
        viewport.origin.y,
        viewport.size.width,
        viewport.size.height,
    );
    svg.push('\n');
    for shape in shapes {
        svg.push_str("  ");
        svg.push_str(&path_element(shape));
        svg.push('\n');
    }
    svg.push_str("</svg>\n");
    svg
}
