//! Shape geometry controller
//!
//! A [`Shape`] owns its segments and keeps three views of the same geometry in
//! step: the segment anchors, the cached curve/bounds pair, and the frame the
//! host layer sees. Every mutator rebuilds the cache before returning.

use lyon::algorithms::hit_test::hit_test_path;
use protokit_core::{ErrorReporter, Point, Rect, ShapeError};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bounds::GeometryCache;
use crate::curve::Curve;
use crate::factories::{line_segments, oval_segments, polygon_segments, rect_segments};
use crate::segment::Segment;
use crate::style::ShapeStyle;

/// Numeric tolerances used by a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeOptions {
    /// Largest per-dimension difference `set_frame` accepts as "same size"
    pub frame_size_tolerance: f64,
    /// Curve flattening tolerance for `encloses_point`
    pub hit_test_tolerance: f64,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            frame_size_tolerance: 1e-6,
            hit_test_tolerance: 0.01,
        }
    }
}

/// The serialized form of a shape. Derived geometry is not stored; it is
/// rebuilt when a shape is created from a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescription {
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub style: ShapeStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ShapeDescription", into = "ShapeDescription")]
pub struct Shape {
    segments: Vec<Segment>,
    closed: bool,
    geometry: GeometryCache,
    style: ShapeStyle,
    options: ShapeOptions,
}

impl Shape {
    pub fn new(segments: Vec<Segment>, closed: bool) -> Self {
        let geometry = GeometryCache::build(&segments, closed);
        Self {
            segments,
            closed,
            geometry,
            style: ShapeStyle::default(),
            options: ShapeOptions::default(),
        }
    }

    /// Closed ellipse inscribed in `rect`.
    pub fn oval(rect: Rect) -> Self {
        Self::new(oval_segments(rect), true)
    }

    /// Closed rectangle, rounded when `corner_radius` is positive.
    pub fn rectangle(rect: Rect, corner_radius: f64) -> Self {
        Self::new(rect_segments(rect, corner_radius), true)
    }

    /// Open straight line.
    pub fn line(from: Point, to: Point) -> Self {
        Self::new(line_segments(from, to), false)
    }

    /// Closed regular polygon. Invalid side counts are handed to `reporter`
    /// and produce a shape without segments.
    pub fn polygon(center: Point, radius: f64, sides: usize, reporter: &dyn ErrorReporter) -> Self {
        Self::new(polygon_segments(center, radius, sides, reporter), true)
    }

    pub fn with_style(mut self, style: ShapeStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_options(mut self, options: ShapeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }

    /// The frame always equals the bounds; only the segments decide its size.
    pub fn frame(&self) -> Rect {
        self.geometry.bounds()
    }

    /// Center of the frame.
    pub fn position(&self) -> Point {
        self.frame().center()
    }

    /// Curve in the parent coordinate space.
    pub fn curve(&self) -> &Curve {
        self.geometry.curve()
    }

    /// Curve translated so the bounds origin sits at the local origin, which is
    /// what a renderer drawing inside the frame expects.
    pub fn local_curve(&self) -> Curve {
        self.geometry.curve().translated(-self.bounds().origin)
    }

    pub fn to_lyon_path(&self) -> lyon::path::Path {
        self.geometry.curve().to_lyon_path()
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.style
    }

    pub fn set_style(&mut self, style: ShapeStyle) {
        self.style = style;
    }

    pub fn options(&self) -> ShapeOptions {
        self.options
    }

    /// Replace the segments. This is the only way the frame size changes.
    pub fn set_segments(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
        self.rebuild_geometry();
    }

    pub fn set_closed(&mut self, closed: bool) {
        if self.closed != closed {
            self.closed = closed;
            self.rebuild_geometry();
        }
    }

    /// Append a handle-less segment at `point`.
    pub fn add_point(&mut self, point: Point) {
        self.segments.push(Segment::new(point));
        self.rebuild_geometry();
    }

    /// Move the shape so its frame is centered on `position`.
    pub fn set_position(&mut self, position: Point) {
        let delta = position - self.position();
        self.apply_translation(delta);
    }

    /// Move the shape to `frame`.
    ///
    /// # Panics
    ///
    /// Panics when `frame.size` differs from the current bounds size. A shape
    /// cannot be resized through its frame; use [`Shape::try_set_frame`] to
    /// check first.
    pub fn set_frame(&mut self, frame: Rect) {
        if let Err(e) = self.try_set_frame(frame) {
            panic!("{e}");
        }
    }

    /// Move the shape to `frame`, or fail without changes when the size does
    /// not match the current bounds.
    pub fn try_set_frame(&mut self, frame: Rect) -> Result<(), ShapeError> {
        let current = self.bounds();
        if !frame
            .size
            .approx_eq(&current.size, self.options.frame_size_tolerance)
        {
            debug!(current = %current.size, requested = %frame.size, "rejected frame resize");
            return Err(ShapeError::FrameSizeMismatch {
                current: current.size,
                requested: frame.size,
            });
        }

        self.apply_translation(frame.center() - current.center());
        Ok(())
    }

    /// Whether `point`, in the parent coordinate space, lies inside the shape
    /// under its fill rule. Open shapes enclose nothing.
    pub fn encloses_point(&self, point: Point) -> bool {
        if !self.closed {
            return false;
        }

        // Tested in the local frame so coordinates stay small once narrowed to f32.
        let local = point - self.bounds().origin;
        let path = self.local_curve().to_lyon_path();
        hit_test_path(
            &lyon::math::point(local.x as f32, local.y as f32),
            path.iter(),
            self.style.fill_rule.into(),
            self.options.hit_test_tolerance as f32,
        )
    }

    fn apply_translation(&mut self, delta: Point) {
        if delta == Point::ZERO {
            return;
        }

        debug!(dx = delta.x, dy = delta.y, "translating shape");
        for segment in &mut self.segments {
            segment.point += delta;
        }
        self.rebuild_geometry();
    }

    fn rebuild_geometry(&mut self) {
        self.geometry = GeometryCache::build(&self.segments, self.closed);
        trace!(
            segments = self.segments.len(),
            closed = self.closed,
            bounds = %self.geometry.bounds(),
            "rebuilt shape geometry"
        );
    }
}

impl From<ShapeDescription> for Shape {
    fn from(description: ShapeDescription) -> Self {
        Shape::new(description.segments, description.closed).with_style(description.style)
    }
}

impl From<Shape> for ShapeDescription {
    fn from(shape: Shape) -> Self {
        ShapeDescription {
            segments: shape.segments,
            closed: shape.closed,
            style: shape.style,
        }
    }
}
