//! # Protokit Shapes
//!
//! Segment-based vector shapes for interactive 2D prototypes.
//!
//! ## Core Components
//!
//! - **Segments**: anchor points with optional relative Bezier handles
//! - **Factories**: segment sequences for ovals, (rounded) rectangles, lines
//!   and regular polygons
//! - **Curves**: move/line/cubic/close commands built from segments with
//!   paper.js handle semantics
//! - **Bounds**: the bounding box of a curve, cached together with it
//! - **Shape**: keeps frame, position, bounds and segments consistent under
//!   mutation and answers point-enclosure queries
//!
//! ## Architecture
//!
//! ```text
//! factories ──> Vec<Segment> ──> Shape
//!                                  ├── build_curve    ─┐
//!                                  ├── compute_bounds ─┴─> GeometryCache
//!                                  └── frame / position / encloses_point
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use protokit_core::{Point, Rect};
//! use protokit_shapes::Shape;
//!
//! let mut oval = Shape::oval(Rect::new(0.0, 0.0, 100.0, 50.0));
//! oval.set_position(Point::new(200.0, 200.0));
//! assert!(oval.encloses_point(Point::new(200.0, 200.0)));
//! ```

pub mod bounds;
pub mod curve;
pub mod factories;
pub mod segment;
pub mod shape;
pub mod style;
pub mod svg;

pub use bounds::{compute_bounds, GeometryCache};
pub use curve::{build_curve, Curve, PathCommand};
pub use factories::{
    line_segments, oval_segments, polygon_segments, rect_segments, try_polygon_segments, KAPPA,
};
pub use segment::Segment;
pub use shape::{Shape, ShapeDescription, ShapeOptions};
pub use style::{FillRule, LineCap, LineJoin, ShapeStyle};
