use protokit_core::Point;
use serde::{Deserialize, Serialize};

/// An anchor point with optional Bezier control handles.
///
/// `point` is expressed in the parent coordinate space of the owning shape.
/// Handles are offsets relative to `point`, so translating a segment only
/// moves its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Segment {
    pub point: Point,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_in: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_out: Option<Point>,
}

impl Segment {
    /// A corner segment without handles.
    pub const fn new(point: Point) -> Self {
        Self {
            point,
            handle_in: None,
            handle_out: None,
        }
    }

    pub const fn with_handles(
        point: Point,
        handle_in: Option<Point>,
        handle_out: Option<Point>,
    ) -> Self {
        Self {
            point,
            handle_in,
            handle_out,
        }
    }

    /// Absolute position of the incoming control point.
    pub fn absolute_handle_in(&self) -> Point {
        self.point + self.handle_in.unwrap_or(Point::ZERO)
    }

    /// Absolute position of the outgoing control point.
    pub fn absolute_handle_out(&self) -> Point {
        self.point + self.handle_out.unwrap_or(Point::ZERO)
    }

    pub fn has_handles(&self) -> bool {
        self.handle_in.is_some() || self.handle_out.is_some()
    }

    pub fn translated(&self, delta: Point) -> Segment {
        Segment {
            point: self.point + delta,
            ..*self
        }
    }
}

impl From<Point> for Segment {
    fn from(point: Point) -> Self {
        Segment::new(point)
    }
}
