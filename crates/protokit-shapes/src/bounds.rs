use protokit_core::Rect;

use crate::curve::{build_curve, Curve};
use crate::segment::Segment;

/// Bounding box of every anchor and control point of `curve`.
///
/// An empty curve has no geometry to bound, so it yields [`Rect::ZERO`]
/// instead of an inverted or infinite rectangle.
pub fn compute_bounds(curve: &Curve) -> Rect {
    if curve.is_empty() {
        return Rect::ZERO;
    }
    Rect::bounding(curve.control_points()).unwrap_or(Rect::ZERO)
}

/// The curve and its bounds, derived together from one segment list.
///
/// Both halves are only ever produced by [`GeometryCache::build`], so they
/// cannot disagree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCache {
    curve: Curve,
    bounds: Rect,
}

impl GeometryCache {
    pub fn build(segments: &[Segment], closed: bool) -> Self {
        let curve = build_curve(segments, closed);
        let bounds = compute_bounds(&curve);
        Self { curve, bounds }
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }
}
