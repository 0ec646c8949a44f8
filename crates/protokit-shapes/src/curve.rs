//! Curve construction from segments
//!
//! A [`Curve`] is the renderer-facing description of a shape: an ordered list
//! of move/line/cubic/close commands in absolute coordinates. It is always a
//! pure function of a segment list and a closed flag.

use std::fmt::Write;

use lyon::geom::CubicBezierSegment;
use lyon::path::Path;
use protokit_core::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { ctrl1: Point, ctrl2: Point, to: Point },
    Close,
}

impl PathCommand {
    fn translated(self, delta: Point) -> PathCommand {
        match self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p + delta),
            PathCommand::LineTo(p) => PathCommand::LineTo(p + delta),
            PathCommand::CurveTo { ctrl1, ctrl2, to } => PathCommand::CurveTo {
                ctrl1: ctrl1 + delta,
                ctrl2: ctrl2 + delta,
                to: to + delta,
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    commands: Vec<PathCommand>,
}

impl Curve {
    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Every anchor and control point, in command order.
    pub fn control_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().flat_map(|command| {
            let points: [Option<Point>; 3] = match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => [Some(p), None, None],
                PathCommand::CurveTo { ctrl1, ctrl2, to } => [Some(ctrl1), Some(ctrl2), Some(to)],
                PathCommand::Close => [None, None, None],
            };
            points.into_iter().flatten()
        })
    }

    pub fn translated(&self, delta: Point) -> Curve {
        Curve {
            commands: self.commands.iter().map(|c| c.translated(delta)).collect(),
        }
    }

    /// Bounding box of the curve itself rather than its control polygon.
    /// Returns `None` for an empty curve.
    pub fn tight_bounds(&self) -> Option<Rect> {
        let mut extrema = Vec::new();
        let mut current = Point::ZERO;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    extrema.push(p);
                    current = p;
                }
                PathCommand::CurveTo { ctrl1, ctrl2, to } => {
                    let cubic = CubicBezierSegment {
                        from: to_geom(current),
                        ctrl1: to_geom(ctrl1),
                        ctrl2: to_geom(ctrl2),
                        to: to_geom(to),
                    };
                    let bb = cubic.bounding_box();
                    extrema.push(Point::new(bb.min.x, bb.min.y));
                    extrema.push(Point::new(bb.max.x, bb.max.y));
                    current = to;
                }
                PathCommand::Close => {}
            }
        }

        Rect::bounding(extrema)
    }

    /// Convert to a lyon path for rasterizers and hit testing.
    pub fn to_lyon_path(&self) -> Path {
        let mut builder = Path::builder();
        let mut open = false;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(to_lyon(p));
                    open = true;
                }
                PathCommand::LineTo(p) => {
                    builder.line_to(to_lyon(p));
                }
                PathCommand::CurveTo { ctrl1, ctrl2, to } => {
                    builder.cubic_bezier_to(to_lyon(ctrl1), to_lyon(ctrl2), to_lyon(to));
                }
                PathCommand::Close => {
                    if open {
                        builder.end(true);
                        open = false;
                    }
                }
            }
        }
        if open {
            builder.end(false);
        }

        builder.build()
    }

    /// SVG path data (`d` attribute).
    pub fn to_svg_path_data(&self) -> String {
        let mut svg = String::new();
        for command in &self.commands {
            // Writing into a String cannot fail.
            let _ = match *command {
                PathCommand::MoveTo(p) => write!(svg, "M {} {} ", p.x, p.y),
                PathCommand::LineTo(p) => write!(svg, "L {} {} ", p.x, p.y),
                PathCommand::CurveTo { ctrl1, ctrl2, to } => write!(
                    svg,
                    "C {} {} {} {} {} {} ",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                ),
                PathCommand::Close => write!(svg, "Z "),
            };
        }
        svg.truncate(svg.trim_end().len());
        svg
    }
}

fn to_lyon(p: Point) -> lyon::math::Point {
    lyon::math::point(p.x as f32, p.y as f32)
}

fn to_geom(p: Point) -> lyon::geom::Point<f64> {
    lyon::geom::point(p.x, p.y)
}

/// Tracks the previous anchor and its outgoing control point while joints are
/// emitted.
struct CurveWriter {
    commands: Vec<PathCommand>,
    previous_point: Point,
    handle_out: Point,
}

impl CurveWriter {
    fn start(first: &Segment, capacity: usize) -> Self {
        let mut commands = Vec::with_capacity(capacity);
        // A path never curves into its own start, so `handle_in` is ignored here.
        commands.push(PathCommand::MoveTo(first.point));
        Self {
            commands,
            previous_point: first.point,
            handle_out: first.absolute_handle_out(),
        }
    }

    fn join(&mut self, segment: &Segment) {
        let point = segment.point;
        let handle_in = segment.absolute_handle_in();

        if handle_in == point && self.handle_out == self.previous_point {
            self.commands.push(PathCommand::LineTo(point));
        } else {
            self.commands.push(PathCommand::CurveTo {
                ctrl1: self.handle_out,
                ctrl2: handle_in,
                to: point,
            });
        }

        self.previous_point = point;
        self.handle_out = segment.absolute_handle_out();
    }
}

/// Build the curve for `segments`.
///
/// Each joint becomes a straight line when neither adjoining handle leaves its
/// anchor, and a cubic curve otherwise. A closed curve joins the last segment
/// back to the first before closing.
pub fn build_curve(segments: &[Segment], closed: bool) -> Curve {
    let Some((first, rest)) = segments.split_first() else {
        return Curve::default();
    };

    let mut writer = CurveWriter::start(first, segments.len() + 2);
    for segment in rest {
        writer.join(segment);
    }
    if closed {
        writer.join(first);
        writer.commands.push(PathCommand::Close);
    }

    Curve::from_commands(writer.commands)
}
