//! Paint attributes of a shape
//!
//! None of these affect geometry. They are passed through unchanged to the
//! renderer, with one exception: [`FillRule`] also decides what
//! `Shape::encloses_point` treats as inside, so hit testing agrees with what
//! is painted.

use protokit_core::Color;
use serde::{Deserialize, Serialize};

/// Line cap style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

impl LineCap {
    pub fn as_svg(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// Line join style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Miter join (sharp corner)
    #[default]
    Miter,
    /// Round join
    Round,
    /// Bevel join (flat corner)
    Bevel,
}

impl LineJoin {
    pub fn as_svg(&self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Fill rule used to determine the interior of self-intersecting paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    /// Non-zero winding rule (default).
    #[default]
    NonZero,
    /// Even-odd rule.
    EvenOdd,
}

impl FillRule {
    pub fn as_svg(&self) -> &'static str {
        match self {
            Self::NonZero => "nonzero",
            Self::EvenOdd => "evenodd",
        }
    }
}

impl From<FillRule> for lyon::path::FillRule {
    fn from(rule: FillRule) -> Self {
        match rule {
            FillRule::NonZero => lyon::path::FillRule::NonZero,
            FillRule::EvenOdd => lyon::path::FillRule::EvenOdd,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    /// Fill paint, `None` leaves the interior unpainted
    pub fill_color: Option<Color>,
    /// Stroke paint, `None` draws no outline
    pub stroke_color: Option<Color>,
    pub stroke_width: f64,
    /// Length of dashes and gaps; `None` for a solid line
    pub dash_length: Option<f64>,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    pub fill_rule: FillRule,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill_color: Some(Color::BLACK),
            stroke_color: None,
            stroke_width: 1.0,
            dash_length: None,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            fill_rule: FillRule::NonZero,
        }
    }
}

impl ShapeStyle {
    pub fn with_fill(mut self, color: Option<Color>) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke_color = Some(color);
        self.stroke_width = width;
        self
    }

    pub fn with_dash(mut self, length: Option<f64>) -> Self {
        self.dash_length = length;
        self
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.line_cap = cap;
        self
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.line_join = join;
        self
    }

    pub fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }
}
