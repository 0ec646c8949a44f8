//! Error handling for Protokit
//!
//! Two kinds of failure exist in the geometry layer:
//! - Invalid construction input (reported, then recovered with empty geometry)
//! - Invariant violations on a live shape (caller contract errors)
//!
//! All error types use `thiserror` for ergonomic error handling.

use crate::geometry::Size;
use thiserror::Error;

/// Construction input that cannot produce geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A regular polygon needs at least three sides
    #[error("Polygon requires at least 3 sides, got {sides}")]
    InvalidPolygonSides {
        /// The requested side count.
        sides: usize,
    },
}

/// Violations of the frame/segment/bounds invariant of a shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A shape's size follows its segments and cannot be assigned directly
    #[error("Frame size {requested} does not match shape bounds size {current}")]
    FrameSizeMismatch {
        /// Size of the shape's current bounds.
        current: Size,
        /// Size of the frame that was requested.
        requested: Size,
    },
}

/// Main error type for Protokit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry construction error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Shape invariant error
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    pub fn is_shape_error(&self) -> bool {
        matches!(self, Error::Shape(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
