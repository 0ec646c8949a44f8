//! # Protokit Core
//!
//! Core types shared by every Protokit crate:
//! - Geometric value types (`Point`, `Size`, `Rect`, `Radian`)
//! - RGBA colors used by shape styling
//! - Error types and the error-reporting boundary used by shape factories

pub mod color;
pub mod error;
pub mod geometry;
pub mod report;

pub use color::Color;
pub use error::{Error, GeometryError, Result, ShapeError};
pub use geometry::{Point, Radian, Rect, Size};
pub use report::{ErrorReporter, TracingReporter};
