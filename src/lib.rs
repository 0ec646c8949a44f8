//! # Protokit
//!
//! Vector shape geometry for interactive 2D prototypes:
//! - Points, sizes, rectangles and angles
//! - Segments with relative Bezier handles
//! - Oval, rectangle, line and regular polygon factories
//! - Shapes whose frame, position and bounds stay consistent under mutation
//! - Point enclosure tests and SVG export
//!
//! ## Architecture
//!
//! Protokit is organized as a workspace with multiple crates:
//!
//! 1. **protokit-core** - Geometric primitives, colors, errors, error reporting
//! 2. **protokit-shapes** - Segments, curves, bounds cache, shapes, SVG export
//! 3. **protokit-settings** - Tolerances and default styles loaded from JSON/TOML
//! 4. **protokit** - Demo binary that integrates all crates

pub use protokit_core::{
    Color, Error, ErrorReporter, GeometryError, Point, Radian, Rect, Result, ShapeError, Size,
    TracingReporter,
};

pub use protokit_shapes::{
    build_curve, compute_bounds, line_segments, oval_segments, polygon_segments, rect_segments,
    svg, try_polygon_segments, Curve, FillRule, GeometryCache, LineCap, LineJoin, PathCommand,
    Segment, Shape, ShapeDescription, ShapeOptions, ShapeStyle, KAPPA,
};

pub use protokit_settings::{
    Config, ConfigError, GeometrySettings, SettingsError, SettingsManager, StyleSettings,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so that stdout stays free for generated documents.
/// `RUST_LOG` is honored on top of the INFO default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Build the demo scene: an oval, a rounded rectangle, a line and a hexagon
/// styled from `config`, with the oval moved to `(320, 120)`.
pub fn demo_scene(config: &Config) -> Vec<Shape> {
    let style = config.shape_style();
    let options = config.shape_options();

    let mut oval = Shape::oval(Rect::new(20.0, 20.0, 120.0, 80.0))
        .with_style(style.clone())
        .with_options(options);
    oval.set_position(Point::new(320.0, 120.0));

    let card = Shape::rectangle(Rect::new(20.0, 140.0, 160.0, 100.0), 12.0)
        .with_style(style.clone().with_fill(Some(Color::from_hex(0x4a90e2))))
        .with_options(options);

    let line = Shape::line(Point::new(20.0, 280.0), Point::new(380.0, 280.0))
        .with_style(
            style
                .clone()
                .with_fill(None)
                .with_stroke(Color::BLACK, 2.0)
                .with_dash(Some(6.0)),
        )
        .with_options(options);

    let hexagon = Shape::polygon(Point::new(300.0, 200.0), 50.0, 6, &TracingReporter)
        .with_style(style.with_fill(Some(Color::from_hex(0xf5a623))))
        .with_options(options);

    vec![oval, card, line, hexagon]
}
