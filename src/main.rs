use protokit::{demo_scene, init_logging, svg, Rect, SettingsManager};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let path = match std::env::args_os().nth(1) {
        Some(path) => path.into(),
        None => SettingsManager::default_config_path()?,
    };
    let settings = SettingsManager::load_or_default(path)?;
    info!(
        version = protokit::VERSION,
        built = protokit::BUILD_DATE,
        config = %settings.path().display(),
        "rendering demo scene"
    );

    let shapes = demo_scene(settings.config());
    for shape in &shapes {
        info!(frame = %shape.frame(), segments = shape.segments().len(), "shape");
    }

    print!("{}", svg::document(&shapes, Rect::new(0.0, 0.0, 400.0, 300.0)));

    Ok(())
}
