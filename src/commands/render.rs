use std::fs;
use std::path::PathBuf;

use pricecast::services::chart_service;
use pricecast::PricecastError;
use tracing::{debug, info};

use super::App;

/// `render [path]`: write the current view as a PNG chart
pub fn execute(app: &App, args: &[&str]) -> Result<String, PricecastError> {
    let symbol = app.require_series()?;

    let path = match args.first() {
        Some(path) => PathBuf::from(path),
        None => chart_service::default_chart_path(&app.config.output_dir, symbol, &app.session),
    };

    info!("🎨 Rendering {} chart to {}", symbol, path.display());
    let image = chart_service::render_session(
        symbol,
        &app.session,
        app.config.chart_width,
        app.config.chart_height,
    )?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &image)?;
    debug!("✓ Chart written: {} ({} bytes)", path.display(), image.len());

    Ok(format!("Chart saved to {} ({} bytes)", path.display(), image.len()))
}
