use pricecast::{NavDirection, PricecastError};

use super::{show, App};

pub fn execute_next(app: &mut App) -> Result<String, PricecastError> {
    navigate(app, NavDirection::Next)
}

pub fn execute_previous(app: &mut App) -> Result<String, PricecastError> {
    navigate(app, NavDirection::Previous)
}

fn navigate(app: &mut App, direction: NavDirection) -> Result<String, PricecastError> {
    app.require_series()?;

    if !app.session.on_navigate(direction) {
        let edge = match direction {
            NavDirection::Previous => "Already showing the oldest months.",
            NavDirection::Next => "Already showing the most recent months.",
        };
        return Ok(format!("{}\n{}", edge, show::status_line(app)));
    }

    Ok(show::status_line(app))
}

/// `click <MM/DD/YYYY>`: zoom on a point, or leave zoom with any click
pub fn execute_click(app: &mut App, args: &[&str]) -> Result<String, PricecastError> {
    app.require_series()?;

    let label = args.first().copied().unwrap_or("");
    let was_zoomed = app.session.is_zoomed();
    app.session.on_point_clicked(label);

    if !was_zoomed && !app.session.is_zoomed() {
        return Ok(format!(
            "No point dated '{}' (dates are MM/DD/YYYY).\n{}",
            label,
            show::status_line(app)
        ));
    }

    Ok(show::status_line(app))
}
