use pricecast::utils::table::points_table;
use pricecast::{format_date, PricecastError};

use super::App;

/// One-line description of what the chart currently shows
pub fn status_line(app: &App) -> String {
    let session = &app.session;
    let visible = session.visible_data();

    let view = match (session.zoom_range(), visible.first(), visible.last()) {
        (Some(_), Some(first), Some(last)) => format!(
            "Zoomed {} - {}",
            format_date(&first.date),
            format_date(&last.date)
        ),
        _ => {
            let months = session.visible_months();
            let span = match (months.first(), months.last()) {
                (Some(first), Some(last)) if first != last => format!(" ({} .. {})", first, last),
                (Some(only), _) => format!(" ({})", only),
                _ => String::new(),
            };
            format!(
                "Window {}/{}{}",
                session.current_window_index() + 1,
                session.total_windows(),
                span
            )
        }
    };

    let axis = match session.axis_domain() {
        Some(domain) => format!("y {:.2} .. {:.2}", domain.min, domain.max),
        None => "y auto".to_string(),
    };

    format!("{}, {} point(s), {}", view, visible.len(), axis)
}

/// `show`: print the visible points as a table
pub fn execute(app: &App) -> Result<String, PricecastError> {
    let symbol = app.require_series()?;
    let visible = app.session.visible_data();

    if visible.is_empty() {
        return Ok(format!("{}: no data to show.\n{}", symbol, status_line(app)));
    }

    Ok(format!(
        "{}\n{}\n{}",
        symbol,
        points_table(&visible).render(),
        status_line(app)
    ))
}

/// `months`: list every month, marking the ones in the current window
pub fn execute_months(app: &App) -> Result<String, PricecastError> {
    app.require_series()?;

    let visible = app.session.visible_months();
    let lines: Vec<String> = app
        .session
        .months()
        .iter()
        .map(|month| {
            let marker = if visible.contains(month) { "*" } else { " " };
            format!("{} {}", marker, month)
        })
        .collect();

    if lines.is_empty() {
        return Ok("No months in the loaded series.".to_string());
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::app_with_series;
    use pricecast::HistoricalPoint;

    fn points() -> Vec<HistoricalPoint> {
        vec![
            HistoricalPoint::new("2024-01-02", 100.4, 101.0),
            HistoricalPoint::new("2024-02-01", 102.0, 101.5),
            HistoricalPoint::new("2024-03-01", 103.0, 104.0),
            HistoricalPoint::new("2024-04-01", 104.0, 103.0),
            HistoricalPoint::new("2024-05-01", 105.0, 106.2),
        ]
    }

    #[test]
    fn test_status_line_window() {
        let app = app_with_series(points());
        assert_eq!(
            status_line(&app),
            "Window 2/2 (2024-02 .. 2024-05), 4 point(s), y 86.00 .. 122.00"
        );
    }

    #[test]
    fn test_status_line_zoomed() {
        let mut app = app_with_series(points());
        app.session.on_point_clicked("03/01/2024");
        assert!(status_line(&app).starts_with("Zoomed 01/02/2024 - 05/01/2024, 5 point(s), y "));
    }

    #[test]
    fn test_show_table() {
        let app = app_with_series(points());
        let text = execute(&app).expect("show");
        assert!(text.starts_with("TEST\nDate"));
        assert!(text.contains("05/01/2024 | 105.00 |    106.20 | +1.20"));
        assert!(!text.contains("01/02/2024"));
    }

    #[test]
    fn test_months_marks_window() {
        let app = app_with_series(points());
        let text = execute_months(&app).expect("months");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["  2024-01", "* 2024-02", "* 2024-03", "* 2024-04", "* 2024-05"]);
    }
}
