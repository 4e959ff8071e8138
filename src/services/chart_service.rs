use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::models::{AxisDomain, HistoricalPoint};
use crate::services::session_service::ChartSession;
use crate::utils::date::format_date;
use crate::utils::errors::PricecastError;

/// Zoomed and short views get a marker on every point
const MAX_MARKED_POINTS: usize = 31;

/// Parse a history range string to a duration
/// Supported: 1d, 2d, 4d, 7d, 1w, 2w, 4w, 1M, 3M, 6M, 1y, 2y, all
pub fn parse_range(range: &str) -> Result<Option<Duration>, PricecastError> {
    match range.to_lowercase().as_str() {
        "1d" => Ok(Some(Duration::days(1))),
        "2d" => Ok(Some(Duration::days(2))),
        "4d" => Ok(Some(Duration::days(4))),
        "7d" => Ok(Some(Duration::days(7))),
        "1w" => Ok(Some(Duration::weeks(1))),
        "2w" => Ok(Some(Duration::weeks(2))),
        "4w" => Ok(Some(Duration::weeks(4))),
        "1m" | "1month" => Ok(Some(Duration::days(30))),
        "3m" | "3months" => Ok(Some(Duration::days(90))),
        "6m" | "6months" => Ok(Some(Duration::days(182))),
        "1y" | "1year" => Ok(Some(Duration::days(365))),
        "2y" | "2years" => Ok(Some(Duration::days(730))),
        "all" => Ok(None),
        _ => Err(PricecastError::Range(format!(
            "Unknown range: '{}'. Supported: 1d, 2d, 4d, 7d, 1w, 2w, 4w, 1M, 3M, 6M, 1y, 2y, all",
            range
        ))),
    }
}

/// Keep the trailing `range` of a series, measured back from its last date
///
/// Points whose date does not parse are kept.
pub fn trim_to_range(series: Vec<HistoricalPoint>, range: Option<Duration>) -> Vec<HistoricalPoint> {
    let Some(duration) = range else {
        return series;
    };

    let parse = |date: &str| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok();
    let last = series.iter().rev().find_map(|p| parse(&p.date));
    let Some(last) = last else {
        return series;
    };
    let Some(cutoff) = last.checked_sub_signed(duration) else {
        warn!("Range start before {} is out of date range, keeping all points", last);
        return series;
    };

    series
        .into_iter()
        .filter(|p| parse(&p.date).map_or(true, |date| date >= cutoff))
        .collect()
}

/// Y range to draw: the engine's domain, else the data range with 10% padding
fn y_range(points: &[&HistoricalPoint], domain: Option<AxisDomain>) -> (f64, f64) {
    if let Some(domain) = domain {
        if domain.max > domain.min {
            return (domain.min, domain.max);
        }
        // Flat zoomed view
        return (domain.min - 1.0, domain.max + 1.0);
    }

    let values = points
        .iter()
        .flat_map(|p| [p.actual, p.predicted])
        .filter(|v| v.is_finite());
    let min_price = values.clone().fold(f64::INFINITY, f64::min);
    let max_price = values.fold(f64::NEG_INFINITY, f64::max);

    if !min_price.is_finite() || !max_price.is_finite() {
        return (0.0, 1.0);
    }

    let price_range = (max_price - min_price).max(1e-8);
    let padding = price_range * 0.1;
    ((min_price - padding).max(0.0), max_price + padding)
}

fn render_error(what: &str, e: impl std::fmt::Display) -> PricecastError {
    PricecastError::Render(format!("Failed to {}: {}", what, e))
}

/// Draw actual vs predicted closes as a PNG image
pub fn render_chart(
    title: &str,
    points: &[&HistoricalPoint],
    domain: Option<AxisDomain>,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, PricecastError> {
    if points.is_empty() {
        return Err(PricecastError::Render("Nothing to draw: no visible points".to_string()));
    }

    let (y_min, y_max) = y_range(points, domain);
    let x_max = points.len() as f64 - 0.5;

    // BitMapBackend only encodes PNG when writing to a file
    let temp_file = std::env::temp_dir().join(format!("pricecast_chart_{}.png", Uuid::new_v4()));

    {
        let backend = BitMapBackend::new(&temp_file, (width, height));
        let root = backend.into_drawing_area();
        root.fill(&WHITE).map_err(|e| render_error("fill canvas", e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 32.0).into_font())
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(-0.5f64..x_max, y_min..y_max)
            .map_err(|e| render_error("build chart", e))?;

        let label_for = |x: &f64| {
            let index = x.round();
            if index < 0.0 || (index as usize) >= points.len() {
                return String::new();
            }
            format_date(&points[index as usize].date)
        };

        chart
            .configure_mesh()
            .x_labels(8.min(points.len()))
            .x_label_formatter(&label_for)
            .y_desc("Close price ($)")
            .x_desc("Date")
            .draw()
            .map_err(|e| render_error("draw mesh", e))?;

        let actual: Vec<(f64, f64)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.actual))
            .collect();
        let predicted: Vec<(f64, f64)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.predicted))
            .collect();

        chart
            .draw_series(LineSeries::new(actual.iter().copied(), BLUE.stroke_width(2)))
            .map_err(|e| render_error("draw actual line", e))?
            .label("Actual")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        chart
            .draw_series(LineSeries::new(predicted.iter().copied(), RED.stroke_width(2)))
            .map_err(|e| render_error("draw predicted line", e))?
            .label("Predicted")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        if points.len() <= MAX_MARKED_POINTS {
            chart
                .draw_series(actual.iter().map(|&p| Circle::new(p, 3, BLUE.filled())))
                .map_err(|e| render_error("draw actual points", e))?;
            chart
                .draw_series(predicted.iter().map(|&p| Circle::new(p, 3, RED.filled())))
                .map_err(|e| render_error("draw predicted points", e))?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(|e| render_error("draw legend", e))?;

        root.present().map_err(|e| render_error("render chart", e))?;
    }

    let image_data = fs::read(&temp_file).map_err(|e| render_error("read chart file", e))?;

    if let Err(e) = fs::remove_file(&temp_file) {
        warn!("Failed to delete temporary chart file {}: {}", temp_file.display(), e);
    }

    debug!("Rendered chart '{}': {} points, {} bytes", title, points.len(), image_data.len());
    Ok(image_data)
}

/// Title describing what a session currently shows
pub fn chart_title(symbol: &str, session: &ChartSession) -> String {
    let visible = session.visible_data();
    match (visible.first(), visible.last()) {
        (Some(first), Some(last)) if session.is_zoomed() => format!(
            "{} Actual vs Predicted ({} - {})",
            symbol,
            format_date(&first.date),
            format_date(&last.date)
        ),
        _ => {
            let months = session.visible_months();
            match (months.first(), months.last()) {
                (Some(first), Some(last)) if first != last => {
                    format!("{} Actual vs Predicted ({} to {})", symbol, first, last)
                }
                (Some(only), _) => format!("{} Actual vs Predicted ({})", symbol, only),
                _ => format!("{} Actual vs Predicted", symbol),
            }
        }
    }
}

/// Render the session's current view
pub fn render_session(
    symbol: &str,
    session: &ChartSession,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, PricecastError> {
    let visible = session.visible_data();
    render_chart(&chart_title(symbol, session), &visible, session.axis_domain(), width, height)
}

/// Default file name for a rendered view inside `output_dir`
pub fn default_chart_path(output_dir: &Path, symbol: &str, session: &ChartSession) -> PathBuf {
    let view = if session.is_zoomed() {
        let start = session.zoom_range().map(|r| r.start).unwrap_or_default();
        format!("zoom{}", start)
    } else {
        format!("window{}", session.current_window_index() + 1)
    };
    let symbol: String = symbol
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    output_dir.join(format!("chart_{}_{}.png", symbol, view))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<HistoricalPoint> {
        vec![
            HistoricalPoint::new("2024-01-02", 10.0, 11.0),
            HistoricalPoint::new("2024-03-01", 12.0, 12.5),
            HistoricalPoint::new("garbled", 13.0, 13.0),
            HistoricalPoint::new("2024-03-28", 14.0, 13.0),
        ]
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("7d").expect("7d"), Some(Duration::days(7)));
        assert_eq!(parse_range("1M").expect("1M"), Some(Duration::days(30)));
        assert_eq!(parse_range("1Y").expect("1Y"), Some(Duration::days(365)));
        assert_eq!(parse_range("all").expect("all"), None);
        assert!(matches!(parse_range("5x"), Err(PricecastError::Range(_))));
    }

    #[test]
    fn test_trim_to_range() {
        let trimmed = trim_to_range(series(), Some(Duration::days(30)));
        let dates: Vec<&str> = trimmed.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-01", "garbled", "2024-03-28"]);

        assert_eq!(trim_to_range(series(), None).len(), 4);
    }

    #[test]
    fn test_trim_to_range_near_min_date_keeps_series() {
        let data = vec![
            HistoricalPoint::new("-262143-01-01", 10.0, 11.0),
            HistoricalPoint::new("-262143-01-02", 10.5, 11.0),
        ];
        let trimmed = trim_to_range(data.clone(), Some(Duration::days(730)));
        assert_eq!(trimmed, data);
    }

    #[test]
    fn test_y_range_prefers_domain() {
        let data = series();
        let points: Vec<&HistoricalPoint> = data.iter().collect();
        assert_eq!(y_range(&points, Some(AxisDomain { min: 1.0, max: 2.0 })), (1.0, 2.0));
        assert_eq!(y_range(&points, Some(AxisDomain { min: 5.0, max: 5.0 })), (4.0, 6.0));

        let (low, high) = y_range(&points, None);
        assert!((low - 9.6).abs() < 1e-9);
        assert!((high - 14.4).abs() < 1e-9);
    }

    #[test]
    fn test_chart_title_follows_view() {
        let mut session = ChartSession::new(vec![
            HistoricalPoint::new("2024-01-02", 10.0, 11.0),
            HistoricalPoint::new("2024-02-01", 11.0, 11.5),
            HistoricalPoint::new("2024-03-01", 12.0, 12.5),
        ]);
        assert_eq!(
            chart_title("AAPL", &session),
            "AAPL Actual vs Predicted (2024-01 to 2024-03)"
        );

        session.on_point_clicked("02/01/2024");
        assert_eq!(
            chart_title("AAPL", &session),
            "AAPL Actual vs Predicted (01/02/2024 - 03/01/2024)"
        );
    }

    #[test]
    fn test_default_chart_path() {
        let session = ChartSession::new(series());
        let path = default_chart_path(Path::new("/tmp/out"), "BRK.B", &session);
        assert_eq!(path, PathBuf::from("/tmp/out/chart_BRKB_window1.png"));
    }

    #[test]
    fn test_render_empty_view_fails() {
        let err = render_chart("empty", &[], None, 800, 600).expect_err("nothing to draw");
        assert!(matches!(err, PricecastError::Render(_)));
    }
}
