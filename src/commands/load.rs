use std::fs;
use std::path::Path;

use pricecast::api::prediction::PredictionResult;
use pricecast::services::chart_service::{parse_range, trim_to_range};
use pricecast::{HistoricalPoint, PricecastError};
use tracing::info;

use super::{show, App};

const LOAD_USAGE: &str = "Usage: `load <stock> [range]` (range: 1M, 3M, 6M, 1y, 2y, all)";
const OPEN_USAGE: &str = "Usage: `open <file.json> [range]`";

/// `load <stock> [range]`: fetch a prediction and chart its history
pub async fn execute(app: &mut App, args: &[&str]) -> Result<String, PricecastError> {
    let Some(stock) = args.first() else {
        return Err(PricecastError::Usage(LOAD_USAGE.to_string()));
    };
    let range_arg = args.get(1).copied();
    let range = match range_arg {
        Some(r) => parse_range(r)?,
        None => None,
    };

    info!("📈 Requesting prediction for '{}' (range: {:?})", stock, range_arg);
    let result = app.client.predict(stock, range_arg).await?;
    info!(
        "✓ Prediction for {}: predicted {:.2}, last close {:.2}",
        result.symbol, result.predicted_next_day_close, result.actual_last_close
    );

    let description = describe_prediction(&result);
    let symbol = result.symbol.clone();
    let series = trim_to_range(result.into_series(), range);
    install_series(app, symbol, series);

    Ok(format!("{}\n{}", description, show::status_line(app)))
}

/// `open <file.json> [range]`: chart a saved prediction or a bare point list
pub fn execute_open(app: &mut App, args: &[&str]) -> Result<String, PricecastError> {
    let Some(path) = args.first() else {
        return Err(PricecastError::Usage(OPEN_USAGE.to_string()));
    };
    let range = match args.get(1) {
        Some(r) => parse_range(r)?,
        None => None,
    };

    let text = fs::read_to_string(path)?;
    let (symbol, series, description) = match serde_json::from_str::<PredictionResult>(&text) {
        Ok(result) => {
            let description = describe_prediction(&result);
            (result.symbol.clone(), result.into_series(), Some(description))
        }
        Err(_) => {
            let points: Vec<HistoricalPoint> = serde_json::from_str(&text)?;
            let symbol = Path::new(path)
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "SERIES".to_string());
            (symbol, points, None)
        }
    };
    info!("📂 Opened {} ({} point(s))", path, series.len());

    install_series(app, symbol, trim_to_range(series, range));

    let status = show::status_line(app);
    Ok(match description {
        Some(description) => format!("{}\n{}", description, status),
        None => status,
    })
}

fn install_series(app: &mut App, symbol: String, series: Vec<HistoricalPoint>) {
    app.session.on_new_series(series);
    app.symbol = Some(symbol);
}

/// Human readable summary of a prediction result
pub fn describe_prediction(result: &PredictionResult) -> String {
    let mut lines = vec![format!(
        "{}: predicted next close ${:.2} ({} from ${:.2}), last actual close ${:.2}, margin of error ${:.2}",
        result.symbol,
        result.predicted_next_day_close,
        result.trend(),
        result.reference_price(),
        result.actual_last_close,
        result.margin_of_error
    )];

    if let Some(summary) = &result.summary {
        lines.push(summary.clone());
    }
    if let Some(sentiment) = &result.sentiment {
        match &result.sentiment_summary {
            Some(detail) => lines.push(format!("Sentiment: {} - {}", sentiment, detail)),
            None => lines.push(format!("Sentiment: {}", sentiment)),
        }
    }
    if !result.news_headlines.is_empty() {
        lines.push("Headlines:".to_string());
        lines.extend(result.news_headlines.iter().map(|h| format!("  - {}", h)));
    }
    if !result.news_sources.is_empty() {
        lines.push(format!("Sources: {}", result.news_sources.join(", ")));
    }

    lines.join("\n")
}
