use pricecast::api::prediction::NewsResult;
use pricecast::PricecastError;
use tracing::info;

use super::App;

/// `news [stock]`: news sentiment summary, defaulting to the loaded symbol
pub async fn execute(app: &App, args: &[&str]) -> Result<String, PricecastError> {
    let stock = match args.first() {
        Some(stock) => stock.to_string(),
        None => app
            .require_series()
            .map_err(|_| PricecastError::Usage("Usage: `news <stock>`".to_string()))?
            .to_string(),
    };

    info!("📰 Requesting news summary for '{}'", stock);
    let news = app.client.news(&stock).await?;
    Ok(format_news(&news))
}

pub fn format_news(news: &NewsResult) -> String {
    let name = news.company_name.as_deref().unwrap_or(&news.symbol);
    let mut lines = vec![
        format!("{} ({}) news sentiment: {}", name, news.symbol, news.sentiment),
        news.summary.trim().to_string(),
    ];

    if !news.articles.is_empty() {
        lines.push("Articles:".to_string());
        for article in &news.articles {
            lines.push(format!("  - {} <{}>", article.title, article.url));
        }
    }

    lines.join("\n")
}
