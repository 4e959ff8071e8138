use std::time::Instant;

use pricecast::PricecastError;

use super::App;

/// `health`: check that the prediction service answers, and how fast
pub async fn execute(app: &App) -> Result<String, PricecastError> {
    let start_time = Instant::now();
    let health = app.client.health().await?;
    let latency = start_time.elapsed().as_millis();

    Ok(format!(
        "{} is {} ({} ms){}",
        app.client.base_url(),
        health.status,
        latency,
        health
            .message
            .map(|m| format!(": {}", m))
            .unwrap_or_default()
    ))
}
