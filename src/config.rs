use std::path::PathBuf;

use crate::utils::errors::PricecastError;

const DEFAULT_API_URL: &str = "http://localhost:8001";
const DEFAULT_CHART_WIDTH: u32 = 1024;
const DEFAULT_CHART_HEIGHT: u32 = 768;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime settings, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the prediction service (`PREDICTION_API_URL`)
    pub api_url: String,
    /// Rendered chart width in pixels (`PRICECAST_CHART_WIDTH`)
    pub chart_width: u32,
    /// Rendered chart height in pixels (`PRICECAST_CHART_HEIGHT`)
    pub chart_height: u32,
    /// Where rendered charts go when no path is given (`PRICECAST_OUTPUT_DIR`)
    pub output_dir: PathBuf,
    /// Default log level for this crate (`PRICECAST_LOG`)
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
            output_dir: std::env::temp_dir(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> Result<Self, PricecastError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PricecastError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let api_url = lookup("PREDICTION_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let chart_width = parse_dimension(&lookup, "PRICECAST_CHART_WIDTH", defaults.chart_width)?;
        let chart_height = parse_dimension(&lookup, "PRICECAST_CHART_HEIGHT", defaults.chart_height)?;

        let output_dir = lookup("PRICECAST_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let log_level = lookup("PRICECAST_LOG").unwrap_or(defaults.log_level);

        Ok(Config {
            api_url,
            chart_width,
            chart_height,
            output_dir,
            log_level,
        })
    }
}

fn parse_dimension<F>(lookup: &F, key: &str, default: u32) -> Result<u32, PricecastError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(value) if value >= 100 => Ok(value),
            _ => Err(PricecastError::Config(format!(
                "{} must be a whole number of pixels (at least 100), got '{}'",
                key, raw
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).expect("config");
        assert_eq!(config.api_url, "http://localhost:8001");
        assert_eq!((config.chart_width, config.chart_height), (1024, 768));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PREDICTION_API_URL", "https://forecast.example.com/"),
            ("PRICECAST_CHART_WIDTH", "1280"),
            ("PRICECAST_CHART_HEIGHT", " 720 "),
            ("PRICECAST_OUTPUT_DIR", "/var/charts"),
            ("PRICECAST_LOG", "debug"),
        ]))
        .expect("config");
        assert_eq!(config.api_url, "https://forecast.example.com");
        assert_eq!((config.chart_width, config.chart_height), (1280, 720));
        assert_eq!(config.output_dir, PathBuf::from("/var/charts"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_dimension() {
        let err = Config::from_lookup(lookup_from(&[("PRICECAST_CHART_WIDTH", "wide")]))
            .expect_err("should fail");
        assert!(matches!(err, PricecastError::Config(_)));

        assert!(Config::from_lookup(lookup_from(&[("PRICECAST_CHART_HEIGHT", "10")])).is_err());
    }
}
