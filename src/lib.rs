//! Predicted vs actual price charts with month paging and week zoom
//!
//! The engine (`services`, `utils::page`, `utils::date`) turns a chronologically
//! ordered series of actual and predicted closes into the slice a chart should
//! show and the value-axis range to show it with. A `ChartSession` owns the
//! navigation state for one chart. The prediction service client and the PNG
//! renderer sit around it.

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use models::{AxisDomain, HistoricalPoint, MonthKey, NavDirection, ZoomRange};
pub use services::ChartSession;
pub use utils::date::format_date;
pub use utils::errors::PricecastError;
