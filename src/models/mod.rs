//! Data models for the chart engine
//!
//! The engine works on borrowed views of a `Vec<HistoricalPoint>`; these are the
//! small value types that flow between its services and out to the renderer.

pub mod chart;

pub use chart::{AxisDomain, HistoricalPoint, MonthKey, NavDirection, ZoomRange};
