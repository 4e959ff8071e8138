//! Chart data models

use std::fmt;

use serde::{Deserialize, Serialize};

/// One trading day's actual and predicted close
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    pub actual: f64,
    pub predicted: f64,
}

impl HistoricalPoint {
    pub fn new(date: impl Into<String>, actual: f64, predicted: f64) -> Self {
        Self {
            date: date.into(),
            actual,
            predicted,
        }
    }
}

/// Calendar month (`YYYY-MM`) used to group points into windows
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey(String);

impl MonthKey {
    pub fn new(key: impl Into<String>) -> Self {
        MonthKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Paging direction for the month window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Previous,
    Next,
}

/// Half-open index range into the full series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomRange {
    pub start: usize,
    pub end: usize,
}

impl ZoomRange {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Value-axis bounds handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}
