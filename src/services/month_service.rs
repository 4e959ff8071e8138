use std::collections::HashSet;

use crate::models::{HistoricalPoint, MonthKey};
use crate::utils::date::month_key;

/// Unique months of a series in first-occurrence order
///
/// The series must already be sorted by date; first occurrence is then also
/// chronological order. No sorting happens here.
pub fn unique_months(series: &[HistoricalPoint]) -> Vec<MonthKey> {
    let mut seen = HashSet::new();
    let mut months = Vec::new();

    for point in series {
        let key = month_key(&point.date);
        if seen.insert(key.clone()) {
            months.push(key);
        }
    }

    months
}
