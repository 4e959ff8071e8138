use std::collections::HashSet;

use crate::models::{HistoricalPoint, MonthKey, ZoomRange};
use crate::utils::date::month_key;

/// Points of `series` the chart should show
///
/// An active zoom range wins over the month window. Without zoom, every point
/// whose month is in `visible_months` is kept, in series order.
pub fn visible_data<'a>(
    series: &'a [HistoricalPoint],
    visible_months: &[MonthKey],
    zoom: Option<ZoomRange>,
) -> Vec<&'a HistoricalPoint> {
    if let Some(range) = zoom {
        let end = range.end.min(series.len());
        let start = range.start.min(end);
        return series[start..end].iter().collect();
    }

    let months: HashSet<&MonthKey> = visible_months.iter().collect();
    series
        .iter()
        .filter(|p| months.contains(&month_key(&p.date)))
        .collect()
}
