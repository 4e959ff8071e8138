use crate::models::{AxisDomain, HistoricalPoint};

/// Fixed price margin added above and below a month-window view
pub const WINDOW_MARGIN: f64 = 15.0;

/// Fraction of the visible range added above and below a zoomed view
pub const ZOOM_MARGIN_RATIO: f64 = 0.05;

/// Value-axis bounds for the visible points
///
/// Covers both the actual and the predicted line. Returns `None` for an empty
/// view or when a value is not finite; the renderer then auto-scales.
pub fn axis_domain(visible: &[&HistoricalPoint], zoomed: bool) -> Option<AxisDomain> {
    if visible.is_empty() {
        return None;
    }

    let mut raw_min = f64::INFINITY;
    let mut raw_max = f64::NEG_INFINITY;
    for point in visible {
        for value in [point.actual, point.predicted] {
            if !value.is_finite() {
                return None;
            }
            raw_min = raw_min.min(value);
            raw_max = raw_max.max(value);
        }
    }

    if zoomed {
        let padding = (raw_max - raw_min) * ZOOM_MARGIN_RATIO;
        Some(AxisDomain {
            min: raw_min - padding,
            max: raw_max + padding,
        })
    } else {
        Some(AxisDomain {
            min: (raw_min - WINDOW_MARGIN).floor(),
            max: (raw_max + WINDOW_MARGIN).ceil(),
        })
    }
}
