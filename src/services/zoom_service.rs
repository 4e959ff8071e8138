use tracing::debug;

use crate::models::{HistoricalPoint, ZoomRange};
use crate::utils::date::format_date;

/// Number of points in a zoomed view
pub const ZOOM_WIDTH: usize = 7;

/// Points kept before the clicked one when possible
const ZOOM_LEAD: usize = 3;

/// Two-state zoom toggle over the full series
///
/// While unzoomed, clicking a point zooms to the `ZOOM_WIDTH` points around it.
/// While zoomed, any click goes back to the unzoomed view.
#[derive(Debug, Clone, Default)]
pub struct ZoomSelector {
    range: Option<ZoomRange>,
}

impl ZoomSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on the point labelled `clicked_label` (`MM/DD/YYYY`)
    ///
    /// A label that matches no point leaves an unzoomed chart unchanged.
    pub fn select_point(&mut self, clicked_label: &str, series: &[HistoricalPoint]) {
        if self.range.take().is_some() {
            debug!("Zoom cleared by click on '{}'", clicked_label);
            return;
        }

        let Some(index) = series
            .iter()
            .position(|p| format_date(&p.date) == clicked_label)
        else {
            debug!("No point labelled '{}', zoom unchanged", clicked_label);
            return;
        };

        let range = zoom_range_around(index, series.len());
        debug!(
            "Zoomed on '{}' (index {}): points {}..{}",
            clicked_label, index, range.start, range.end
        );
        self.range = Some(range);
    }

    pub fn is_active(&self) -> bool {
        self.range.is_some()
    }

    pub fn range(&self) -> Option<ZoomRange> {
        self.range
    }

    pub fn clear(&mut self) {
        self.range = None;
    }
}

/// The `ZOOM_WIDTH` wide range around `index`, shifted inward at the edges
///
/// Narrower than `ZOOM_WIDTH` only when `len` itself is.
pub fn zoom_range_around(index: usize, len: usize) -> ZoomRange {
    let mut start = index.saturating_sub(ZOOM_LEAD);
    let end = (start + ZOOM_WIDTH).min(len);
    if end - start < ZOOM_WIDTH {
        start = end.saturating_sub(ZOOM_WIDTH);
    }
    ZoomRange { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn series(len: usize) -> Vec<HistoricalPoint> {
        (0..len)
            .map(|i| HistoricalPoint::new(format!("2024-01-{:02}", i + 1), 100.0 + i as f64, 99.0 + i as f64))
            .collect()
    }

    #[test]
    fn test_zoom_centers_on_clicked_point() {
        let data = series(20);
        let mut zoom = ZoomSelector::new();
        zoom.select_point("01/11/2024", &data);
        assert_eq!(zoom.range(), Some(ZoomRange { start: 7, end: 14 }));
        assert!(zoom.is_active());
    }

    #[test]
    fn test_zoom_at_edges_keeps_width() {
        let data = series(20);

        let mut zoom = ZoomSelector::new();
        zoom.select_point("01/01/2024", &data);
        assert_eq!(zoom.range(), Some(ZoomRange { start: 0, end: 7 }));

        let mut zoom = ZoomSelector::new();
        zoom.select_point("01/20/2024", &data);
        assert_eq!(zoom.range(), Some(ZoomRange { start: 13, end: 20 }));

        let mut zoom = ZoomSelector::new();
        zoom.select_point("01/19/2024", &data);
        assert_eq!(zoom.range(), Some(ZoomRange { start: 13, end: 20 }));
    }

    #[test]
    fn test_zoom_on_short_series_covers_everything() {
        let data = series(5);
        let mut zoom = ZoomSelector::new();
        zoom.select_point("01/04/2024", &data);
        assert_eq!(zoom.range(), Some(ZoomRange { start: 0, end: 5 }));
    }

    #[test]
    fn test_miss_leaves_state_unchanged() {
        let data = series(10);
        let mut zoom = ZoomSelector::new();
        zoom.select_point("02/30/2024", &data);
        assert!(!zoom.is_active());
        zoom.select_point("2024-01-03", &data);
        assert!(!zoom.is_active());
    }

    #[test]
    fn test_any_click_while_zoomed_unzooms() {
        let data = series(10);
        let mut zoom = ZoomSelector::new();
        zoom.select_point("01/05/2024", &data);
        assert!(zoom.is_active());

        // A different, valid point does not re-zoom
        zoom.select_point("01/09/2024", &data);
        assert_eq!(zoom.range(), None);

        zoom.select_point("01/09/2024", &data);
        assert!(zoom.is_active());
        zoom.select_point("", &data);
        assert!(!zoom.is_active());
    }

    #[test]
    fn test_first_matching_point_wins() {
        let mut data = series(10);
        data[8].date = data[2].date.clone();
        let mut zoom = ZoomSelector::new();
        zoom.select_point("01/03/2024", &data);
        assert_eq!(zoom.range(), Some(ZoomRange { start: 0, end: 7 }));
    }

    #[test]
    fn test_clear() {
        let data = series(10);
        let mut zoom = ZoomSelector::new();
        zoom.select_point("01/05/2024", &data);
        zoom.clear();
        assert!(!zoom.is_active());
    }

    #[test]
    fn test_zoom_range_width_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let len = rng.gen_range(1..300);
            let index = rng.gen_range(0..len);
            let range = zoom_range_around(index, len);

            assert!(range.end <= len);
            assert!(range.start <= index && index < range.end);
            if len >= ZOOM_WIDTH {
                assert_eq!(range.len(), ZOOM_WIDTH);
            } else {
                assert_eq!((range.start, range.end), (0, len));
            }
        }
    }
}
