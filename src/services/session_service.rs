//! Navigation session for one chart
//!
//! `ChartSession` owns the series currently on screen plus the window and zoom
//! state derived from it. Every view the renderer asks for is recomputed from
//! that state, so nothing here caches a projection.

use tracing::{debug, info, warn};

use crate::models::{AxisDomain, HistoricalPoint, MonthKey, NavDirection, ZoomRange};
use crate::services::{axis_service, month_service, view_service};
use crate::services::zoom_service::ZoomSelector;
use crate::utils::page::WindowNavigator;

pub use crate::utils::date::format_date;

/// Window and zoom state over one series
///
/// Sessions are independent values; give each chart or user its own.
#[derive(Debug, Clone, Default)]
pub struct ChartSession {
    series: Vec<HistoricalPoint>,
    months: Vec<MonthKey>,
    window: WindowNavigator,
    zoom: ZoomSelector,
}

impl ChartSession {
    /// Create a session showing `series`
    pub fn new(series: Vec<HistoricalPoint>) -> Self {
        let mut session = ChartSession::default();
        session.on_new_series(series);
        session
    }

    /// Replace the series and reset to the most recent window, unzoomed
    pub fn on_new_series(&mut self, mut series: Vec<HistoricalPoint>) {
        if !is_chronological(&series) {
            warn!("Series of {} point(s) is not sorted by date, sorting", series.len());
            series.sort_by(|a, b| a.date.cmp(&b.date));
        }

        self.months = month_service::unique_months(&series);
        self.series = series;
        self.zoom.clear();
        self.window.reset(self.months.len());

        info!(
            "Loaded series: {} point(s) over {} month(s)",
            self.series.len(),
            self.months.len()
        );
    }

    /// Page the month window; returns whether it moved
    pub fn on_navigate(&mut self, direction: NavDirection) -> bool {
        let moved = self.window.advance(direction);
        debug!(
            "Navigate {:?}: window {}/{}{}",
            direction,
            self.window.current_window() + 1,
            self.window.total_windows(),
            if moved { "" } else { " (at boundary)" }
        );
        moved
    }

    /// Toggle zoom from a click on the point labelled `label` (`MM/DD/YYYY`)
    pub fn on_point_clicked(&mut self, label: &str) {
        self.zoom.select_point(label, &self.series);
    }

    /// Months in the current window
    pub fn visible_months(&self) -> &[MonthKey] {
        self.window.visible_months(&self.months)
    }

    /// Points to draw: the zoom range if active, else the current window
    pub fn visible_data(&self) -> Vec<&HistoricalPoint> {
        view_service::visible_data(&self.series, self.visible_months(), self.zoom.range())
    }

    /// Value-axis bounds for `visible_data`, `None` means auto-scale
    pub fn axis_domain(&self) -> Option<AxisDomain> {
        axis_service::axis_domain(&self.visible_data(), self.is_zoomed())
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_active()
    }

    pub fn zoom_range(&self) -> Option<ZoomRange> {
        self.zoom.range()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.window.is_first()
    }

    pub fn can_go_next(&self) -> bool {
        !self.window.is_last()
    }

    pub fn total_windows(&self) -> usize {
        self.window.total_windows()
    }

    pub fn current_window_index(&self) -> usize {
        self.window.current_window()
    }

    pub fn months(&self) -> &[MonthKey] {
        &self.months
    }

    pub fn series(&self) -> &[HistoricalPoint] {
        &self.series
    }
}

fn is_chronological(series: &[HistoricalPoint]) -> bool {
    series.windows(2).all(|pair| pair[0].date <= pair[1].date)
}
