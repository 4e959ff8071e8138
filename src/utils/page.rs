use tracing::debug;

use crate::models::{MonthKey, NavDirection};

/// Number of months shown per window
pub const WINDOW_SIZE: usize = 4;

/// Pages through a month sequence in overlapping windows of `WINDOW_SIZE`
///
/// Window `i` covers months `[i, i + WINDOW_SIZE)`, so consecutive windows shift
/// by one month. Only the month count is cached; the months themselves stay
/// with the caller.
#[derive(Debug, Clone, Default)]
pub struct WindowNavigator {
    month_count: usize,
    current_window: usize,
}

impl WindowNavigator {
    /// Create a navigator positioned on the most recent window
    pub fn new(month_count: usize) -> Self {
        let mut navigator = WindowNavigator::default();
        navigator.reset(month_count);
        navigator
    }

    /// Re-initialize for a new month count and jump to the default window
    pub fn reset(&mut self, month_count: usize) {
        self.month_count = month_count;
        self.current_window = self.default_window();
        debug!(
            "Window reset: {} month(s), {} window(s), showing window {}",
            month_count,
            self.total_windows(),
            self.current_window
        );
    }

    /// Move one window in `direction`, clamped at both ends
    ///
    /// Returns whether the window actually changed.
    pub fn advance(&mut self, direction: NavDirection) -> bool {
        let target = match direction {
            NavDirection::Previous => self.current_window.saturating_sub(1),
            NavDirection::Next => (self.current_window + 1).min(self.total_windows() - 1),
        };

        if target == self.current_window {
            return false;
        }
        self.current_window = target;
        true
    }

    /// Move to next window
    pub fn next(&mut self) -> bool {
        self.advance(NavDirection::Next)
    }

    /// Move to previous window
    pub fn previous(&mut self) -> bool {
        self.advance(NavDirection::Previous)
    }

    /// The months of `months` inside the current window
    pub fn visible_months<'a>(&self, months: &'a [MonthKey]) -> &'a [MonthKey] {
        let start = self.current_window.min(months.len());
        let end = (self.current_window + WINDOW_SIZE).min(months.len());
        &months[start..end]
    }

    /// Get total number of windows (at least one, even with no months)
    pub fn total_windows(&self) -> usize {
        (self.month_count + 1).saturating_sub(WINDOW_SIZE).max(1)
    }

    /// Window shown right after a reset: the most recent months
    pub fn default_window(&self) -> usize {
        self.month_count.saturating_sub(WINDOW_SIZE)
    }

    pub fn current_window(&self) -> usize {
        self.current_window
    }

    /// Check if on first window
    pub fn is_first(&self) -> bool {
        self.current_window == 0
    }

    /// Check if on last window
    pub fn is_last(&self) -> bool {
        self.current_window == self.total_windows() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months(n: usize) -> Vec<MonthKey> {
        (0..n)
            .map(|i| MonthKey::new(format!("2024-{:02}", i + 1)))
            .collect()
    }

    #[test]
    fn test_window_counts() {
        for (count, total, default) in [(0, 1, 0), (1, 1, 0), (3, 1, 0), (4, 1, 0), (5, 2, 1), (10, 7, 6)] {
            let navigator = WindowNavigator::new(count);
            assert_eq!(navigator.total_windows(), total, "total for {} months", count);
            assert_eq!(navigator.default_window(), default, "default for {} months", count);
            assert_eq!(navigator.current_window(), default);
        }
    }

    #[test]
    fn test_advance_clamps_at_both_ends() {
        let mut navigator = WindowNavigator::new(6);
        assert_eq!(navigator.current_window(), 2);
        assert!(navigator.is_last());
        assert!(!navigator.next());
        assert_eq!(navigator.current_window(), 2);

        assert!(navigator.previous());
        assert!(navigator.previous());
        assert!(navigator.is_first());
        assert!(!navigator.previous());
        assert_eq!(navigator.current_window(), 0);

        assert!(navigator.advance(NavDirection::Next));
        assert_eq!(navigator.current_window(), 1);
    }

    #[test]
    fn test_short_series_has_single_window() {
        let all = months(3);
        let mut navigator = WindowNavigator::new(all.len());
        assert_eq!(navigator.total_windows(), 1);
        assert!(!navigator.next());
        assert!(!navigator.previous());
        assert!(navigator.is_first() && navigator.is_last());
        assert_eq!(navigator.visible_months(&all), &all[..]);
    }

    #[test]
    fn test_visible_months_follow_window() {
        let all = months(10);
        let mut navigator = WindowNavigator::new(all.len());
        assert_eq!(navigator.visible_months(&all), &all[6..10]);

        navigator.previous();
        assert_eq!(navigator.visible_months(&all), &all[5..9]);
    }

    #[test]
    fn test_visible_months_clamped_to_available() {
        let all = months(2);
        let navigator = WindowNavigator::new(10);
        // Stale count larger than the month list must not slice out of bounds
        assert!(navigator.visible_months(&all).is_empty());
        assert!(WindowNavigator::new(0).visible_months(&[]).is_empty());
    }

    #[test]
    fn test_reset_returns_to_default() {
        let mut navigator = WindowNavigator::new(10);
        navigator.previous();
        navigator.previous();
        assert_eq!(navigator.current_window(), 4);

        navigator.reset(9);
        assert_eq!(navigator.current_window(), 5);
        assert_eq!(navigator.total_windows(), 6);
    }
}
