//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use bike_core::DateRange;
use bike_data::Dataset;
use bike_utils::dates::{format_date, parse_date};
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Both datasets (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Load failure; when set, no dashboard is shown
    pub error_msg: Signal<Option<String>>,
    /// Selected start date, "YYYY-MM-DD"
    pub start_date: Signal<String>,
    /// Selected end date, "YYYY-MM-DD"
    pub end_date: Signal<String>,
    /// Earliest date in the daily dataset; lower bound of both pickers
    pub min_date: Signal<String>,
    /// Latest date in the daily dataset; upper bound of both pickers
    pub max_date: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            min_date: Signal::new(String::new()),
            max_date: Signal::new(String::new()),
        }
    }

    /// Store a freshly loaded dataset and select its full date range.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        if let Some(bounds) = dataset.date_bounds() {
            let min = format_date(&bounds.start());
            let max = format_date(&bounds.end());
            self.min_date.set(min.clone());
            self.max_date.set(max.clone());
            self.start_date.set(min);
            self.end_date.set(max);
        }
        self.dataset.set(Some(dataset));
        self.error_msg.set(None);
        self.loading.set(false);
    }

    /// Record a load failure. Terminal for this page view.
    pub fn set_load_error(&mut self, message: String) {
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the picker values into a range. `None` until both are set.
pub fn parse_range(start: &str, end: &str) -> Option<DateRange> {
    let start = parse_date(start).ok()?;
    let end = parse_date(end).ok()?;
    Some(DateRange(start, end))
}

#[cfg(test)]
mod tests {
    use super::parse_range;
    use bike_core::DateRange;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_range() {
        let range = parse_range("2011-01-01", "2012-12-31").unwrap();
        assert_eq!(
            range,
            DateRange(
                NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2012, 12, 31).unwrap()
            )
        );
        assert_eq!(parse_range("", "2012-12-31"), None);
        assert_eq!(parse_range("2011-01-01", "soon"), None);
    }
}
