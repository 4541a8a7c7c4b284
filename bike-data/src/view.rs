//! The dashboard pipeline: filter both datasets, then aggregate the daily one.
//!
//! `Dataset` is loaded once and never mutated; every date selection re-runs
//! [`render`] against it.

use crate::breakdown::{season_breakdown, weather_breakdown};
use crate::models::{CategoryBreakdown, MonthlySummary, Totals};
use crate::monthly::monthly_summary;
use bike_core::{DateRange, HourlyRecord, RentalRecord, Season, WeatherCondition};
use serde::Serialize;

/// The immutable snapshot of both datasets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub daily: Vec<RentalRecord>,
    pub hourly: Vec<HourlyRecord>,
}

impl Dataset {
    pub fn new(daily: Vec<RentalRecord>, hourly: Vec<HourlyRecord>) -> Self {
        Self { daily, hourly }
    }

    /// Earliest and latest daily date. These bound the date pickers and are
    /// the default selection.
    pub fn date_bounds(&self) -> Option<DateRange> {
        DateRange::covering(&self.daily)
    }
}

/// Everything the presentation layer draws for one date selection.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ViewModel {
    pub range: DateRange,
    pub totals: Totals,
    pub monthly: Vec<MonthlySummary>,
    pub by_weather: Vec<CategoryBreakdown<WeatherCondition>>,
    pub by_season: Vec<CategoryBreakdown<Season>>,
    /// Daily records inside the range
    pub daily_count: usize,
    /// Hourly records inside the range
    pub hourly_count: usize,
}

impl ViewModel {
    /// True when the selection matched no daily records. Not an error:
    /// the charts render with no data.
    pub fn is_empty(&self) -> bool {
        self.daily_count == 0
    }
}

/// Filter both datasets to `range` and build every chart's input.
pub fn render(dataset: &Dataset, range: DateRange) -> ViewModel {
    let daily = range.filter(&dataset.daily);
    let hourly = range.filter(&dataset.hourly);
    log::debug!(
        "view: {} to {} selects {} daily and {} hourly records",
        range.start(),
        range.end(),
        daily.len(),
        hourly.len()
    );

    ViewModel {
        range,
        totals: Totals::from_records(&daily),
        monthly: monthly_summary(&daily),
        by_weather: weather_breakdown(&daily),
        by_season: season_breakdown(&daily),
        daily_count: daily.len(),
        hourly_count: hourly.len(),
    }
}
