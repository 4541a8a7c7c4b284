use crate::category::{Season, WeatherCondition};
use crate::date_range::Dated;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the daily rental dataset.
///
/// `season` and `weather_condition` are `None` when the source value is
/// outside the canonical enumeration. Such rows still count toward monthly
/// summaries and headline totals but are left out of category breakdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RentalRecord {
    pub date: NaiveDate,
    pub season: Option<Season>,
    pub weather_condition: Option<WeatherCondition>,
    /// Rentals by unregistered users
    pub casual_count: u32,
    /// Rentals by registered users
    pub registered_count: u32,
    /// Always `casual_count + registered_count`, widened so the sum of two
    /// `u32` counts cannot overflow
    pub total_count: u64,
}

impl RentalRecord {
    pub fn new(
        date: NaiveDate,
        season: Option<Season>,
        weather_condition: Option<WeatherCondition>,
        casual_count: u32,
        registered_count: u32,
    ) -> Self {
        Self {
            date,
            season,
            weather_condition,
            casual_count,
            registered_count,
            total_count: u64::from(casual_count) + u64::from(registered_count),
        }
    }
}

impl Dated for RentalRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// One row of the hourly rental dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    /// Hour of day, 0-23
    pub hour: u8,
    pub season: Option<Season>,
    pub weather_condition: Option<WeatherCondition>,
    pub casual_count: u32,
    pub registered_count: u32,
    pub total_count: u64,
}

impl HourlyRecord {
    pub fn new(
        date: NaiveDate,
        hour: u8,
        season: Option<Season>,
        weather_condition: Option<WeatherCondition>,
        casual_count: u32,
        registered_count: u32,
    ) -> Self {
        Self {
            date,
            hour,
            season,
            weather_condition,
            casual_count,
            registered_count,
            total_count: u64::from(casual_count) + u64::from(registered_count),
        }
    }
}

impl Dated for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
