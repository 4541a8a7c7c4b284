//! Summary model structs for the dashboard charts.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend, or printed by the CLI.

use bike_core::{RentalRecord, RideType};
use serde::Serialize;

/// Rides summed over one calendar month, for the monthly trend line chart.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthlySummary {
    /// Month label, e.g. "Jan-24".
    pub year_month: String,
    pub year: i32,
    /// 1-12
    pub month: u32,
    pub casual_sum: u64,
    pub registered_sum: u64,
    /// Always `casual_sum + registered_sum`.
    pub total_sum: u64,
}

/// One (category, ride type) row of a long-format breakdown, used by the
/// grouped bar charts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryBreakdown<C> {
    pub category: C,
    pub ride_type: RideType,
    pub count_rides: u64,
}

/// Headline metrics over the filtered daily records.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Totals {
    pub total_rides: u64,
    pub total_casual: u64,
    pub total_registered: u64,
}

impl Totals {
    pub fn from_records(records: &[RentalRecord]) -> Self {
        records.iter().fold(Totals::default(), |acc, r| Totals {
            total_rides: acc.total_rides + r.total_count,
            total_casual: acc.total_casual + u64::from(r.casual_count),
            total_registered: acc.total_registered + u64::from(r.registered_count),
        })
    }
}
