use crate::models::CategoryBreakdown;
use bike_core::{Categorical, RentalRecord, RideType, Season, WeatherCondition};
use std::collections::HashMap;

/// Sum casual and registered rides per category and melt each group into
/// one row per ride type.
///
/// Rows follow `C::CANONICAL` (casual before registered within a category).
/// Categories absent from the input are absent from the output. Records
/// whose category is `None` are dropped.
pub fn category_breakdown<C, F>(records: &[RentalRecord], category_of: F) -> Vec<CategoryBreakdown<C>>
where
    C: Categorical,
    F: Fn(&RentalRecord) -> Option<C>,
{
    let mut groups: HashMap<C, (u64, u64)> = HashMap::new();
    for record in records {
        if let Some(category) = category_of(record) {
            let sums = groups.entry(category).or_default();
            sums.0 += u64::from(record.casual_count);
            sums.1 += u64::from(record.registered_count);
        }
    }

    C::CANONICAL
        .iter()
        .filter_map(|category| groups.get(category).map(|sums| (*category, *sums)))
        .flat_map(|(category, (casual, registered))| {
            RideType::ALL.into_iter().map(move |ride_type| CategoryBreakdown {
                category,
                ride_type,
                count_rides: match ride_type {
                    RideType::Casual => casual,
                    RideType::Registered => registered,
                },
            })
        })
        .collect()
}

pub fn season_breakdown(records: &[RentalRecord]) -> Vec<CategoryBreakdown<Season>> {
    category_breakdown(records, |r| r.season)
}

pub fn weather_breakdown(records: &[RentalRecord]) -> Vec<CategoryBreakdown<WeatherCondition>> {
    category_breakdown(records, |r| r.weather_condition)
}
