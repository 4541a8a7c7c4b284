//! JSON payloads handed to the D3.js chart functions.
//!
//! Data arrays are the pipeline's serialized summaries; configs carry the
//! titles, axis labels, series and colors each chart needs.

use bike_core::{Categorical, RideType};
use bike_data::{CategoryBreakdown, MonthlySummary};
use serde::Serialize;
use serde_json::json;

pub const CASUAL_COLOR: &str = "#A6CEE3";
pub const REGISTERED_COLOR: &str = "#1F78B4";
pub const TOTAL_COLOR: &str = "#DC3912";

/// Monthly trend data plus a line-chart config with three series.
pub fn monthly_chart(monthly: &[MonthlySummary]) -> (String, String) {
    let data = serde_json::to_string(monthly).unwrap_or_else(|_| "[]".to_string());
    let config = json!({
        "title": "Monthly Rentals",
        "xAxisLabel": "Month",
        "yAxisLabel": "Total Rides",
        "xKey": "year_month",
        "series": [
            { "key": "casual_sum", "label": "Casual", "color": CASUAL_COLOR },
            { "key": "registered_sum", "label": "Registered", "color": REGISTERED_COLOR },
            { "key": "total_sum", "label": "Total", "color": TOTAL_COLOR },
        ],
    })
    .to_string();
    (data, config)
}

#[derive(Serialize)]
struct BarDatum<'a> {
    category: &'a str,
    ride_type: RideType,
    count_rides: u64,
}

/// Grouped bar data plus config for a category breakdown.
///
/// The config's `categories` lists the categories present, in the
/// breakdown's row order, so the x-axis keeps the canonical order.
pub fn breakdown_chart<C: Categorical>(
    rows: &[CategoryBreakdown<C>],
    title: &str,
    x_axis_label: &str,
) -> (String, String) {
    let data: Vec<BarDatum> = rows
        .iter()
        .map(|r| BarDatum {
            category: r.category.label(),
            ride_type: r.ride_type,
            count_rides: r.count_rides,
        })
        .collect();

    let mut categories: Vec<&str> = Vec::new();
    for datum in &data {
        if categories.last() != Some(&datum.category) {
            categories.push(datum.category);
        }
    }

    let data_json = serde_json::to_string(&data).unwrap_or_else(|_| "[]".to_string());
    let config = json!({
        "title": title,
        "xAxisLabel": x_axis_label,
        "yAxisLabel": "Total Rides",
        "categories": categories,
        "rideTypes": RideType::ALL.iter().map(RideType::label).collect::<Vec<_>>(),
        "colors": {
            "casual": CASUAL_COLOR,
            "registered": REGISTERED_COLOR,
        },
    })
    .to_string();
    (data_json, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_core::{RentalRecord, Season, WeatherCondition};
    use bike_data::{monthly_summary, weather_breakdown};
    use chrono::NaiveDate;
    use serde_json::Value;

    #[test]
    fn test_breakdown_chart_keeps_canonical_categories() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let records = vec![
            RentalRecord::new(date, Some(Season::Summer), Some(WeatherCondition::LightPrecipitation), 1, 2),
            RentalRecord::new(date, Some(Season::Summer), Some(WeatherCondition::Clear), 3, 4),
        ];
        let (data, config) = breakdown_chart(&weather_breakdown(&records), "Rentals by Weather", "Weather");
        let data: Value = serde_json::from_str(&data).unwrap();
        let config: Value = serde_json::from_str(&config).unwrap();

        assert_eq!(data.as_array().unwrap().len(), 4);
        assert_eq!(data[0]["category"], "Clear");
        assert_eq!(data[0]["ride_type"], "casual");
        assert_eq!(data[3]["count_rides"], 2);
        assert_eq!(config["categories"], serde_json::json!(["Clear", "Light Precip"]));
        assert_eq!(config["rideTypes"], serde_json::json!(["casual", "registered"]));
    }

    #[test]
    fn test_monthly_chart_series() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        let records = vec![RentalRecord::new(date, None, None, 10, 20)];
        let (data, config) = monthly_chart(&monthly_summary(&records));
        let data: Value = serde_json::from_str(&data).unwrap();
        let config: Value = serde_json::from_str(&config).unwrap();

        assert_eq!(data[0]["year_month"], "Jan-23");
        assert_eq!(data[0]["total_sum"], 30);
        assert_eq!(config["series"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_empty_inputs_give_empty_arrays() {
        let (data, _) = monthly_chart(&[]);
        assert_eq!(data, "[]");
        let (data, config) = breakdown_chart::<Season>(&[], "Rentals by Season", "Season");
        assert_eq!(data, "[]");
        let config: Value = serde_json::from_str(&config).unwrap();
        assert_eq!(config["categories"], serde_json::json!([]));
    }
}
