use bike_core::loader::parse_daily;
use bike_core::{DateRange, RentalRecord, RideType, Season, WeatherCondition};
use bike_data::{monthly_summary, render, season_breakdown, weather_breakdown, Dataset};
use chrono::NaiveDate;
use std::collections::HashMap;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn three_records() -> Vec<RentalRecord> {
    vec![
        RentalRecord::new(day(2023, 1, 5), Some(Season::Spring), Some(WeatherCondition::Clear), 10, 20),
        RentalRecord::new(day(2023, 1, 20), Some(Season::Spring), Some(WeatherCondition::Clear), 5, 15),
        RentalRecord::new(day(2023, 2, 1), Some(Season::Summer), Some(WeatherCondition::MistyCloudy), 8, 2),
    ]
}

const YEAR_CSV: &str = "dteday,season,weathersit,casual,registered,cnt
2011-12-30,4,1,120,800,920
2011-12-31,4,2,90,700,790
2012-01-01,4,1,300,1200,1500
2012-01-02,4,3,40,600,640
2012-03-20,1,1,500,2500,3000
2012-03-21,2,2,410,2410,2820
2012-06-21,3,1,900,4000,4900
2012-09-23,3,4,5,50,55
2012-09-24,4,2,700,3100,3800
";

#[test]
fn end_to_end_example() {
    let records = three_records();

    let monthly = monthly_summary(&records);
    assert_eq!(monthly.len(), 2);
    assert_eq!(monthly[0].year_month, "Jan-23");
    assert_eq!(
        (monthly[0].casual_sum, monthly[0].registered_sum, monthly[0].total_sum),
        (15, 35, 50)
    );
    assert_eq!(monthly[1].year_month, "Feb-23");
    assert_eq!(
        (monthly[1].casual_sum, monthly[1].registered_sum, monthly[1].total_sum),
        (8, 2, 10)
    );

    let seasons: Vec<(Season, RideType, u64)> = season_breakdown(&records)
        .into_iter()
        .map(|r| (r.category, r.ride_type, r.count_rides))
        .collect();
    assert_eq!(
        seasons,
        vec![
            (Season::Spring, RideType::Casual, 15),
            (Season::Spring, RideType::Registered, 35),
            (Season::Summer, RideType::Casual, 8),
            (Season::Summer, RideType::Registered, 2),
        ]
    );
}

#[test]
fn monthly_sums_and_coverage() {
    let records = parse_daily(YEAR_CSV).unwrap();
    let range = DateRange(day(2011, 12, 31), day(2012, 9, 23));
    let filtered = range.filter(&records);
    let monthly = monthly_summary(&filtered);

    for row in &monthly {
        assert_eq!(row.total_sum, row.casual_sum + row.registered_sum);
    }
    let covered: u64 = monthly.iter().map(|m| m.total_sum).sum();
    let expected: u64 = filtered.iter().map(|r| r.total_count).sum();
    assert_eq!(covered, expected);

    let keys: Vec<(i32, u32)> = monthly.iter().map(|m| (m.year, m.month)).collect();
    assert!(keys.windows(2).all(|w| w[0] < w[1]), "strictly ascending: {:?}", keys);
    assert_eq!(keys, vec![(2011, 12), (2012, 1), (2012, 3), (2012, 6), (2012, 9)]);
}

#[test]
fn breakdown_rows_sum_to_category_totals() {
    let records = parse_daily(YEAR_CSV).unwrap();
    let mut expected: HashMap<WeatherCondition, u64> = HashMap::new();
    for r in &records {
        if let Some(w) = r.weather_condition {
            *expected.entry(w).or_default() += u64::from(r.casual_count + r.registered_count);
        }
    }

    let rows = weather_breakdown(&records);
    assert_eq!(rows.len(), expected.len() * 2);
    let mut actual: HashMap<WeatherCondition, u64> = HashMap::new();
    for row in &rows {
        *actual.entry(row.category).or_default() += row.count_rides;
    }
    assert_eq!(actual, expected);

    let order: Vec<WeatherCondition> = rows.iter().step_by(2).map(|r| r.category).collect();
    assert_eq!(
        order,
        vec![
            WeatherCondition::Clear,
            WeatherCondition::MistyCloudy,
            WeatherCondition::LightPrecipitation,
            WeatherCondition::HeavyPrecipitation,
        ]
    );
}

#[test]
fn single_day_range_selects_that_day_only() {
    let records = parse_daily(YEAR_CSV).unwrap();
    let dataset = Dataset::new(records, Vec::new());
    let view = render(&dataset, DateRange(day(2012, 3, 20), day(2012, 3, 20)));
    assert_eq!(view.daily_count, 1);
    assert_eq!(view.totals.total_rides, 3000);
    assert_eq!(view.monthly.len(), 1);
    assert_eq!(view.monthly[0].year_month, "Mar-12");
}

#[test]
fn filtering_twice_changes_nothing() {
    let records = parse_daily(YEAR_CSV).unwrap();
    let range = DateRange(day(2012, 1, 1), day(2012, 6, 30));
    let once = range.filter(&records);
    assert_eq!(range.filter(&once), once);
}

#[test]
fn view_model_serializes_for_charts() {
    let dataset = Dataset::new(three_records(), Vec::new());
    let view = render(&dataset, DateRange(day(2023, 1, 1), day(2023, 12, 31)));
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["totals"]["total_rides"], 60);
    assert_eq!(json["monthly"][0]["year_month"], "Jan-23");
    assert_eq!(json["by_season"][0]["category"], "Spring");
    assert_eq!(json["by_season"][0]["ride_type"], "casual");
    assert_eq!(json["by_season"][0]["count_rides"], 15);
    assert_eq!(json["by_weather"][2]["category"], "Misty");
    assert_eq!(json["range"][0], "2023-01-01");
}

const FIXTURE_DAY: &str = include_str!("../../fixtures/day.csv");
const FIXTURE_HOUR: &str = include_str!("../../fixtures/hour.csv");

#[test]
fn fixture_datasets_render() {
    let daily = parse_daily(FIXTURE_DAY).unwrap();
    let hourly = bike_core::loader::parse_hourly(FIXTURE_HOUR).unwrap();
    assert_eq!(daily.len(), 152);
    assert_eq!(hourly.len(), 152 * 24);

    let dataset = Dataset::new(daily, hourly);
    let bounds = dataset.date_bounds().unwrap();
    assert_eq!(bounds, DateRange(day(2011, 12, 1), day(2012, 4, 30)));

    let view = render(&dataset, bounds);
    let labels: Vec<&str> = view.monthly.iter().map(|m| m.year_month.as_str()).collect();
    assert_eq!(labels, vec!["Dec-11", "Jan-12", "Feb-12", "Mar-12", "Apr-12"]);

    let hourly_total: u64 = dataset.hourly.iter().map(|h| h.total_count).sum();
    assert_eq!(view.totals.total_rides, hourly_total);
    assert_eq!(view.hourly_count, dataset.hourly.len());
}
