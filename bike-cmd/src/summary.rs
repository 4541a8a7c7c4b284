//! Summary command: load, filter, aggregate, print.

use anyhow::Context;
use bike_core::source::{DataSource, Loader};
use bike_core::{Categorical, DateRange, RideType};
use bike_data::{render, CategoryBreakdown, Dataset, ViewModel};
use bike_utils::dates::parse_date;
use chrono::NaiveDate;
use log::info;
use std::fmt;

/// Work out the range to summarize. Missing `--start`/`--end` values are
/// filled in from the data's own bounds; explicit values are kept as given,
/// so a range outside the data selects nothing.
///
/// Returns `None` when there is no data and no explicit range.
pub fn resolve_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    bounds: Option<DateRange>,
) -> Option<DateRange> {
    match bounds {
        Some(bounds) => Some(DateRange(
            start.unwrap_or(bounds.start()),
            end.unwrap_or(bounds.end()),
        )),
        None => Some(DateRange(start?, end?)),
    }
}

/// Plain-text rendering of a view model.
pub struct Report<'a>(pub &'a ViewModel);

fn breakdown_lines<C: Categorical>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    rows: &[CategoryBreakdown<C>],
) -> fmt::Result {
    writeln!(f, "\n{}", title)?;
    if rows.is_empty() {
        return writeln!(f, "  (no data)");
    }
    writeln!(f, "  {:<14} {:>12} {:>12}", "", RideType::Casual, RideType::Registered)?;
    for pair in rows.chunks(2) {
        let casual = pair.iter().find(|r| r.ride_type == RideType::Casual);
        let registered = pair.iter().find(|r| r.ride_type == RideType::Registered);
        writeln!(
            f,
            "  {:<14} {:>12} {:>12}",
            pair[0].category.label(),
            casual.map_or(0, |r| r.count_rides),
            registered.map_or(0, |r| r.count_rides),
        )?;
    }
    Ok(())
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        writeln!(
            f,
            "Rentals {} to {} ({} daily records, {} hourly records)",
            view.range.start(),
            view.range.end(),
            view.daily_count,
            view.hourly_count
        )?;
        writeln!(f, "\n  {:<18} {:>12}", "Total rides", view.totals.total_rides)?;
        writeln!(f, "  {:<18} {:>12}", "Casual rides", view.totals.total_casual)?;
        writeln!(f, "  {:<18} {:>12}", "Registered rides", view.totals.total_registered)?;

        writeln!(f, "\nMonthly")?;
        if view.monthly.is_empty() {
            writeln!(f, "  (no data)")?;
        } else {
            writeln!(f, "  {:<8} {:>12} {:>12} {:>12}", "Month", "casual", "registered", "total")?;
            for m in &view.monthly {
                writeln!(
                    f,
                    "  {:<8} {:>12} {:>12} {:>12}",
                    m.year_month, m.casual_sum, m.registered_sum, m.total_sum
                )?;
            }
        }

        breakdown_lines(f, "By weather", &view.by_weather)?;
        breakdown_lines(f, "By season", &view.by_season)
    }
}

/// Plain-text report of a view model.
pub fn format_report(view: &ViewModel) -> String {
    Report(view).to_string()
}

/// Run the summary command.
pub async fn run_summary(
    day: &str,
    hour: &str,
    start: Option<&str>,
    end: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let start = start
        .map(parse_date)
        .transpose()
        .context("invalid --start date, expected YYYY-MM-DD")?;
    let end = end
        .map(parse_date)
        .transpose()
        .context("invalid --end date, expected YYYY-MM-DD")?;

    let client = reqwest::Client::builder()
        .timeout(crate::HTTP_TIMEOUT)
        .build()?;
    let mut loader = Loader::new(client);

    let day_source = DataSource::parse(day);
    let hour_source = DataSource::parse(hour);
    let daily = loader
        .load_daily(&day_source)
        .await
        .with_context(|| format!("failed to load daily dataset from {}", day_source.location()))?;
    let hourly = loader
        .load_hourly(&hour_source)
        .await
        .with_context(|| format!("failed to load hourly dataset from {}", hour_source.location()))?;
    let dataset = Dataset::new(daily, hourly);

    let Some(range) = resolve_range(start, end, dataset.date_bounds()) else {
        println!("No records loaded.");
        return Ok(());
    };
    info!("Summarizing {} to {}", range.start(), range.end());

    let view = render(&dataset, range);
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", Report(&view));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_core::{RentalRecord, Season, WeatherCondition};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_resolve_range_defaults_to_bounds() {
        let bounds = DateRange(day(2011, 1, 1), day(2012, 12, 31));
        assert_eq!(resolve_range(None, None, Some(bounds)), Some(bounds));
        assert_eq!(
            resolve_range(Some(day(2012, 1, 1)), None, Some(bounds)),
            Some(DateRange(day(2012, 1, 1), day(2012, 12, 31)))
        );
    }

    #[test]
    fn test_resolve_range_keeps_explicit_dates() {
        let bounds = DateRange(day(2011, 1, 1), day(2012, 12, 31));
        assert_eq!(
            resolve_range(Some(day(2010, 1, 1)), Some(day(2030, 1, 1)), Some(bounds)),
            Some(DateRange(day(2010, 1, 1), day(2030, 1, 1)))
        );
    }

    fn bounded_dataset() -> Dataset {
        Dataset::new(
            vec![
                RentalRecord::new(day(2011, 12, 1), Some(Season::Winter), Some(WeatherCondition::Clear), 5, 50),
                RentalRecord::new(day(2012, 2, 14), Some(Season::Spring), Some(WeatherCondition::Clear), 7, 70),
                RentalRecord::new(day(2012, 4, 30), Some(Season::Summer), Some(WeatherCondition::MistyCloudy), 9, 90),
            ],
            Vec::new(),
        )
    }

    #[test]
    fn test_range_outside_data_selects_nothing() {
        let dataset = bounded_dataset();
        let bounds = dataset.date_bounds();

        for (start, end) in [
            (day(2030, 1, 1), day(2030, 12, 31)),
            (day(2001, 1, 1), day(2001, 12, 31)),
        ] {
            let range = resolve_range(Some(start), Some(end), bounds).unwrap();
            let view = render(&dataset, range);
            assert_eq!(view.daily_count, 0);
            assert_eq!(view.totals.total_rides, 0);
            assert!(view.monthly.is_empty());
            assert!(view.by_season.is_empty());
        }
    }

    #[test]
    fn test_range_partly_overlapping_data() {
        let dataset = bounded_dataset();
        let range = resolve_range(
            Some(day(2012, 2, 1)),
            Some(day(2030, 1, 1)),
            dataset.date_bounds(),
        )
        .unwrap();
        let view = render(&dataset, range);
        assert_eq!(view.daily_count, 2);
        assert_eq!(view.totals.total_rides, 77 + 99);
    }

    #[test]
    fn test_resolve_range_without_data() {
        assert_eq!(resolve_range(None, None, None), None);
        assert_eq!(
            resolve_range(Some(day(2011, 1, 1)), Some(day(2011, 2, 1)), None),
            Some(DateRange(day(2011, 1, 1), day(2011, 2, 1)))
        );
    }

    #[test]
    fn test_format_report() {
        let dataset = Dataset::new(
            vec![
                RentalRecord::new(day(2023, 1, 5), Some(Season::Spring), Some(WeatherCondition::Clear), 10, 20),
                RentalRecord::new(day(2023, 2, 1), Some(Season::Summer), Some(WeatherCondition::MistyCloudy), 8, 2),
            ],
            Vec::new(),
        );
        let view = render(&dataset, DateRange(day(2023, 1, 1), day(2023, 2, 28)));
        let report = format_report(&view);
        assert!(report.starts_with("Rentals 2023-01-01 to 2023-02-28 (2 daily records, 0 hourly records)"));
        assert!(report.contains("Jan-23"));
        assert!(report.contains("Feb-23"));
        let spring = report.lines().find(|l| l.trim_start().starts_with("Spring")).unwrap();
        assert!(spring.contains("10") && spring.contains("20"));
        assert!(report.find("Spring").unwrap() < report.find("Summer").unwrap());
    }

    #[test]
    fn test_format_report_empty() {
        let view = render(&Dataset::default(), DateRange(day(2023, 1, 1), day(2023, 1, 31)));
        let report = format_report(&view);
        assert_eq!(report.matches("(no data)").count(), 3);
    }
}
