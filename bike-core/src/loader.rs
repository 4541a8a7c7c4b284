//! CSV parsing for the daily and hourly rental datasets.
//!
//! Columns are matched by header name, so extra columns in the public
//! bike-sharing exports (`instant`, `yr`, `temp`, ...) are ignored.
//!
//! # CSV Formats
//!
//! - **Daily** (has headers): `dteday,season,weathersit,casual,registered,cnt`
//! - **Hourly** (has headers): `dteday,season,hr,weathersit,casual,registered,cnt`
//!
//! `date`, `weather`, `hour` and `total` are accepted in place of
//! `dteday`, `weathersit`, `hr` and `cnt`. The `cnt` column is optional.

use crate::category::{Categorical, Season, WeatherCondition};
use crate::error::LoadError;
use crate::record::{HourlyRecord, RentalRecord};
use bike_utils::dates::parse_date_column;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct DailyRow {
    #[serde(alias = "dteday")]
    date: String,
    season: String,
    #[serde(alias = "weathersit")]
    weather: String,
    casual: u32,
    registered: u32,
    #[serde(default, alias = "cnt")]
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct HourlyRow {
    #[serde(alias = "dteday")]
    date: String,
    #[serde(alias = "hr")]
    hour: u8,
    season: String,
    #[serde(alias = "weathersit")]
    weather: String,
    casual: u32,
    registered: u32,
    #[serde(default, alias = "cnt")]
    total: Option<u64>,
}

/// Tally of category values that fell outside the canonical enumeration.
#[derive(Default)]
struct Unrecognized {
    seasons: usize,
    weather: usize,
}

impl Unrecognized {
    fn season(&mut self, raw: &str) -> Option<Season> {
        let parsed = Season::parse(raw);
        if parsed.is_none() {
            self.seasons += 1;
        }
        parsed
    }

    fn weather(&mut self, raw: &str) -> Option<WeatherCondition> {
        let parsed = WeatherCondition::parse(raw);
        if parsed.is_none() {
            self.weather += 1;
        }
        parsed
    }

    fn report(&self, dataset: &str) {
        if self.seasons > 0 || self.weather > 0 {
            log::warn!(
                "loader: {} rows with unrecognized season, {} with unrecognized weather in {} dataset; excluded from breakdowns",
                self.seasons,
                self.weather,
                dataset
            );
        }
    }
}

fn parse_row_date(raw: &str, row: usize) -> Result<NaiveDate, LoadError> {
    parse_date_column(raw).ok_or_else(|| LoadError::Malformed {
        row,
        reason: format!("unparseable date {:?}", raw),
    })
}

fn check_total(stated: Option<u64>, casual: u32, registered: u32, row: usize) {
    if let Some(stated) = stated {
        let sum = u64::from(casual) + u64::from(registered);
        if stated != sum {
            log::debug!(
                "loader: row {} states total {} but casual + registered = {}; using the sum",
                row,
                stated,
                sum
            );
        }
    }
}

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(csv_data.as_bytes())
}

/// Parse the daily dataset.
///
/// # Example CSV
/// ```text
/// dteday,season,weathersit,casual,registered,cnt
/// 2011-01-01,1,2,331,654,985
/// ```
pub fn parse_daily(csv_data: &str) -> Result<Vec<RentalRecord>, LoadError> {
    let mut rdr = reader(csv_data);
    let mut unrecognized = Unrecognized::default();
    let mut records = Vec::new();

    for (idx, result) in rdr.deserialize::<DailyRow>().enumerate() {
        let row_number = idx + 1;
        let row = result?;
        let date = parse_row_date(&row.date, row_number)?;
        check_total(row.total, row.casual, row.registered, row_number);
        records.push(RentalRecord::new(
            date,
            unrecognized.season(&row.season),
            unrecognized.weather(&row.weather),
            row.casual,
            row.registered,
        ));
    }

    unrecognized.report("daily");
    log::info!("loader: Loaded {} daily records", records.len());
    Ok(records)
}

/// Parse the hourly dataset.
///
/// # Example CSV
/// ```text
/// dteday,season,hr,weathersit,casual,registered,cnt
/// 2011-01-01,1,0,1,3,13,16
/// ```
pub fn parse_hourly(csv_data: &str) -> Result<Vec<HourlyRecord>, LoadError> {
    let mut rdr = reader(csv_data);
    let mut unrecognized = Unrecognized::default();
    let mut records = Vec::new();

    for (idx, result) in rdr.deserialize::<HourlyRow>().enumerate() {
        let row_number = idx + 1;
        let row = result?;
        let date = parse_row_date(&row.date, row_number)?;
        if row.hour > 23 {
            return Err(LoadError::Malformed {
                row: row_number,
                reason: format!("hour {} out of range", row.hour),
            });
        }
        check_total(row.total, row.casual, row.registered, row_number);
        records.push(HourlyRecord::new(
            date,
            row.hour,
            unrecognized.season(&row.season),
            unrecognized.weather(&row.weather),
            row.casual,
            row.registered,
        ));
    }

    unrecognized.report("hourly");
    log::info!("loader: Loaded {} hourly records", records.len());
    Ok(records)
}
