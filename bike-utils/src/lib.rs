//! Shared utility functions for bike-share dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate, NaiveDateTime};

    /// Date format used by date pickers and CLI flags: "YYYY-MM-DD"
    pub const YEAR_FORMAT: &str = "%Y-%m-%d";

    /// Formats accepted for a dataset's date column, tried in order.
    const DATE_COLUMN_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
    const DATETIME_COLUMN_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(YEAR_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), YEAR_FORMAT)?)
    }

    /// Parse a date column value, accepting plain dates and full timestamps.
    /// Any time component is discarded.
    pub fn parse_date_column(s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        DATE_COLUMN_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .or_else(|| {
                DATETIME_COLUMN_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                    .map(|dt| dt.date())
            })
    }

    /// The (year, month) a date falls in.
    pub fn month_key(date: &NaiveDate) -> (i32, u32) {
        (date.year(), date.month())
    }

    /// Label a calendar month as a three-letter abbreviation plus a
    /// two-digit year, e.g. "Mar-23".
    ///
    /// Returns an empty string for an out-of-range month.
    pub fn year_month_label(year: i32, month: u32) -> String {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%b-%y").to_string())
            .unwrap_or_default()
    }

}
