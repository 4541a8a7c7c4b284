use chrono::NaiveDate;
use serde::Serialize;

/// Anything carrying a calendar date the range filter can test.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

/// An inclusive date range, start date through end date.
///
/// A range whose start lies after its end is empty; it matches nothing.
#[derive(Clone, Eq, PartialEq, Copy, Debug, Serialize)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    pub fn start(&self) -> NaiveDate {
        self.0
    }

    pub fn end(&self) -> NaiveDate {
        self.1
    }

    pub fn is_empty(&self) -> bool {
        self.0 > self.1
    }

    /// Closed on both ends.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        *date >= self.0 && *date <= self.1
    }

    /// Retain exactly the records whose date lies within the range,
    /// preserving input order.
    pub fn filter<T: Dated + Clone>(&self, records: &[T]) -> Vec<T> {
        records
            .iter()
            .filter(|r| self.contains(&r.date()))
            .cloned()
            .collect()
    }

    /// Intersect with `bounds`. A range that does not overlap `bounds`
    /// comes back empty. An empty `bounds` leaves the range unchanged.
    pub fn clamp_to(&self, bounds: DateRange) -> DateRange {
        if bounds.is_empty() {
            return *self;
        }
        DateRange(self.0.max(bounds.0), self.1.min(bounds.1))
    }

    /// The smallest range covering every record, or `None` for no records.
    pub fn covering<T: Dated>(records: &[T]) -> Option<DateRange> {
        let min = records.iter().map(Dated::date).min()?;
        let max = records.iter().map(Dated::date).max()?;
        Some(DateRange(min, max))
    }
}
