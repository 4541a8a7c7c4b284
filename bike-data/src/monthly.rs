use crate::models::MonthlySummary;
use bike_core::RentalRecord;
use bike_utils::dates::{month_key, year_month_label};
use std::collections::BTreeMap;

#[derive(Default)]
struct MonthSums {
    casual: u64,
    registered: u64,
    total: u64,
}

/// Group records by calendar month and sum each ride count.
///
/// Output is ascending by (year, month) with one row per month present in
/// the input. Months without records are absent, not zero-filled.
pub fn monthly_summary(records: &[RentalRecord]) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<(i32, u32), MonthSums> = BTreeMap::new();
    for record in records {
        let sums = months.entry(month_key(&record.date)).or_default();
        sums.casual += u64::from(record.casual_count);
        sums.registered += u64::from(record.registered_count);
        sums.total += record.total_count;
    }

    months
        .into_iter()
        .map(|((year, month), sums)| MonthlySummary {
            year_month: year_month_label(year, month),
            year,
            month,
            casual_sum: sums.casual,
            registered_sum: sums.registered,
            total_sum: sums.total,
        })
        .collect()
}
