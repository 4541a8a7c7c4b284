//! Aggregation pipeline for the bike-share dashboard.
//!
//! This crate turns the filtered daily records into the three summary tables
//! the charts consume, plus the headline totals:
//!
//! - `monthly`: one row per calendar month, chronological
//! - `breakdown`: long-format (category, ride type) sums in canonical category order
//! - `view`: the pure `render(dataset, range) -> ViewModel` pipeline
//!
//! All functions are total over well-formed input; an empty input yields
//! empty summaries.

pub mod breakdown;
pub mod models;
pub mod monthly;
pub mod view;

pub use breakdown::{category_breakdown, season_breakdown, weather_breakdown};
pub use models::{CategoryBreakdown, MonthlySummary, Totals};
pub use monthly::monthly_summary;
pub use view::{render, Dataset, ViewModel};
