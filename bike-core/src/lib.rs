//! Core types for bike-share rental data.
//!
//! - `record`: one row of the daily and hourly datasets
//! - `category`: the season, weather and ride-type enumerations with their canonical order
//! - `date_range`: the inclusive date filter shared by both datasets
//! - `loader`: CSV parsing into typed records
//! - `source`: where a dataset lives, plus the remote loader behind the `api` feature

pub mod category;
pub mod date_range;
pub mod error;
pub mod loader;
pub mod record;
pub mod source;

pub use category::{Categorical, RideType, Season, WeatherCondition};
pub use date_range::{DateRange, Dated};
pub use error::LoadError;
pub use record::{HourlyRecord, RentalRecord};
