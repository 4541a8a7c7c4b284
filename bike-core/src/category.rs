use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// A categorical field with a fixed display order.
///
/// Breakdowns are emitted in `CANONICAL` order, never alphabetical or
/// input order.
pub trait Categorical: Copy + Eq + Ord + Hash + fmt::Debug + 'static {
    /// Every value of the category, in display order.
    const CANONICAL: &'static [Self];

    /// Label shown on chart axes.
    fn label(&self) -> &'static str;

    /// Parse a raw dataset value: a numeric code (`1..=4`) or one of the
    /// known labels, case-insensitively. Returns `None` for anything else.
    fn parse(raw: &str) -> Option<Self>;
}

/// Meteorological season of a rental day.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Categorical for Season {
    const CANONICAL: &'static [Self] = &[Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "1" | "spring" | "semi" => Some(Season::Spring),
            "2" | "summer" | "panas" => Some(Season::Summer),
            "3" | "fall" | "autumn" | "gugur" => Some(Season::Fall),
            "4" | "winter" | "dingin" => Some(Season::Winter),
            _ => None,
        }
    }
}

/// Weather situation, ordered by severity.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    #[serde(rename = "Misty")]
    MistyCloudy,
    #[serde(rename = "Light Precip")]
    LightPrecipitation,
    #[serde(rename = "Heavy Precip")]
    HeavyPrecipitation,
}

impl Categorical for WeatherCondition {
    const CANONICAL: &'static [Self] = &[
        WeatherCondition::Clear,
        WeatherCondition::MistyCloudy,
        WeatherCondition::LightPrecipitation,
        WeatherCondition::HeavyPrecipitation,
    ];

    fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::MistyCloudy => "Misty",
            WeatherCondition::LightPrecipitation => "Light Precip",
            WeatherCondition::HeavyPrecipitation => "Heavy Precip",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "1" | "clear" | "cerah" => Some(WeatherCondition::Clear),
            "2" | "misty" | "mist" | "cloudy" | "misty/cloudy" | "berkabut/kabut" => {
                Some(WeatherCondition::MistyCloudy)
            }
            "3"
            | "light precip"
            | "light precipitation"
            | "light rain"
            | "light snow"
            | "light rain/light snow"
            | "hujan ringan/hujan salju ringan" => Some(WeatherCondition::LightPrecipitation),
            "4"
            | "heavy precip"
            | "heavy precipitation"
            | "heavy rain"
            | "heavy snow"
            | "heavy rain/heavy snow"
            | "hujan lebat/salju lebat" => Some(WeatherCondition::HeavyPrecipitation),
            _ => None,
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Whether a rental was made by an unregistered (casual) or a
/// membership-holding (registered) rider.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideType {
    Casual,
    Registered,
}

impl RideType {
    /// Both ride types in output order.
    pub const ALL: [RideType; 2] = [RideType::Casual, RideType::Registered];

    pub fn label(&self) -> &'static str {
        match self {
            RideType::Casual => "casual",
            RideType::Registered => "registered",
        }
    }
}

impl fmt::Display for RideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
