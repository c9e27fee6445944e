use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::FetchError;

/// Normalized weather category.
///
/// Provider strings outside the known set map to [`Category::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Snow,
    Mist,
    Fog,
    Haze,
    Other,
}

impl Category {
    /// Normalize a provider-reported category string (case-insensitive).
    pub fn from_provider(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "clear" => Category::Clear,
            "clouds" => Category::Clouds,
            "rain" => Category::Rain,
            "drizzle" => Category::Drizzle,
            "snow" => Category::Snow,
            "mist" => Category::Mist,
            "fog" => Category::Fog,
            "haze" => Category::Haze,
            _ => Category::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clear => "Clear",
            Category::Clouds => "Clouds",
            Category::Rain => "Rain",
            Category::Drizzle => "Drizzle",
            Category::Snow => "Snow",
            Category::Mist => "Mist",
            Category::Fog => "Fog",
            Category::Haze => "Haze",
            Category::Other => "Other",
        }
    }

    pub const fn all() -> &'static [Category] {
        &[
            Category::Clear,
            Category::Clouds,
            Category::Rain,
            Category::Drizzle,
            Category::Snow,
            Category::Mist,
            Category::Fog,
            Category::Haze,
            Category::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit system sent to the provider and used for display suffixes.
///
/// The provider performs the numeric conversion; this only selects the
/// request parameter and the suffixes shown next to values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    /// Value of the provider's `units` request parameter.
    pub fn as_query_param(&self) -> &'static str {
        self.as_str()
    }

    pub fn temperature_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    pub fn wind_speed_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m/s",
            UnitSystem::Imperial => "mph",
        }
    }

    /// Temperature above which clear weather counts as hot, in this
    /// unit system (25°C, 77°F).
    pub fn hot_threshold(&self) -> f64 {
        match self {
            UnitSystem::Metric => 25.0,
            UnitSystem::Imperial => 77.0,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitSystem {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "metric" | "c" | "celsius" => Ok(UnitSystem::Metric),
            "imperial" | "f" | "fahrenheit" => Ok(UnitSystem::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported: metric, imperial."
            )),
        }
    }
}

/// A validated, trimmed, non-empty city name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim and validate raw user input.
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FetchError::InvalidQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperatures {
    pub current: f64,
    pub feels_like: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub direction_deg: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub category: Category,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise_utc: DateTime<Utc>,
    pub sunset_utc: DateTime<Utc>,
}

/// One fetched weather observation for a location at a point in time.
///
/// Immutable once fetched; replaced wholesale by the next successful
/// fetch. Numeric fields are in the unit system the request asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub observed_at: DateTime<Utc>,
    pub temperature: Temperatures,
    pub humidity_percent: u8,
    pub pressure_hpa: u16,
    pub wind: Wind,
    pub condition: Condition,
    pub sun: SunTimes,
}
