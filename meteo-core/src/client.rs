use std::fmt::Debug;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::model::{
    Category, Condition, Location, SearchQuery, SunTimes, Temperatures, UnitSystem, Wind,
    WeatherSnapshot,
};

/// Default OpenWeatherMap API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Failure kinds for a single fetch attempt.
///
/// The UI does not distinguish provider status codes, so every non-2xx
/// response collapses to [`FetchError::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Empty or whitespace-only search input; never reaches the network.
    #[error("Enter a city name to search")]
    InvalidQuery,

    /// The provider could not resolve the city (any non-2xx status).
    #[error("No weather data found for that city")]
    NotFound,

    /// Transport failure: connection refused, DNS, timeout.
    #[error("Weather service unreachable: {0}")]
    Unreachable(String),

    /// The response body was not the expected envelope.
    #[error("Unexpected response from weather service: {0}")]
    MalformedResponse(String),
}

/// Source of weather snapshots. One implementation speaks to
/// OpenWeatherMap; tests substitute scripted fakes.
#[async_trait]
pub trait SnapshotProvider: Send + Sync + Debug {
    /// Fetch current conditions for a city. Single attempt, no retry.
    async fn fetch_snapshot(
        &self,
        query: &SearchQuery,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, FetchError>;
}

/// OpenWeatherMap current-conditions client.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> anyhow::Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Client against a non-default API root (mock servers in tests).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http,
        })
    }

    /// Build a client from stored configuration. Fails with a hint when
    /// no API key has been configured yet.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.api_key()?;
        Self::with_base_url(api_key, config.base_url())
    }
}

#[async_trait]
impl SnapshotProvider for OpenWeatherClient {
    async fn fetch_snapshot(
        &self,
        query: &SearchQuery,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, FetchError> {
        let url = format!("{}/weather", self.base_url);

        debug!(city = query.as_str(), units = %units, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", units.as_query_param()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Unreachable(e.to_string()))?;

        if !res.status().is_success() {
            return Err(FetchError::NotFound);
        }

        let envelope: OwEnvelope = res
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;

        snapshot_from_envelope(envelope)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
    pressure: u16,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
    deg: u16,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwEnvelope {
    name: String,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

fn snapshot_from_envelope(envelope: OwEnvelope) -> Result<WeatherSnapshot, FetchError> {
    let weather = envelope
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::MalformedResponse("empty weather array".to_string()))?;

    Ok(WeatherSnapshot {
        location: Location {
            name: envelope.name,
            country_code: envelope.sys.country,
        },
        observed_at: unix_to_utc(envelope.dt)?,
        temperature: Temperatures {
            current: envelope.main.temp,
            feels_like: envelope.main.feels_like,
            min: envelope.main.temp_min,
            max: envelope.main.temp_max,
        },
        humidity_percent: envelope.main.humidity,
        pressure_hpa: envelope.main.pressure,
        wind: Wind {
            speed: envelope.wind.speed,
            direction_deg: envelope.wind.deg,
        },
        condition: Condition {
            category: Category::from_provider(&weather.main),
            description: weather.description,
        },
        sun: SunTimes {
            sunrise_utc: unix_to_utc(envelope.sys.sunrise)?,
            sunset_utc: unix_to_utc(envelope.sys.sunset)?,
        },
    })
}

fn unix_to_utc(ts: i64) -> Result<DateTime<Utc>, FetchError> {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .ok_or_else(|| FetchError::MalformedResponse(format!("timestamp {ts} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_envelope() -> OwEnvelope {
        serde_json::from_value(serde_json::json!({
            "name": "Safi",
            "dt": 1_717_000_000,
            "main": {
                "temp": 28.4,
                "feels_like": 27.9,
                "temp_min": 22.0,
                "temp_max": 30.1,
                "humidity": 48,
                "pressure": 1015
            },
            "weather": [
                { "main": "Clear", "description": "clear sky", "icon": "01d" }
            ],
            "wind": { "speed": 4.6, "deg": 310 },
            "sys": {
                "country": "MA",
                "sunrise": 1_716_953_000,
                "sunset": 1_717_003_000
            }
        }))
        .expect("sample envelope must deserialize")
    }

    #[test]
    fn envelope_maps_to_snapshot() {
        let snapshot = snapshot_from_envelope(sample_envelope()).unwrap();

        assert_eq!(snapshot.location.name, "Safi");
        assert_eq!(snapshot.location.country_code, "MA");
        assert_eq!(snapshot.condition.category, Category::Clear);
        assert_eq!(snapshot.condition.description, "clear sky");
        assert_eq!(snapshot.humidity_percent, 48);
        assert_eq!(snapshot.pressure_hpa, 1015);
        assert_eq!(snapshot.wind.direction_deg, 310);
        assert_eq!(snapshot.observed_at.timestamp(), 1_717_000_000);
        assert_eq!(snapshot.sun.sunrise_utc.timestamp(), 1_716_953_000);
    }

    #[test]
    fn empty_weather_array_is_malformed() {
        let mut envelope = sample_envelope();
        envelope.weather.clear();

        let err = snapshot_from_envelope(envelope).unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn unknown_provider_category_lands_as_other() {
        let mut envelope = sample_envelope();
        envelope.weather[0].main = "Tornado".to_string();

        let snapshot = snapshot_from_envelope(envelope).unwrap();
        assert_eq!(snapshot.condition.category, Category::Other);
    }

    #[test]
    fn fetch_error_messages_are_user_facing() {
        assert!(FetchError::InvalidQuery.to_string().contains("city name"));
        assert!(FetchError::NotFound.to_string().contains("No weather data"));
        assert!(
            FetchError::Unreachable("connection refused".into())
                .to_string()
                .contains("unreachable")
        );
    }
}
