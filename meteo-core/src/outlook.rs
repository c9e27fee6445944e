//! Placeholder data for the forecast and stats tabs.
//!
//! The forecast and stats views are decorative: no real multi-day data
//! is fetched. Instead of sprinkling random numbers into the rendering,
//! an [`OutlookProvider`] hands the view clearly-marked synthetic rows
//! derived deterministically from the current snapshot, so renders are
//! stable and testable. A future real provider slots in behind the same
//! trait.

use std::fmt::Debug;

use crate::model::{Category, WeatherSnapshot};

/// One synthetic forecast row.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyOutlook {
    /// Days from now, 1-based.
    pub day_offset: u8,
    pub category: Category,
    pub high: f64,
    pub low: f64,
}

/// Synthetic monthly aggregate bands for the stats tab.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStats {
    pub temperature_mean: f64,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub humidity_low: u8,
    pub humidity_high: u8,
    pub wind_low: f64,
    pub wind_high: f64,
    pub pressure_low: u16,
    pub pressure_high: u16,
}

/// Source of forecast rows and stat bands for the secondary tabs.
pub trait OutlookProvider: Send + Sync + Debug {
    fn five_day(&self, snapshot: &WeatherSnapshot) -> Vec<DailyOutlook>;

    fn monthly_stats(&self, snapshot: &WeatherSnapshot) -> MonthlyStats;

    /// True when the data is generated rather than observed; the view
    /// captions such panels as sample data.
    fn is_synthetic(&self) -> bool;
}

/// Deterministic placeholder outlook fanned out from the snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticOutlook;

impl SyntheticOutlook {
    // Every fifth day rains, every third is overcast, the rest are clear.
    fn category_for_day(day: u8) -> Category {
        if day % 5 == 0 {
            Category::Rain
        } else if day % 3 == 0 {
            Category::Clouds
        } else {
            Category::Clear
        }
    }
}

impl OutlookProvider for SyntheticOutlook {
    fn five_day(&self, snapshot: &WeatherSnapshot) -> Vec<DailyOutlook> {
        (1..=5)
            .map(|day| {
                let drift = f64::from(day);
                DailyOutlook {
                    day_offset: day,
                    category: Self::category_for_day(day),
                    high: snapshot.temperature.max - drift,
                    low: snapshot.temperature.min - drift,
                }
            })
            .collect()
    }

    fn monthly_stats(&self, snapshot: &WeatherSnapshot) -> MonthlyStats {
        MonthlyStats {
            temperature_mean: snapshot.temperature.current,
            temperature_min: snapshot.temperature.min - 3.0,
            temperature_max: snapshot.temperature.max + 3.0,
            humidity_low: snapshot.humidity_percent.saturating_sub(10),
            humidity_high: snapshot.humidity_percent.saturating_add(10).min(100),
            wind_low: snapshot.wind.speed * 0.5,
            wind_high: snapshot.wind.speed * 1.5,
            pressure_low: snapshot.pressure_hpa.saturating_sub(10),
            pressure_high: snapshot.pressure_hpa.saturating_add(10),
        }
    }

    fn is_synthetic(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Condition, Location, SunTimes, Temperatures, Wind};
    use chrono::{TimeZone, Utc};

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location: Location {
                name: "Safi".to_string(),
                country_code: "MA".to_string(),
            },
            observed_at: Utc.timestamp_opt(1_717_000_000, 0).unwrap(),
            temperature: Temperatures {
                current: 20.0,
                feels_like: 19.0,
                min: 15.0,
                max: 24.0,
            },
            humidity_percent: 95,
            pressure_hpa: 1010,
            wind: Wind {
                speed: 6.0,
                direction_deg: 45,
            },
            condition: Condition {
                category: Category::Clear,
                description: "clear sky".to_string(),
            },
            sun: SunTimes {
                sunrise_utc: Utc.timestamp_opt(1_716_953_000, 0).unwrap(),
                sunset_utc: Utc.timestamp_opt(1_717_003_000, 0).unwrap(),
            },
        }
    }

    #[test]
    fn five_day_outlook_is_deterministic() {
        let outlook = SyntheticOutlook;
        let snap = snapshot();

        assert_eq!(outlook.five_day(&snap), outlook.five_day(&snap));
        assert_eq!(outlook.monthly_stats(&snap), outlook.monthly_stats(&snap));
    }

    #[test]
    fn five_day_outlook_has_five_cooling_rows() {
        let rows = SyntheticOutlook.five_day(&snapshot());

        assert_eq!(rows.len(), 5);
        for row in &rows {
            assert!(row.low < row.high);
        }
        assert!(rows[4].high < rows[0].high);
    }

    #[test]
    fn category_rotation_matches_day_offsets() {
        let rows = SyntheticOutlook.five_day(&snapshot());

        assert_eq!(rows[0].category, Category::Clear);
        assert_eq!(rows[2].category, Category::Clouds);
        assert_eq!(rows[4].category, Category::Rain);
    }

    #[test]
    fn stat_bands_are_ordered_and_clamped() {
        let stats = SyntheticOutlook.monthly_stats(&snapshot());

        assert!(stats.temperature_min < stats.temperature_mean);
        assert!(stats.temperature_mean < stats.temperature_max);
        assert!(stats.wind_low < stats.wind_high);
        assert!(stats.pressure_low < stats.pressure_high);
        // 95% humidity must not overflow the band.
        assert_eq!(stats.humidity_high, 100);
        assert_eq!(stats.humidity_low, 85);
    }

    #[test]
    fn synthetic_outlook_declares_itself() {
        assert!(SyntheticOutlook.is_synthetic());
    }
}
