//! Text rendering of application state.
//!
//! Every function here is pure: state and descriptor in, `String` out.
//! The palette's semantic color tokens are resolved to ANSI escape
//! codes at this layer; the core stays terminal-agnostic.

use meteo_core::model::{UnitSystem, WeatherSnapshot};
use meteo_core::outlook::{DailyOutlook, MonthlyStats, OutlookProvider};
use meteo_core::presentation::{self, AmbientKind, DisplayDescriptor};
use meteo_core::state::{AppState, Phase, Tab};
use meteo_core::FetchError;

const RESET: &str = "\x1b[0m";

/// Resolve a semantic color token ("orange-600", "teal-500", ...) to an
/// ANSI foreground escape by its color family.
fn ansi_fg(token: &str) -> &'static str {
    let family = token.split('-').next().unwrap_or(token);
    match family {
        "yellow" | "amber" | "orange" => "\x1b[33m",
        "teal" | "cyan" => "\x1b[36m",
        "blue" | "indigo" => "\x1b[34m",
        "purple" | "pink" => "\x1b[35m",
        "gray" => "\x1b[90m",
        "white" => "\x1b[97m",
        _ => "\x1b[39m",
    }
}

fn accent(descriptor: &DisplayDescriptor, text: &str) -> String {
    format!("{}{}{}", ansi_fg(descriptor.palette.accent), text, RESET)
}

/// Full screen for the current state: header, status, active tab panel,
/// ambient strip.
pub fn screen(state: &AppState, outlook: &dyn OutlookProvider) -> String {
    let descriptor = presentation::derive(state.snapshot(), state.units());
    let mut out = String::new();

    out.push_str(&header(state, &descriptor));

    if let Phase::Failed(err) = state.phase() {
        out.push_str(&error_banner(err));
    }
    if matches!(state.phase(), Phase::Loading) {
        out.push_str("Fetching weather data...\n");
    }

    match (state.tab(), state.snapshot()) {
        (_, None) => out.push_str("No weather data yet. Search for a city to begin.\n"),
        (Tab::Today, Some(snapshot)) => {
            out.push_str(&today_panel(snapshot, state.units(), &descriptor));
        }
        (Tab::Forecast, Some(snapshot)) => {
            out.push_str(&forecast_panel(
                &outlook.five_day(snapshot),
                state.units(),
                outlook.is_synthetic(),
            ));
        }
        (Tab::Stats, Some(snapshot)) => {
            out.push_str(&stats_panel(
                &outlook.monthly_stats(snapshot),
                state.units(),
                outlook.is_synthetic(),
            ));
        }
    }

    out.push_str(&ambient_strip(descriptor.ambient));
    out
}

/// Title row plus the tab bar with the active tab bracketed.
pub fn header(state: &AppState, descriptor: &DisplayDescriptor) -> String {
    let tabs = Tab::all()
        .iter()
        .map(|tab| {
            if *tab == state.tab() {
                format!("[{}]", tab.title())
            } else {
                format!(" {} ", tab.title())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        "{} {}  ·  {}  ·  units: {}\n\n",
        descriptor.icon.glyph(),
        accent(descriptor, "meteo"),
        tabs,
        state.units().temperature_suffix(),
    )
}

pub fn today_panel(
    snapshot: &WeatherSnapshot,
    units: UnitSystem,
    descriptor: &DisplayDescriptor,
) -> String {
    let temp = units.temperature_suffix();
    let mut out = String::new();

    out.push_str(&format!(
        "{}, {} — {}\n",
        accent(descriptor, &snapshot.location.name),
        snapshot.location.country_code,
        snapshot.observed_at.format("%A %e %B, %H:%M UTC"),
    ));
    out.push_str(&format!(
        "{}  {:.0}{} (feels like {:.0}{})  {}\n",
        descriptor.icon.glyph(),
        snapshot.temperature.current,
        temp,
        snapshot.temperature.feels_like,
        temp,
        snapshot.condition.description,
    ));
    out.push_str(&format!(
        "Min/Max: {:.0}° / {:.0}°   Wind: {:.1} {}   Humidity: {}%   Pressure: {} hPa\n",
        snapshot.temperature.min,
        snapshot.temperature.max,
        snapshot.wind.speed,
        units.wind_speed_suffix(),
        snapshot.humidity_percent,
        snapshot.pressure_hpa,
    ));
    out.push_str(&format!(
        "Sunrise: {}   Sunset: {}\n",
        snapshot.sun.sunrise_utc.format("%H:%M"),
        snapshot.sun.sunset_utc.format("%H:%M"),
    ));
    out.push_str(&format!("\n{}\n", descriptor.recommendation));

    out
}

pub fn forecast_panel(rows: &[DailyOutlook], units: UnitSystem, synthetic: bool) -> String {
    let mut out = String::from("Five-day outlook\n");

    for row in rows {
        out.push_str(&format!(
            "  +{}d  {:<8} {:>4.0}{} / {:.0}{}\n",
            row.day_offset,
            row.category.as_str(),
            row.high,
            units.temperature_suffix(),
            row.low,
            units.temperature_suffix(),
        ));
    }

    if synthetic {
        out.push_str("  (sample data)\n");
    }
    out
}

pub fn stats_panel(stats: &MonthlyStats, units: UnitSystem, synthetic: bool) -> String {
    let temp = units.temperature_suffix();
    let mut out = String::from("This month\n");

    out.push_str(&format!(
        "  Temperature: mean {:.0}{}, range {:.0}{} to {:.0}{}\n",
        stats.temperature_mean, temp, stats.temperature_min, temp, stats.temperature_max, temp,
    ));
    out.push_str(&format!(
        "  Humidity:    {}% to {}%\n",
        stats.humidity_low, stats.humidity_high,
    ));
    out.push_str(&format!(
        "  Wind:        {:.1} to {:.1} {}\n",
        stats.wind_low,
        stats.wind_high,
        units.wind_speed_suffix(),
    ));
    out.push_str(&format!(
        "  Pressure:    {} to {} hPa\n",
        stats.pressure_low, stats.pressure_high,
    ));

    if synthetic {
        out.push_str("  (sample data)\n");
    }
    out
}

pub fn error_banner(err: &FetchError) -> String {
    format!("!! {err}\n\n")
}

/// Decorative glyph strip standing in for the background animation.
pub fn ambient_strip(kind: AmbientKind) -> String {
    let strip = match kind {
        AmbientKind::Rain => "╷ ╷ ╷ ╷ ╷ ╷ ╷ ╷",
        AmbientKind::Snow => "*  .  *  .  *  .  *",
        AmbientKind::SunPulse => "~ ~ ☀ ~ ~",
        AmbientKind::DriftingClouds => "☁     ☁       ☁",
        AmbientKind::None => return String::new(),
    };
    format!("\n{strip}\n")
}
