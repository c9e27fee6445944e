//! Derivation of the visual treatment from a weather snapshot.
//!
//! Everything here is a pure lookup: same snapshot and units in, same
//! descriptor out. The descriptor carries semantic style tokens; the
//! rendering backend decides what a gradient stop or an accent color
//! actually looks like.

use crate::model::{Category, UnitSystem, WeatherSnapshot};

/// Semantic color tokens for one weather mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background gradient stops, light to dark.
    pub gradient: [&'static str; 3],
    /// Header band gradient stops.
    pub header_gradient: [&'static str; 2],
    /// Accent color for labels and highlights.
    pub accent: &'static str,
}

/// Neutral palette: no snapshot, or a category outside the known set.
pub const NEUTRAL: Palette = Palette {
    gradient: ["blue-400", "purple-300", "pink-200"],
    header_gradient: ["indigo-500", "purple-500"],
    accent: "indigo-600",
};

const WARM_CLEAR: Palette = Palette {
    gradient: ["yellow-300", "amber-200", "orange-200"],
    header_gradient: ["orange-500", "amber-500"],
    accent: "orange-600",
};

const COOL_CLEAR: Palette = Palette {
    gradient: ["blue-300", "cyan-200", "teal-100"],
    header_gradient: ["teal-500", "cyan-500"],
    accent: "teal-600",
};

const CLOUDS: Palette = Palette {
    gradient: ["gray-300", "blue-200", "gray-200"],
    header_gradient: ["blue-600", "gray-600"],
    accent: "blue-600",
};

const RAIN: Palette = Palette {
    gradient: ["blue-600", "blue-400", "indigo-300"],
    header_gradient: ["indigo-800", "blue-700"],
    accent: "blue-700",
};

const SNOW: Palette = Palette {
    gradient: ["blue-100", "gray-100", "white"],
    header_gradient: ["blue-400", "blue-300"],
    accent: "blue-500",
};

const FOG: Palette = Palette {
    gradient: ["gray-400", "gray-300", "gray-200"],
    header_gradient: ["gray-700", "gray-500"],
    accent: "gray-700",
};

/// Icon shown next to the temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Sun,
    Cloud,
    CloudRain,
    CloudSnow,
    CloudFog,
}

impl IconKind {
    /// Terminal glyph for this icon.
    pub const fn glyph(self) -> &'static str {
        match self {
            IconKind::Sun => "☀",
            IconKind::Cloud => "☁",
            IconKind::CloudRain => "🌧",
            IconKind::CloudSnow => "🌨",
            IconKind::CloudFog => "🌫",
        }
    }
}

/// Decorative background animation keyed off the condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbientKind {
    /// Falling droplet particles.
    Rain,
    /// Falling, drifting flakes.
    Snow,
    /// Pulsing sun.
    SunPulse,
    /// Slow translucent blobs.
    DriftingClouds,
    None,
}

const UMBRELLA_ADVISORY: &str = "Don't forget your umbrella, it is raining right now.";
const SUN_ADVISORY: &str = "Hot and sunny out there, remember your sun protection.";
const COLD_ADVISORY: &str = "It is snowing, wrap up warm before heading out.";
const CLOUDS_NOTE: &str = "Overcast today, but precipitation is unlikely.";
const GENERIC_NOTE: &str = "Check the forecast regularly to plan your day.";

/// Derived visual styling bundle. Ephemeral: recomputed on every
/// render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDescriptor {
    pub palette: Palette,
    pub icon: IconKind,
    pub ambient: AmbientKind,
    pub recommendation: &'static str,
}

impl DisplayDescriptor {
    /// Descriptor used before any data has arrived.
    pub const fn neutral() -> Self {
        Self {
            palette: NEUTRAL,
            icon: IconKind::Sun,
            ambient: AmbientKind::None,
            recommendation: GENERIC_NOTE,
        }
    }
}

/// Map a snapshot (or its absence) onto a display descriptor.
///
/// `units` selects the hot threshold in the snapshot's native unit:
/// clear weather above 25°C (77°F) gets the warm variant.
pub fn derive(snapshot: Option<&WeatherSnapshot>, units: UnitSystem) -> DisplayDescriptor {
    let Some(snapshot) = snapshot else {
        return DisplayDescriptor::neutral();
    };

    let category = snapshot.condition.category;
    let hot = snapshot.temperature.current > units.hot_threshold();

    DisplayDescriptor {
        palette: palette_for(category, hot),
        icon: icon_for(category),
        ambient: ambient_for(category),
        recommendation: recommendation_for(category, hot),
    }
}

fn palette_for(category: Category, hot: bool) -> Palette {
    match category {
        Category::Clear if hot => WARM_CLEAR,
        Category::Clear => COOL_CLEAR,
        Category::Clouds => CLOUDS,
        Category::Rain | Category::Drizzle => RAIN,
        Category::Snow => SNOW,
        Category::Mist | Category::Fog | Category::Haze => FOG,
        Category::Other => NEUTRAL,
    }
}

fn icon_for(category: Category) -> IconKind {
    match category {
        Category::Clear | Category::Other => IconKind::Sun,
        Category::Clouds => IconKind::Cloud,
        Category::Rain | Category::Drizzle => IconKind::CloudRain,
        Category::Snow => IconKind::CloudSnow,
        Category::Mist | Category::Fog | Category::Haze => IconKind::CloudFog,
    }
}

fn ambient_for(category: Category) -> AmbientKind {
    match category {
        Category::Rain | Category::Drizzle => AmbientKind::Rain,
        Category::Snow => AmbientKind::Snow,
        Category::Clear => AmbientKind::SunPulse,
        Category::Clouds => AmbientKind::DriftingClouds,
        _ => AmbientKind::None,
    }
}

// First match wins; the order is fixed and mirrors the source feed's
// mutually exclusive categories.
fn recommendation_for(category: Category, hot: bool) -> &'static str {
    match category {
        Category::Rain => UMBRELLA_ADVISORY,
        Category::Clear if hot => SUN_ADVISORY,
        Category::Snow => COLD_ADVISORY,
        Category::Clouds => CLOUDS_NOTE,
        _ => GENERIC_NOTE,
    }
}
