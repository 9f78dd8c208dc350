//! Site content and tuning values.
//!
//! The page's literal content (contact recipient, map location, career
//! timeline) lives in `content/site.json`, embedded at compile time. Tuning
//! sections (`reveal`, `particles`, `carousel`) are optional in the JSON and
//! fall back to the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_SELECTORS: &[&str] =
    &[".section-title", ".card", ".timeline-item", ".gallery-item", ".hero-buttons"];
pub const DEFAULT_AREA_PER_PARTICLE: f64 = 15_000.0;
pub const DEFAULT_PARTICLE_MAX_SPEED: f64 = 0.2;
pub const DEFAULT_PARTICLE_MIN_RADIUS: f64 = 1.0;
pub const DEFAULT_PARTICLE_MAX_RADIUS: f64 = 4.0;
pub const DEFAULT_PARTICLE_OPACITY: f64 = 0.08;
pub const DEFAULT_PARTICLE_COLOR_PROPERTY: &str = "--accent";
pub const DEFAULT_PARTICLE_FALLBACK_COLOR: &str = "rgba(30, 64, 175, 0.5)";
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u32 = 5_000;

const EMBEDDED_SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything the page script needs to know about the site it decorates.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    pub contact: ContactSettings,
    pub map: MapSettings,
    /// Rendered in this order; never re-sorted.
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub reveal: RevealSettings,
    #[serde(default)]
    pub particles: ParticleSettings,
    #[serde(default)]
    pub carousel: CarouselSettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ContactSettings {
    pub recipient: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MapSettings {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    /// Leaflet tile template (`{s}`, `{z}`, `{x}`, `{y}` placeholders).
    pub tile_url: String,
    pub attribution: String,
    pub popup_html: String,
}

/// One career timeline record.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealSettings {
    pub selectors: Vec<String>,
    pub threshold: f64,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            selectors: DEFAULT_REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            threshold: DEFAULT_REVEAL_THRESHOLD,
        }
    }
}

impl RevealSettings {
    /// Comma-joined selector list suitable for `querySelectorAll`.
    #[must_use]
    pub fn selector_query(&self) -> String {
        self.selectors.join(", ")
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleSettings {
    /// Layout pixels of viewport area per particle.
    pub area_per_particle: f64,
    pub max_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub opacity: f64,
    pub color_property: String,
    pub fallback_color: String,
}

impl Default for ParticleSettings {
    fn default() -> Self {
        Self {
            area_per_particle: DEFAULT_AREA_PER_PARTICLE,
            max_speed: DEFAULT_PARTICLE_MAX_SPEED,
            min_radius: DEFAULT_PARTICLE_MIN_RADIUS,
            max_radius: DEFAULT_PARTICLE_MAX_RADIUS,
            opacity: DEFAULT_PARTICLE_OPACITY,
            color_property: DEFAULT_PARTICLE_COLOR_PROPERTY.to_owned(),
            fallback_color: DEFAULT_PARTICLE_FALLBACK_COLOR.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CarouselSettings {
    pub interval_ms: u32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self { interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS }
    }
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_owned()
}

impl SiteConfig {
    /// Parse site content from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when required sections are missing or
    /// a field has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The site content compiled into this build.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `content/site.json` is malformed.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_SITE_JSON)
    }

    /// Level named by the `log_level` field, defaulting to `Info` for
    /// unrecognised names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
