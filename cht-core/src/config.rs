//! Application configuration.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to override. The web app uses [`AppConfig::default`]; the CLI can load a
//! TOML file on top of it.

use crate::coordinate::Coordinate;
use crate::error::ConfigError;
use crate::year_range::{YearBounds, ARCHIVE_FIRST_YEAR, DEFAULT_END_YEAR, DEFAULT_START_YEAR};
use serde::{Deserialize, Serialize};

/// Default analytics endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/heatwave-trend";

const LEAFLET_IMAGES: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    /// Request timeout for the native transport. Browsers apply their own.
    pub request_timeout_secs: u64,
    pub default_coordinate: Coordinate,
    pub years: YearDefaults,
    pub map: MapConfig,
    pub chart: ChartStyle,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 60,
            default_coordinate: Coordinate::default(),
            years: YearDefaults::default(),
            map: MapConfig::default(),
            chart: ChartStyle::default(),
        }
    }
}

impl AppConfig {
    /// Parse a TOML document, filling unspecified keys with defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Replace the endpoint, keeping everything else.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

/// Initial form values and the accepted year window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearDefaults {
    pub start: i32,
    pub end: i32,
    pub min_year: i32,
    /// `None` means the current calendar year.
    pub max_year: Option<i32>,
}

impl Default for YearDefaults {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_YEAR,
            end: DEFAULT_END_YEAR,
            min_year: ARCHIVE_FIRST_YEAR,
            max_year: None,
        }
    }
}

impl YearDefaults {
    pub fn bounds(&self) -> YearBounds {
        let archive = YearBounds::archive();
        YearBounds {
            min: self.min_year,
            max: self.max_year.unwrap_or(archive.max),
        }
    }
}

/// Map widget settings, handed to Leaflet when the map is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub zoom: u8,
    pub height_px: u32,
    pub tile_url: String,
    pub attribution: String,
    pub marker: MarkerIcon,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: 4,
            height_px: 400,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution:
                "&copy; <a href=\"https://openstreetmap.org\">OpenStreetMap</a> contributors"
                    .to_string(),
            marker: MarkerIcon::default(),
        }
    }
}

/// Marker icon options; `location-picker.js` maps them onto `L.icon`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerIcon {
    pub icon_url: String,
    pub icon_retina_url: String,
    pub shadow_url: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
    pub popup_anchor: [i32; 2],
    pub shadow_size: [u32; 2],
}

impl Default for MarkerIcon {
    fn default() -> Self {
        Self {
            icon_url: format!("{LEAFLET_IMAGES}/marker-icon.png"),
            icon_retina_url: format!("{LEAFLET_IMAGES}/marker-icon-2x.png"),
            shadow_url: format!("{LEAFLET_IMAGES}/marker-shadow.png"),
            icon_size: [25, 41],
            icon_anchor: [12, 41],
            popup_anchor: [1, -34],
            shadow_size: [41, 41],
        }
    }
}

/// Line chart appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub label: String,
    pub border_color: String,
    pub background_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            label: "Heatwave Events".to_string(),
            border_color: "red".to_string(),
            background_color: "rgba(255,0,0,0.4)".to_string(),
        }
    }
}
