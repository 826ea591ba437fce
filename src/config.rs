use config::{Config, Environment};
use serde::Deserialize;

pub const DEFAULT_PANEL_CLASS: &str = "favorite-day";
pub const DEFAULT_DATE_CLASS: &str = "favorite-day__date";
pub const DEFAULT_CARD_CLASS: &str = "favorite-item";
pub const DEFAULT_INFO_CLASS: &str = "favorite-item__info";

/// Class tokens the walker and extractors key on.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Markers {
    #[serde(default = "default_panel")]
    pub panel_class: String,
    #[serde(default = "default_date")]
    pub date_class: String,
    #[serde(default = "default_card")]
    pub card_class: String,
    #[serde(default = "default_info")]
    pub info_class: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            panel_class: default_panel(),
            date_class: default_date(),
            card_class: default_card(),
            info_class: default_info(),
        }
    }
}

fn default_panel() -> String {
    DEFAULT_PANEL_CLASS.to_string()
}

fn default_date() -> String {
    DEFAULT_DATE_CLASS.to_string()
}

fn default_card() -> String {
    DEFAULT_CARD_CLASS.to_string()
}

fn default_info() -> String {
    DEFAULT_INFO_CLASS.to_string()
}

/// Extraction settings. `year == 0` means "use the compiled-in default".
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub year: i32,
    #[serde(flatten)]
    pub markers: Markers,
}

impl Settings {
    /// Load from `LINEUP_*` environment variables, e.g. `LINEUP_YEAR=2024`.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("LINEUP").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
