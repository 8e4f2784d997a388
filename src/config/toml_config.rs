use crate::core::filter::{PriceFilter, SportFilter, VenueFilter};
use crate::core::format::DistanceUnit;
use crate::core::ticker::DEFAULT_TICK;
use crate::utils::error::{PlaycesError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_positive_number, validate_required_field,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub headline: HeadlineConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    #[default]
    Sample,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: CatalogSource,
    pub path: Option<String>,
}

/// Initial picker selections, as labels or slugs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_filter_label")]
    pub sport: String,
    #[serde(default = "default_filter_label")]
    pub price: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            sport: default_filter_label(),
            price: default_filter_label(),
        }
    }
}

fn default_filter_label() -> String {
    "All".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default = "default_true")]
    pub notifications: bool,
    #[serde(default)]
    pub email_updates: bool,
    #[serde(default)]
    pub distance_unit: DistanceUnit,
    #[serde(default)]
    pub language: Language,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            email_updates: false,
            distance_unit: DistanceUnit::default(),
            language: Language::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineConfig {
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

impl Default for HeadlineConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
        }
    }
}

fn default_tick_millis() -> u64 {
    DEFAULT_TICK.as_millis() as u64
}

pub const MIN_TICK_MILLIS: u64 = 100;

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PlaycesError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PlaycesError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn default_filter(&self) -> Result<VenueFilter> {
        let sport: SportFilter = self.discovery.sport.parse()?;
        let price: PriceFilter = self.discovery.price.parse()?;
        Ok(VenueFilter::new(sport, price))
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.headline.tick_millis)
    }

    /// `--catalog` wins over the file's `[catalog]` section.
    pub fn with_catalog_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.catalog.source = CatalogSource::Json;
            self.catalog.path = Some(path);
        }
        self
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if self.catalog.source == CatalogSource::Json {
            let path = validate_required_field("catalog.path", &self.catalog.path)?;
            validate_path("catalog.path", path)?;
            validate_file_extension("catalog.path", path, &["json"])?;
        }

        self.default_filter()
            .map_err(|e| PlaycesError::ConfigValidationError {
                field: "discovery".to_string(),
                message: e.to_string(),
            })?;

        validate_positive_number("headline.tick_millis", self.headline.tick_millis, MIN_TICK_MILLIS)?;

        Ok(())
    }
}
