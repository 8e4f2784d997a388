pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{Catalog, JsonCatalog, SampleCatalog};
pub use app::{App, OutputFormat};
pub use config::AppConfig;
pub use crate::core::discovery::DiscoveryService;
pub use crate::core::filter::{filter_venues, PriceFilter, SportFilter, VenueFilter};
pub use domain::model::Venue;
pub use utils::error::{PlaycesError, Result};
