// Adapters layer: concrete providers behind the domain ports.

pub mod json;
pub mod sample;

pub use json::{CatalogDocument, JsonCatalog};
pub use sample::SampleCatalog;

use crate::config::{CatalogConfig, CatalogSource};
use crate::domain::model::{Booking, Team, UserProfile, Venue};
use crate::domain::ports::{BookingProvider, ProfileProvider, TeamProvider, VenueProvider};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use async_trait::async_trait;

/// Whichever catalog the configuration selected.
pub enum Catalog {
    Sample(SampleCatalog),
    Json(JsonCatalog),
}

impl Catalog {
    pub async fn open(config: &CatalogConfig) -> Result<Self> {
        match config.source {
            CatalogSource::Sample => {
                tracing::debug!("Using built-in sample catalog");
                Ok(Self::Sample(SampleCatalog::new()))
            }
            CatalogSource::Json => {
                let path = validate_required_field("catalog.path", &config.path)?;
                Ok(Self::Json(JsonCatalog::load(path).await?))
            }
        }
    }
}

#[async_trait]
impl VenueProvider for Catalog {
    async fn fetch_venues(&self) -> Result<Vec<Venue>> {
        match self {
            Self::Sample(c) => c.fetch_venues().await,
            Self::Json(c) => c.fetch_venues().await,
        }
    }
}

#[async_trait]
impl BookingProvider for Catalog {
    async fn fetch_bookings(&self) -> Result<Vec<Booking>> {
        match self {
            Self::Sample(c) => c.fetch_bookings().await,
            Self::Json(c) => c.fetch_bookings().await,
        }
    }
}

#[async_trait]
impl TeamProvider for Catalog {
    async fn fetch_teams(&self) -> Result<Vec<Team>> {
        match self {
            Self::Sample(c) => c.fetch_teams().await,
            Self::Json(c) => c.fetch_teams().await,
        }
    }
}

#[async_trait]
impl ProfileProvider for Catalog {
    async fn fetch_profile(&self) -> Result<UserProfile> {
        match self {
            Self::Sample(c) => c.fetch_profile().await,
            Self::Json(c) => c.fetch_profile().await,
        }
    }

    async fn update_profile(&self, profile: UserProfile) -> Result<UserProfile> {
        match self {
            Self::Sample(c) => c.update_profile(profile).await,
            Self::Json(c) => c.update_profile(profile).await,
        }
    }
}
