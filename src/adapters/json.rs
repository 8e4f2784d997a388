use crate::domain::model::{Booking, Team, UserProfile, Venue};
use crate::domain::ports::{BookingProvider, ProfileProvider, TeamProvider, VenueProvider};
use crate::utils::error::{PlaycesError, Result};
use crate::utils::validation::Validate;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// On-disk catalog layout. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub venues: Vec<Venue>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

impl CatalogDocument {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: Self = serde_json::from_str(content)?;
        document.check()?;
        Ok(document)
    }

    fn check(&self) -> Result<()> {
        for venue in &self.venues {
            if venue.sports.iter().any(|s| s.trim().is_empty()) {
                return Err(PlaycesError::validation(format!(
                    "venue '{}' has an empty sport tag",
                    venue.name
                )));
            }
            if !(0.0..=5.0).contains(&venue.rating) {
                return Err(PlaycesError::validation(format!(
                    "venue '{}' has rating {} outside 0-5",
                    venue.name, venue.rating
                )));
            }
        }
        Ok(())
    }
}

/// Catalog loaded once from a JSON file. Profile edits stay in memory.
pub struct JsonCatalog {
    source: PathBuf,
    venues: Vec<Venue>,
    bookings: Vec<Booking>,
    teams: Vec<Team>,
    profile: RwLock<Option<UserProfile>>,
}

impl JsonCatalog {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = path.as_ref().to_path_buf();
        let content = tokio::fs::read_to_string(&source).await?;
        let document = CatalogDocument::from_json_str(&content)?;

        tracing::info!(
            path = %source.display(),
            venues = document.venues.len(),
            bookings = document.bookings.len(),
            teams = document.teams.len(),
            "Loaded catalog"
        );

        Ok(Self::from_document(source, document))
    }

    pub fn from_document(source: PathBuf, document: CatalogDocument) -> Self {
        Self {
            source,
            venues: document.venues,
            bookings: document.bookings,
            teams: document.teams,
            profile: RwLock::new(document.profile),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}

#[async_trait]
impl VenueProvider for JsonCatalog {
    async fn fetch_venues(&self) -> Result<Vec<Venue>> {
        Ok(self.venues.clone())
    }
}

#[async_trait]
impl BookingProvider for JsonCatalog {
    async fn fetch_bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.bookings.clone())
    }
}

#[async_trait]
impl TeamProvider for JsonCatalog {
    async fn fetch_teams(&self) -> Result<Vec<Team>> {
        Ok(self.teams.clone())
    }
}

#[async_trait]
impl ProfileProvider for JsonCatalog {
    async fn fetch_profile(&self) -> Result<UserProfile> {
        self.profile
            .read()
            .await
            .clone()
            .ok_or_else(|| PlaycesError::not_found("profile", self.source.display().to_string()))
    }

    async fn update_profile(&self, profile: UserProfile) -> Result<UserProfile> {
        profile.validate()?;
        let mut current = self.profile.write().await;
        *current = Some(profile.clone());
        Ok(profile)
    }
}
