use crate::core::filter::VenueFilter;
use crate::domain::model::Venue;
use crate::domain::ports::VenueProvider;
use crate::utils::error::{PlaycesError, Result};

/// Pulls the catalog from a provider and runs it through the filter engine.
/// The catalog is fetched fresh on every call.
pub struct DiscoveryService<P: VenueProvider> {
    provider: P,
}

impl<P: VenueProvider> DiscoveryService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn discover(&self, filter: &VenueFilter) -> Result<Vec<Venue>> {
        let venues = self.provider.fetch_venues().await?;
        let total = venues.len();

        let matched = filter.apply_owned(venues);
        tracing::debug!(
            sport = %filter.sport,
            price = %filter.price,
            "Filtered {} of {} venues",
            matched.len(),
            total
        );
        if matched.is_empty() {
            tracing::info!("No venues match sport={} price={}", filter.sport, filter.price);
        }

        Ok(matched)
    }

    /// Case-insensitive substring search over name, address and sport tags.
    pub async fn search(&self, query: &str) -> Result<Vec<Venue>> {
        let venues = self.provider.fetch_venues().await?;
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(venues);
        }

        let hits: Vec<Venue> = venues
            .into_iter()
            .filter(|v| {
                v.name.to_lowercase().contains(&needle)
                    || v.address.to_lowercase().contains(&needle)
                    || v.sports.iter().any(|s| s.to_lowercase().contains(&needle))
            })
            .collect();
        tracing::debug!("Search '{}' matched {} venues", query, hits.len());

        Ok(hits)
    }

    pub async fn find(&self, name: &str) -> Result<Venue> {
        self.provider
            .fetch_venues()
            .await?
            .into_iter()
            .find(|v| v.name == name)
            .ok_or_else(|| PlaycesError::not_found("venue", name))
    }
}
