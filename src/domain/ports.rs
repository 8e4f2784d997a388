use crate::domain::model::{Booking, Team, UserProfile, Venue};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of the venue catalog. Filtering never cares where venues come from.
#[async_trait]
pub trait VenueProvider: Send + Sync {
    async fn fetch_venues(&self) -> Result<Vec<Venue>>;
}

#[async_trait]
pub trait BookingProvider: Send + Sync {
    async fn fetch_bookings(&self) -> Result<Vec<Booking>>;
}

#[async_trait]
pub trait TeamProvider: Send + Sync {
    async fn fetch_teams(&self) -> Result<Vec<Team>>;
}

#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn fetch_profile(&self) -> Result<UserProfile>;
    async fn update_profile(&self, profile: UserProfile) -> Result<UserProfile>;
}
