pub mod bookings;
pub mod discovery;
pub mod filter;
pub mod format;
pub mod profile;
pub mod signup;
pub mod teams;
pub mod ticker;

pub use crate::domain::model::{Booking, Team, UserProfile, Venue};
pub use crate::domain::ports::{BookingProvider, ProfileProvider, TeamProvider, VenueProvider};
pub use crate::utils::error::Result;
