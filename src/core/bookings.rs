use crate::domain::model::{Booking, BookingStatus, Venue};
use crate::utils::error::{PlaycesError, Result};
use crate::utils::validation::validate_range;
use chrono::{DateTime, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const MIN_BOOKING_HOURS: u32 = 1;
pub const MAX_BOOKING_HOURS: u32 = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingTab {
    #[default]
    Upcoming,
    Previous,
}

impl BookingTab {
    /// Upcoming: soonest first. Previous (completed and cancelled): most recent first.
    pub fn select<'a>(&self, bookings: &'a [Booking]) -> Vec<&'a Booking> {
        let mut selected: Vec<&Booking> = match self {
            Self::Upcoming => bookings
                .iter()
                .filter(|b| b.status == BookingStatus::Upcoming)
                .collect(),
            Self::Previous => bookings
                .iter()
                .filter(|b| b.status != BookingStatus::Upcoming)
                .collect(),
        };

        match self {
            Self::Upcoming => selected.sort_by_key(|b| b.date),
            Self::Previous => selected.sort_by(|a, b| b.date.cmp(&a.date)),
        }
        selected
    }
}

impl fmt::Display for BookingTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upcoming => f.write_str("Upcoming"),
            Self::Previous => f.write_str("Previous"),
        }
    }
}

impl FromStr for BookingTab {
    type Err = PlaycesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Self::Upcoming),
            "previous" | "past" => Ok(Self::Previous),
            _ => Err(PlaycesError::UnknownFilterError {
                kind: "booking tab".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// A priced, not yet confirmed booking for one venue.
#[derive(Debug, Clone)]
pub struct BookingQuote {
    venue_name: String,
    sport: String,
    hourly_rate: f64,
    date: DateTime<Utc>,
    hours: u32,
}

impl BookingQuote {
    /// `today` is the caller's current date; bookings in the past are rejected.
    pub fn new(venue: &Venue, date: DateTime<Utc>, hours: u32, today: NaiveDate) -> Result<Self> {
        validate_range("hours", hours, MIN_BOOKING_HOURS, MAX_BOOKING_HOURS)?;
        if date.date_naive() < today {
            return Err(PlaycesError::validation(format!(
                "booking date {} is before {}",
                date.date_naive(),
                today
            )));
        }

        Ok(Self {
            venue_name: venue.name.clone(),
            sport: venue.sports.first().cloned().unwrap_or_default(),
            hourly_rate: venue.hourly_rate,
            date,
            hours,
        })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// Whole-currency total; the fractional part of the rate is dropped before multiplying.
    pub fn total_price(&self) -> u64 {
        self.hourly_rate.trunc() as u64 * u64::from(self.hours)
    }

    pub fn confirmation_message(&self) -> String {
        format!(
            "Your booking at {} for {} hour(s) on {} has been confirmed.",
            self.venue_name,
            self.hours,
            crate::core::format::medium_date(&self.date)
        )
    }

    pub fn confirm(self) -> Booking {
        let price = self.total_price() as f64;
        let duration = if self.hours == 1 {
            "1 hour".to_string()
        } else {
            format!("{} hours", self.hours)
        };

        tracing::info!(
            venue = %self.venue_name,
            hours = self.hours,
            price,
            "Booking confirmed"
        );

        Booking {
            id: Uuid::new_v4(),
            venue_name: self.venue_name,
            sport: self.sport,
            date: self.date,
            duration,
            price,
            status: BookingStatus::Upcoming,
            participants: 0,
        }
    }
}
