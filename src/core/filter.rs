use crate::domain::model::Venue;
use crate::utils::error::{PlaycesError, Result};
use std::fmt;
use std::str::FromStr;

/// Label shown for the wildcard option in both pickers.
pub const WILDCARD_LABEL: &str = "All";

/// Sport picker options, wildcard first.
pub const SPORT_OPTIONS: [&str; 6] = [
    WILDCARD_LABEL,
    "Football",
    "Basketball",
    "Tennis",
    "Cricket",
    "Badminton",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SportFilter {
    #[default]
    All,
    Sport(String),
}

impl SportFilter {
    /// The wildcard label (`All`, exact case) maps to [`SportFilter::All`].
    pub fn sport(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == WILDCARD_LABEL {
            Self::All
        } else {
            Self::Sport(name)
        }
    }

    /// Maps a picker index over [`SPORT_OPTIONS`]. Out-of-range indices fall back to the wildcard.
    pub fn from_index(index: usize) -> Self {
        match SPORT_OPTIONS.get(index) {
            Some(&name) if index > 0 => Self::Sport(name.to_string()),
            _ => Self::All,
        }
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        match self {
            Self::All => true,
            Self::Sport(name) => venue.offers(name),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => WILDCARD_LABEL,
            Self::Sport(name) => name,
        }
    }
}

impl fmt::Display for SportFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SportFilter {
    type Err = PlaycesError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PlaycesError::UnknownFilterError {
                kind: "sport".to_string(),
                value: s.to_string(),
            });
        }
        if trimmed.eq_ignore_ascii_case(WILDCARD_LABEL) {
            Ok(Self::All)
        } else {
            Ok(Self::Sport(trimmed.to_string()))
        }
    }
}

/// Hourly-rate brackets. Mutually exclusive and exhaustive over non-negative rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriceFilter {
    #[default]
    Any,
    Under500,
    From500To1000,
    From1000To2000,
    Over2000,
}

impl PriceFilter {
    pub const ALL: [PriceFilter; 5] = [
        Self::Any,
        Self::Under500,
        Self::From500To1000,
        Self::From1000To2000,
        Self::Over2000,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn matches(&self, rate: f64) -> bool {
        match self {
            Self::Any => true,
            Self::Under500 => rate < 500.0,
            Self::From500To1000 => (500.0..=1000.0).contains(&rate),
            Self::From1000To2000 => rate > 1000.0 && rate <= 2000.0,
            Self::Over2000 => rate > 2000.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Any => WILDCARD_LABEL,
            Self::Under500 => "Under ₹500",
            Self::From500To1000 => "₹500 - ₹1000",
            Self::From1000To2000 => "₹1000 - ₹2000",
            Self::Over2000 => "Over ₹2000",
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Under500 => "under-500",
            Self::From500To1000 => "500-1000",
            Self::From1000To2000 => "1000-2000",
            Self::Over2000 => "over-2000",
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the display label, a slug such as `500-1000`, or `all`/`any`.
impl FromStr for PriceFilter {
    type Err = PlaycesError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(WILDCARD_LABEL) {
            return Ok(Self::Any);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.slug().eq_ignore_ascii_case(trimmed) || p.label() == trimmed)
            .ok_or_else(|| PlaycesError::UnknownFilterError {
                kind: "price".to_string(),
                value: s.to_string(),
            })
    }
}

/// The pair of selections the home screen holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VenueFilter {
    pub sport: SportFilter,
    pub price: PriceFilter,
}

impl VenueFilter {
    pub fn new(sport: SportFilter, price: PriceFilter) -> Self {
        Self { sport, price }
    }

    pub fn is_unset(&self) -> bool {
        self.sport == SportFilter::All && self.price == PriceFilter::Any
    }

    pub fn matches(&self, venue: &Venue) -> bool {
        self.sport.matches(venue) && self.price.matches(venue.hourly_rate)
    }

    /// Keeps matching venues in their original order.
    pub fn apply<'a>(&self, venues: &'a [Venue]) -> Vec<&'a Venue> {
        venues.iter().filter(|v| self.matches(v)).collect()
    }

    pub fn apply_owned(&self, venues: Vec<Venue>) -> Vec<Venue> {
        venues.into_iter().filter(|v| self.matches(v)).collect()
    }
}

pub fn filter_venues<'a>(venues: &'a [Venue], sport: &SportFilter, price: PriceFilter) -> Vec<&'a Venue> {
    venues
        .iter()
        .filter(|v| sport.matches(v) && price.matches(v.hourly_rate))
        .collect()
}
