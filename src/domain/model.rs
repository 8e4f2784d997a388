use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A bookable sports facility. Read-only once it leaves the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub rating: f64,
    /// Kilometres from the user.
    pub distance: f64,
    pub hourly_rate: f64,
    pub review_count: u32,
    pub address: String,
    pub hours: String,
    pub sports: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub location: Coordinate,
}

impl Venue {
    pub fn offers(&self, sport: &str) -> bool {
        self.sports.iter().any(|s| s == sport)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub venue_name: String,
    pub sport: String,
    pub date: DateTime<Utc>,
    pub duration: String,
    pub price: f64,
    pub status: BookingStatus,
    pub participants: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamColor {
    Blue,
    Purple,
    Green,
    Orange,
    Pink,
    Red,
    Indigo,
}

impl TeamColor {
    pub const ALL: [TeamColor; 7] = [
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Orange,
        Self::Pink,
        Self::Red,
        Self::Indigo,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
}

impl TeamMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub sport: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    pub color: TeamColor,
    pub unique_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub town: String,
    pub city: Option<String>,
    pub country: String,
    pub coordinate: Option<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon_name: String,
    pub date_earned: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub games_played: u32,
    pub hours_played: u32,
    pub favorite_sport: String,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: Location,
    pub member_since: DateTime<Utc>,
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub sports: Vec<String>,
    pub stats: UserStats,
}
