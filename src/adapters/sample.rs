use crate::domain::model::{
    Achievement, Booking, BookingStatus, Coordinate, Location, Team, TeamColor, UserProfile,
    UserStats, Venue,
};
use crate::domain::ports::{BookingProvider, ProfileProvider, TeamProvider, VenueProvider};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

struct VenueSeed {
    name: &'static str,
    description: &'static str,
    rating: f64,
    distance: f64,
    hourly_rate: f64,
    review_count: u32,
    address: &'static str,
    hours: &'static str,
    sports: &'static [&'static str],
    amenities: &'static [&'static str],
    images: &'static [&'static str],
    location: Coordinate,
}

const VENUES: &[VenueSeed] = &[
    VenueSeed {
        name: "City Sports Complex",
        description: "A premium sports complex with turf, floodlights, and modern facilities. Great for training and matches.",
        rating: 4.8,
        distance: 2.5,
        hourly_rate: 800.0,
        review_count: 128,
        address: "123 Sports Avenue, Ravet, Pune",
        hours: "6:00 AM - 10:00 PM (Mon - Sun)",
        sports: &["Cricket", "Football"],
        amenities: &["Wi-Fi", "Parking", "Changing Rooms", "Seating", "Water", "Restrooms"],
        images: &["sample1", "sample2"],
        location: Coordinate::new(18.6510, 73.7617),
    },
    VenueSeed {
        name: "Ravet Community Ground",
        description: "Open community ground with well-maintained pitches and basic amenities. Suitable for casual matches.",
        rating: 4.6,
        distance: 3.2,
        hourly_rate: 500.0,
        review_count: 89,
        address: "45 Green Park, Ravet, Pune",
        hours: "5:30 AM - 9:00 PM (Mon - Sun)",
        sports: &["Cricket", "Football"],
        amenities: &["Parking", "Restrooms"],
        images: &["sample2", "sample1"],
        location: Coordinate::new(18.6525, 73.7650),
    },
    VenueSeed {
        name: "Elite Indoor Arena",
        description: "Indoor multi-sport arena with professional flooring, seating, and changing rooms.",
        rating: 4.9,
        distance: 1.8,
        hourly_rate: 1200.0,
        review_count: 210,
        address: "9 Prestige Towers, Baner, Pune",
        hours: "7:00 AM - 11:00 PM (Mon - Sun)",
        sports: &["Badminton", "Basketball", "Table Tennis"],
        amenities: &["Wi-Fi", "Parking", "Changing Rooms", "Seating", "Water", "Restrooms"],
        images: &["sample1", "sample2"],
        location: Coordinate::new(18.5590, 73.7795),
    },
    VenueSeed {
        name: "Greenfield Tennis Courts",
        description: "Outdoor tennis courts with professional-grade surfaces and floodlights for night play.",
        rating: 4.7,
        distance: 4.1,
        hourly_rate: 700.0,
        review_count: 74,
        address: "78 Greenfield Road, Kothrud, Pune",
        hours: "6:00 AM - 9:00 PM (Mon - Sat)",
        sports: &["Tennis"],
        amenities: &["Parking", "Restrooms", "Water"],
        images: &["sample3", "sample4"],
        location: Coordinate::new(18.5167, 73.8567),
    },
    VenueSeed {
        name: "Sunrise Yoga Studio",
        description: "Peaceful indoor studio offering yoga and meditation classes with serene ambiance.",
        rating: 4.5,
        distance: 3.8,
        hourly_rate: 600.0,
        review_count: 56,
        address: "22 Sunrise Lane, Viman Nagar, Pune",
        hours: "5:00 AM - 8:00 PM (Mon - Fri)",
        sports: &["Yoga", "Meditation"],
        amenities: &["Wi-Fi", "Changing Rooms", "Seating"],
        images: &["sample1", "sample3"],
        location: Coordinate::new(18.5600, 73.9120),
    },
    VenueSeed {
        name: "Downtown Basketball Court",
        description: "Open-air basketball court in the heart of the city, popular among local players.",
        rating: 4.3,
        distance: 2.0,
        hourly_rate: 300.0,
        review_count: 102,
        address: "10 Main Street, Shivaji Nagar, Pune",
        hours: "6:00 AM - 10:00 PM (Mon - Sun)",
        sports: &["Basketball"],
        amenities: &["Seating", "Water", "Restrooms"],
        images: &["sample4", "sample2"],
        location: Coordinate::new(18.5204, 73.8567),
    },
    VenueSeed {
        name: "Riverside Running Track",
        description: "Scenic running track along the river with dedicated lanes and fitness stations.",
        rating: 4.4,
        distance: 5.5,
        hourly_rate: 200.0,
        review_count: 150,
        address: "Riverside Park, Hadapsar, Pune",
        hours: "5:00 AM - 9:00 PM (Mon - Sun)",
        sports: &["Running", "Jogging"],
        amenities: &["Water", "Seating", "Restrooms"],
        images: &["sample3", "sample2"],
        location: Coordinate::new(18.5300, 73.9300),
    },
    VenueSeed {
        name: "Mountain View Climbing Gym",
        description: "Indoor climbing gym with walls for all skill levels and professional trainers available.",
        rating: 4.9,
        distance: 6.0,
        hourly_rate: 1000.0,
        review_count: 85,
        address: "55 Hilltop Road, Pashan, Pune",
        hours: "8:00 AM - 10:00 PM (Mon - Sat)",
        sports: &["Climbing"],
        amenities: &["Wi-Fi", "Changing Rooms", "Seating", "Water", "Restrooms"],
        images: &["sample2", "sample4"],
        location: Coordinate::new(18.5605, 73.7800),
    },
    VenueSeed {
        name: "Lakeside Paddle Club",
        description: "Picturesque lakeside venue offering kayaking, canoeing, and paddleboarding with rental equipment and instructors.",
        rating: 4.2,
        distance: 7.3,
        hourly_rate: 900.0,
        review_count: 47,
        address: "Lakeview Drive, Mulshi, Pune",
        hours: "7:00 AM - 7:00 PM (Mon - Sun)",
        sports: &["Kayaking", "Canoeing", "Paddleboarding"],
        amenities: &["Parking", "Changing Rooms", "Equipment Rental", "Restrooms"],
        images: &["sample1", "sample4"],
        location: Coordinate::new(18.5050, 73.4950),
    },
    VenueSeed {
        name: "Urban Skating Park",
        description: "Modern skatepark with ramps, rails, and bowls suitable for skateboarding, inline skating, and BMX.",
        rating: 4.6,
        distance: 4.9,
        hourly_rate: 350.0,
        review_count: 64,
        address: "88 Skate Lane, Aundh, Pune",
        hours: "4:00 PM - 10:00 PM (Mon - Sun)",
        sports: &["Skateboarding", "Inline Skating", "BMX"],
        amenities: &["Seating", "Water", "Restrooms", "Parking"],
        images: &["sample1", "sample4"],
        location: Coordinate::new(18.5630, 73.8070),
    },
    VenueSeed {
        name: "Heritage Martial Arts Dojo",
        description: "Traditional dojo offering karate, judo, and taekwondo classes for all ages and skill levels.",
        rating: 4.8,
        distance: 3.1,
        hourly_rate: 700.0,
        review_count: 92,
        address: "12 Heritage Plaza, Kalyani Nagar, Pune",
        hours: "6:00 AM - 9:00 PM (Mon - Sat)",
        sports: &["Karate", "Judo", "Taekwondo"],
        amenities: &["Changing Rooms", "Seating", "Restrooms"],
        images: &["sample3", "sample2"],
        location: Coordinate::new(18.5515, 73.9030),
    },
    VenueSeed {
        name: "Sunset Volleyball Beach",
        description: "Sandy beach court with nets for volleyball and beach soccer, perfect for group fun and tournaments.",
        rating: 4.1,
        distance: 8.2,
        hourly_rate: 400.0,
        review_count: 38,
        address: "Beachside Road, Hinjewadi, Pune",
        hours: "6:00 AM - 8:00 PM (Mon - Sun)",
        sports: &["Volleyball", "Beach Soccer"],
        amenities: &["Parking", "Water", "Restrooms", "Seating"],
        images: &["sample4", "sample2"],
        location: Coordinate::new(18.5970, 73.7000),
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn sample_venues() -> Vec<Venue> {
    VENUES
        .iter()
        .map(|seed| Venue {
            id: Uuid::new_v4(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            rating: seed.rating,
            distance: seed.distance,
            hourly_rate: seed.hourly_rate,
            review_count: seed.review_count,
            address: seed.address.to_string(),
            hours: seed.hours.to_string(),
            sports: strings(seed.sports),
            amenities: strings(seed.amenities),
            images: strings(seed.images),
            location: seed.location,
        })
        .collect()
}

/// Dates are relative to `now`: two upcoming, two completed, one cancelled.
pub fn sample_bookings(now: DateTime<Utc>) -> Vec<Booking> {
    let entry = |venue: &str, sport: &str, days: i64, duration: &str, price: f64, status, participants| Booking {
        id: Uuid::new_v4(),
        venue_name: venue.to_string(),
        sport: sport.to_string(),
        date: now + Duration::days(days),
        duration: duration.to_string(),
        price,
        status,
        participants,
    };

    vec![
        entry("City Sports Complex", "Football", 2, "2 hours", 1200.0, BookingStatus::Upcoming, 10),
        entry("Elite Tennis Academy", "Tennis", 5, "1.5 hours", 800.0, BookingStatus::Upcoming, 2),
        entry("Ravet Community Ground", "Cricket", -3, "3 hours", 1500.0, BookingStatus::Completed, 16),
        entry("Skyline Basketball Court", "Basketball", -7, "2 hours", 900.0, BookingStatus::Completed, 8),
        entry("Pune Cricket Ground", "Cricket", -1, "4 hours", 2000.0, BookingStatus::Cancelled, 0),
    ]
}

pub fn sample_teams() -> Vec<Team> {
    vec![
        Team::new("FC Warriors", "Football", TeamColor::Purple)
            .with_members(["Alex Johnson", "Sam Wilson", "Jamie Smith"]),
        Team::new("Net Kings", "Basketball", TeamColor::Orange)
            .with_members(["Mike Jordan", "Leo James"]),
        Team::new("Smash Masters", "Badminton", TeamColor::Green)
            .with_members(["Wei Chen", "Lisa Wang"]),
    ]
}

pub fn sample_profile(now: DateTime<Utc>) -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        name: "Shantanu Tapole".to_string(),
        email: "shantanu.tapole@example.com".to_string(),
        phone: "+91 9876543210".to_string(),
        location: Location {
            town: "Baner".to_string(),
            city: Some("Pune".to_string()),
            country: "India".to_string(),
            coordinate: Some(Coordinate::new(18.5590, 73.7898)),
        },
        member_since: now - Duration::days(200),
        profile_image_url: None,
        sports: strings(&["Cricket", "Badminton"]),
        stats: UserStats {
            games_played: 15,
            hours_played: 48,
            favorite_sport: "Cricket".to_string(),
            achievements: vec![Achievement {
                id: Uuid::new_v4(),
                title: "Starter".to_string(),
                description: "Joined PlayCes and set up your profile".to_string(),
                icon_name: "person.crop.circle".to_string(),
                date_earned: now - Duration::days(180),
            }],
        },
    }
}

/// Built-in demo data behind every provider port.
pub struct SampleCatalog {
    venues: Vec<Venue>,
    bookings: Vec<Booking>,
    teams: Vec<Team>,
    profile: RwLock<UserProfile>,
}

impl SampleCatalog {
    pub fn new() -> Self {
        Self::anchored_at(Utc::now())
    }

    pub fn anchored_at(now: DateTime<Utc>) -> Self {
        Self {
            venues: sample_venues(),
            bookings: sample_bookings(now),
            teams: sample_teams(),
            profile: RwLock::new(sample_profile(now)),
        }
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VenueProvider for SampleCatalog {
    async fn fetch_venues(&self) -> Result<Vec<Venue>> {
        Ok(self.venues.clone())
    }
}

#[async_trait]
impl BookingProvider for SampleCatalog {
    async fn fetch_bookings(&self) -> Result<Vec<Booking>> {
        Ok(self.bookings.clone())
    }
}

#[async_trait]
impl TeamProvider for SampleCatalog {
    async fn fetch_teams(&self) -> Result<Vec<Team>> {
        Ok(self.teams.clone())
    }
}

#[async_trait]
impl ProfileProvider for SampleCatalog {
    async fn fetch_profile(&self) -> Result<UserProfile> {
        Ok(self.profile.read().await.clone())
    }

    async fn update_profile(&self, profile: UserProfile) -> Result<UserProfile> {
        profile.validate()?;
        let mut current = self.profile.write().await;
        *current = profile;
        tracing::info!(name = %current.name, "Profile updated");
        Ok(current.clone())
    }
}
