use crate::config::toml_config::Preferences;
use crate::core::format::{self, DistanceUnit};
use crate::domain::model::{Booking, Team, UserProfile, Venue};
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// Flat row for CSV output; list fields are joined with `;`.
#[derive(Debug, Serialize)]
struct VenueRow<'a> {
    name: &'a str,
    rating: f64,
    review_count: u32,
    hourly_rate: f64,
    distance_km: f64,
    address: &'a str,
    hours: &'a str,
    sports: String,
    amenities: String,
    latitude: f64,
    longitude: f64,
}

impl<'a> From<&'a Venue> for VenueRow<'a> {
    fn from(venue: &'a Venue) -> Self {
        Self {
            name: &venue.name,
            rating: venue.rating,
            review_count: venue.review_count,
            hourly_rate: venue.hourly_rate,
            distance_km: venue.distance,
            address: &venue.address,
            hours: &venue.hours,
            sports: venue.sports.join(";"),
            amenities: venue.amenities.join(";"),
            latitude: venue.location.latitude,
            longitude: venue.location.longitude,
        }
    }
}

pub fn venues_table<W: Write>(out: &mut W, venues: &[Venue], unit: DistanceUnit) -> Result<()> {
    if venues.is_empty() {
        writeln!(out, "No results found")?;
        return Ok(());
    }
    for venue in venues {
        writeln!(out, "{}", format::venue_line(venue, unit))?;
    }
    Ok(())
}

pub fn venues_json<W: Write>(out: &mut W, venues: &[Venue]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, venues)?;
    writeln!(out)?;
    Ok(())
}

pub fn venues_csv<W: Write>(out: &mut W, venues: &[Venue]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for venue in venues {
        writer.serialize(VenueRow::from(venue))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn venue_detail<W: Write>(out: &mut W, venue: &Venue, unit: DistanceUnit) -> Result<()> {
    writeln!(out, "{}", venue.name)?;
    writeln!(out, "{}", venue.description)?;
    writeln!(
        out,
        "Rating {} {}  ·  {} away  ·  {}/hr",
        format::rating(venue.rating),
        format::review_count(venue.review_count),
        format::distance(venue.distance, unit),
        format::hourly_rate(venue.hourly_rate)
    )?;
    writeln!(out, "Hours: {}", venue.hours)?;
    writeln!(out, "Address: {}", venue.address)?;
    writeln!(out, "Sports: {}", venue.sports.join(", "))?;
    writeln!(out, "Amenities: {}", venue.amenities.join(", "))?;
    writeln!(out, "Directions: {}", format::maps_link(&venue.address))?;
    Ok(())
}

pub fn bookings<W: Write>(out: &mut W, bookings: &[&Booking]) -> Result<()> {
    if bookings.is_empty() {
        writeln!(out, "No bookings")?;
        return Ok(());
    }
    for booking in bookings {
        writeln!(
            out,
            "{} | {} | {} | {} | {} | {} players | {}",
            format::medium_date(&booking.date),
            booking.venue_name,
            booking.sport,
            booking.duration,
            format::hourly_rate(booking.price),
            booking.participants,
            booking.status.title()
        )?;
    }
    Ok(())
}

pub fn teams<W: Write>(out: &mut W, teams: &[Team]) -> Result<()> {
    for team in teams {
        writeln!(
            out,
            "{} [{}] {} · {} member(s) · {:?}",
            team.name,
            team.unique_code,
            team.sport,
            team.members.len(),
            team.color
        )?;
        for member in &team.members {
            writeln!(out, "  - {}", member.name)?;
        }
    }
    Ok(())
}

pub fn profile<W: Write>(out: &mut W, profile: &UserProfile) -> Result<()> {
    writeln!(out, "{}", profile.name)?;
    writeln!(out, "{} · {}", profile.email, profile.phone)?;
    writeln!(out, "{}", profile.location.display_name())?;
    writeln!(out, "Member since {}", profile.member_since_label())?;
    writeln!(out, "Sports: {}", profile.sports.join(", "))?;
    writeln!(
        out,
        "Games {} · Hours {} · Favorite {}",
        profile.stats.games_played, profile.stats.hours_played, profile.stats.favorite_sport
    )?;
    for achievement in &profile.stats.achievements {
        writeln!(
            out,
            "  * {} ({}): {}",
            achievement.title,
            format::month_year(&achievement.date_earned),
            achievement.description
        )?;
    }
    Ok(())
}

pub fn preferences<W: Write>(out: &mut W, prefs: &Preferences) -> Result<()> {
    let on_off = |flag: bool| if flag { "on" } else { "off" };
    writeln!(
        out,
        "Appearance: {} · Notifications {} · Email updates {} · Distance: {} · Language: {}",
        if prefs.dark_mode { "Dark Mode" } else { "Light Mode" },
        on_off(prefs.notifications),
        on_off(prefs.email_updates),
        prefs.distance_unit.label(),
        prefs.language.label()
    )?;
    Ok(())
}
