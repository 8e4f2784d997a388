use crate::domain::model::Venue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

const KM_TO_MILES: f64 = 0.621_371;
const MAPS_BASE_URL: &str = "http://maps.apple.com/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnit {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kilometers => "Kilometers",
            Self::Miles => "Miles",
        }
    }
}

pub fn rating(value: f64) -> String {
    format!("{:.1}", value)
}

pub fn hourly_rate(value: f64) -> String {
    format!("₹{}", value.trunc())
}

pub fn distance(km: f64, unit: DistanceUnit) -> String {
    match unit {
        DistanceUnit::Kilometers => format!("{:.1} km", km),
        DistanceUnit::Miles => format!("{:.1} mi", km * KM_TO_MILES),
    }
}

pub fn review_count(count: u32) -> String {
    if count == 1 {
        "(1 review)".to_string()
    } else {
        format!("({} reviews)", count)
    }
}

/// `Oct 19, 2026`
pub fn medium_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `Oct 2026`
pub fn month_year(date: &DateTime<Utc>) -> String {
    date.format("%b %Y").to_string()
}

pub fn maps_link(address: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("address", address)
        .finish();
    format!("{}?{}", MAPS_BASE_URL, query)
}

/// One-line summary used by list output.
pub fn venue_line(venue: &Venue, unit: DistanceUnit) -> String {
    format!(
        "{} | {} {} | {}/hr | {} | {}",
        venue.name,
        rating(venue.rating),
        review_count(venue.review_count),
        hourly_rate(venue.hourly_rate),
        distance(venue.distance, unit),
        venue.sports.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_numbers() {
        assert_eq!(rating(4.76), "4.8");
        assert_eq!(rating(5.0), "5.0");
        assert_eq!(hourly_rate(800.0), "₹800");
        assert_eq!(hourly_rate(800.75), "₹800");
        assert_eq!(review_count(1), "(1 review)");
        assert_eq!(review_count(128), "(128 reviews)");
    }

    #[test]
    fn test_distance_units() {
        assert_eq!(distance(2.5, DistanceUnit::Kilometers), "2.5 km");
        assert_eq!(distance(2.5, DistanceUnit::Miles), "1.6 mi");
    }

    #[test]
    fn test_dates() {
        let date = Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap();
        assert_eq!(medium_date(&date), "Mar 7, 2026");
        assert_eq!(month_year(&date), "Mar 2026");
    }

    #[test]
    fn test_maps_link_encodes_address() {
        assert_eq!(
            maps_link("123 Sports Avenue, Ravet, Pune"),
            "http://maps.apple.com/?address=123+Sports+Avenue%2C+Ravet%2C+Pune"
        );
    }
}
