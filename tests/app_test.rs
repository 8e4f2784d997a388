use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use playces::config::toml_config::HeadlineConfig;
use playces::core::bookings::BookingTab;
use playces::core::format::DistanceUnit;
use playces::adapters::CatalogDocument;
use playces::{
    App, AppConfig, JsonCatalog, OutputFormat, PriceFilter, SampleCatalog, SportFilter, VenueFilter,
};
use std::path::PathBuf;
use tempfile::TempDir;

fn app() -> App<SampleCatalog> {
    let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
    App::new(SampleCatalog::anchored_at(now), AppConfig::default())
}

fn text(buf: Vec<u8>) -> String {
    String::from_utf8(buf).expect("output is utf-8")
}

#[tokio::test]
async fn test_venues_table_and_empty_state() -> Result<()> {
    let app = app();

    let mut out = Vec::new();
    let count = app
        .venues(
            &VenueFilter::new(SportFilter::sport("Tennis"), PriceFilter::Any),
            OutputFormat::Table,
            &mut out,
        )
        .await?;
    assert_eq!(count, 1);
    assert_eq!(
        text(out),
        "Greenfield Tennis Courts | 4.7 (74 reviews) | ₹700/hr | 4.1 km | Tennis\n"
    );

    let mut out = Vec::new();
    let count = app
        .venues(
            &VenueFilter::new(SportFilter::sport("Curling"), PriceFilter::Any),
            OutputFormat::Table,
            &mut out,
        )
        .await?;
    assert_eq!(count, 0);
    assert_eq!(text(out), "No results found\n");

    Ok(())
}

#[tokio::test]
async fn test_venues_csv_and_json() -> Result<()> {
    let app = app();
    let filter = VenueFilter::new(SportFilter::All, PriceFilter::From1000To2000);

    let mut out = Vec::new();
    app.venues(&filter, OutputFormat::Csv, &mut out).await?;
    let csv = text(out);
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("name,rating,review_count,hourly_rate,distance_km,address,hours,sports,amenities,latitude,longitude")
    );
    let row = lines.next().expect("one data row");
    assert!(row.starts_with("Elite Indoor Arena,4.9,210,1200.0,1.8,"));
    assert!(row.contains("Badminton;Basketball;Table Tennis"));
    assert!(lines.next().is_none());

    let mut out = Vec::new();
    app.venues(&filter, OutputFormat::Json, &mut out).await?;
    let parsed: serde_json::Value = serde_json::from_slice(&out)?;
    assert_eq!(parsed.as_array().map(Vec::len), Some(1));
    assert_eq!(parsed[0]["name"], "Elite Indoor Arena");

    Ok(())
}

#[tokio::test]
async fn test_distance_unit_preference() -> Result<()> {
    let mut config = AppConfig::default();
    config.preferences.distance_unit = DistanceUnit::Miles;
    let app = App::new(SampleCatalog::new(), config);

    let mut out = Vec::new();
    app.venues(
        &VenueFilter::new(SportFilter::sport("Climbing"), PriceFilter::Any),
        OutputFormat::Table,
        &mut out,
    )
    .await?;
    assert!(text(out).contains("| 3.7 mi |"));

    Ok(())
}

#[tokio::test]
async fn test_booking_tabs() -> Result<()> {
    let app = app();

    let mut out = Vec::new();
    assert_eq!(app.bookings(BookingTab::Upcoming, &mut out).await?, 2);
    let upcoming = text(out);
    let lines: Vec<&str> = upcoming.lines().collect();
    assert!(lines[0].starts_with("Oct 21, 2026 | City Sports Complex"));
    assert!(lines[1].starts_with("Oct 24, 2026 | Elite Tennis Academy"));

    let mut out = Vec::new();
    assert_eq!(app.bookings(BookingTab::Previous, &mut out).await?, 3);
    let previous = text(out);
    let venues: Vec<&str> = previous
        .lines()
        .map(|l| l.split(" | ").nth(1).unwrap_or_default())
        .collect();
    assert_eq!(
        venues,
        vec![
            "Pune Cricket Ground",
            "Ravet Community Ground",
            "Skyline Basketball Court"
        ]
    );
    assert!(previous.lines().next().unwrap_or_default().ends_with("Cancelled"));

    Ok(())
}

#[tokio::test]
async fn test_quote() -> Result<()> {
    let app = app();
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let mut out = Vec::new();
    let total = app
        .quote("Elite Indoor Arena", 3, NaiveDate::from_ymd_opt(2026, 10, 22), today, &mut out)
        .await?;
    assert_eq!(total, 3600);
    assert_eq!(
        text(out),
        "₹1200 × 3 hour(s) = ₹3600\nYour booking at Elite Indoor Arena for 3 hour(s) on Oct 22, 2026 has been confirmed.\n"
    );

    let mut out = Vec::new();
    assert!(app
        .quote("Elite Indoor Arena", 12, None, today, &mut out)
        .await
        .is_err());
    assert!(app.quote("Nowhere", 1, None, today, &mut out).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_quote_truncates_fractional_rate() -> Result<()> {
    let document = CatalogDocument::from_json_str(
        r#"{
          "venues": [{
            "name": "Fraction Field",
            "description": "Turf",
            "rating": 4.0,
            "distance": 2.0,
            "hourly_rate": 800.75,
            "review_count": 5,
            "address": "9 Ninth Street",
            "hours": "6:00 AM - 10:00 PM",
            "sports": ["Football"],
            "location": { "latitude": 18.5, "longitude": 73.8 }
          }]
        }"#,
    )?;
    let catalog = JsonCatalog::from_document(PathBuf::from("catalog.json"), document);
    let app = App::new(catalog, AppConfig::default());
    let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

    let mut out = Vec::new();
    let total = app.quote("Fraction Field", 3, None, today, &mut out).await?;
    assert_eq!(total, 2400);
    assert!(text(out).starts_with("₹800 × 3 hour(s) = ₹2400\n"));

    Ok(())
}

#[tokio::test]
async fn test_teams_and_profile() -> Result<()> {
    let app = app();

    let mut out = Vec::new();
    assert_eq!(app.teams(&mut out).await?, 3);
    let teams = text(out);
    assert!(teams.contains("FC Warriors ["));
    assert!(teams.contains("  - Lisa Wang"));

    let mut out = Vec::new();
    app.profile(&mut out).await?;
    let profile = text(out);
    assert!(profile.starts_with("Shantanu Tapole\n"));
    assert!(profile.contains("Baner, Pune, India"));
    assert!(profile.contains("Member since Apr 2026"));
    assert!(profile.ends_with(
        "Appearance: Light Mode · Notifications on · Email updates off · Distance: Kilometers · Language: English\n"
    ));

    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_headline_rotates_then_unmounts() -> Result<()> {
    let config = AppConfig {
        headline: HeadlineConfig { tick_millis: 2000 },
        ..AppConfig::default()
    };
    let app = App::new(SampleCatalog::new(), config);

    let mut out = Vec::new();
    app.headline(3, &mut out).await?;
    assert_eq!(
        text(out),
        "It's your turn to Play (Orange)\nIt's your turn to Goal (Green)\nIt's your turn to Swim (Blue)\nIt's your turn to Run (Red)\n"
    );

    Ok(())
}

#[test]
fn test_config_file_round_trip_through_disk() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("playces.toml");
    std::fs::write(
        &path,
        "[discovery]\nsport = \"Cricket\"\nprice = \"500-1000\"\n\n[preferences]\nemail_updates = true\n",
    )?;

    let config = AppConfig::from_file(&path)?;
    let filter = config.default_filter()?;
    assert_eq!(filter.sport, SportFilter::sport("Cricket"));
    assert_eq!(filter.price, PriceFilter::From500To1000);
    assert!(config.preferences.email_updates);

    Ok(())
}
