use anyhow::Result;
use playces::adapters::CatalogDocument;
use playces::config::{CatalogConfig, CatalogSource};
use playces::core::bookings::BookingTab;
use playces::domain::ports::{BookingProvider, ProfileProvider, TeamProvider, VenueProvider};
use playces::utils::error::PlaycesError;
use playces::{Catalog, DiscoveryService, JsonCatalog, PriceFilter, SampleCatalog, SportFilter, VenueFilter};
use tempfile::TempDir;

const CATALOG_JSON: &str = r#"
{
  "venues": [
    {
      "name": "Alpha Turf",
      "description": "Five-a-side turf",
      "rating": 4.2,
      "distance": 1.2,
      "hourly_rate": 800,
      "review_count": 12,
      "address": "1 First Street",
      "hours": "6:00 AM - 10:00 PM",
      "sports": ["Football"],
      "location": { "latitude": 18.5, "longitude": 73.8 }
    },
    {
      "name": "Bravo Courts",
      "description": "Hard courts",
      "rating": 3.9,
      "distance": 4.0,
      "hourly_rate": 300,
      "review_count": 3,
      "address": "2 Second Street",
      "hours": "7:00 AM - 9:00 PM",
      "sports": ["Tennis"],
      "amenities": ["Parking"],
      "location": { "latitude": 18.6, "longitude": 73.7 }
    },
    {
      "name": "Charlie Stadium",
      "description": "Full-size pitch",
      "rating": 4.9,
      "distance": 9.5,
      "hourly_rate": 2500,
      "review_count": 80,
      "address": "3 Third Street",
      "hours": "8:00 AM - 8:00 PM",
      "sports": ["Football"],
      "location": { "latitude": 18.4, "longitude": 73.9 }
    }
  ],
  "bookings": [
    {
      "venue_name": "Alpha Turf",
      "sport": "Football",
      "date": "2026-10-25T18:00:00Z",
      "duration": "2 hours",
      "price": 1600,
      "status": "upcoming",
      "participants": 10
    },
    {
      "venue_name": "Bravo Courts",
      "sport": "Tennis",
      "date": "2026-10-01T07:00:00Z",
      "duration": "1 hour",
      "price": 300,
      "status": "cancelled",
      "participants": 0
    }
  ],
  "teams": [
    {
      "name": "Alpha Squad",
      "sport": "Football",
      "color": "blue",
      "unique_code": "AB12CD",
      "members": [{ "name": "Sam Wilson" }]
    }
  ]
}
"#;

async fn write_catalog(dir: &TempDir, content: &str) -> Result<String> {
    let path = dir.path().join("catalog.json");
    tokio::fs::write(&path, content).await?;
    Ok(path.to_string_lossy().into_owned())
}

#[tokio::test]
async fn test_json_catalog_feeds_the_filter() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_catalog(&dir, CATALOG_JSON).await?;

    let service = DiscoveryService::new(JsonCatalog::load(&path).await?);

    let football = service
        .discover(&VenueFilter::new(SportFilter::sport("Football"), PriceFilter::Any))
        .await?;
    let names: Vec<&str> = football.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha Turf", "Charlie Stadium"]);

    let cheap = service
        .discover(&VenueFilter::new(SportFilter::All, PriceFilter::Under500))
        .await?;
    assert_eq!(cheap.len(), 1);
    assert_eq!(cheap[0].name, "Bravo Courts");
    assert_eq!(cheap[0].amenities, vec!["Parking"]);

    Ok(())
}

#[tokio::test]
async fn test_json_catalog_other_sections() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_catalog(&dir, CATALOG_JSON).await?;
    let catalog = JsonCatalog::load(&path).await?;

    let bookings = catalog.fetch_bookings().await?;
    assert_eq!(BookingTab::Upcoming.select(&bookings).len(), 1);
    assert_eq!(BookingTab::Previous.select(&bookings)[0].venue_name, "Bravo Courts");

    let teams = catalog.fetch_teams().await?;
    assert_eq!(teams[0].unique_code, "AB12CD");
    assert_eq!(teams[0].members[0].name, "Sam Wilson");

    // no profile section in this file
    let err = catalog.fetch_profile().await.unwrap_err();
    assert!(matches!(err, PlaycesError::NotFoundError { .. }));

    Ok(())
}

#[tokio::test]
async fn test_invalid_catalogs_are_rejected() -> Result<()> {
    let dir = TempDir::new()?;

    let path = write_catalog(&dir, "{ not json").await?;
    let err = JsonCatalog::load(&path).await.err().expect("malformed JSON must fail");
    assert!(matches!(err, PlaycesError::SerializationError(_)));

    let missing = dir.path().join("missing.json");
    let err = JsonCatalog::load(&missing).await.err().expect("missing file must fail");
    assert!(matches!(err, PlaycesError::IoError(_)));

    let bad_rating = CATALOG_JSON.replace("\"rating\": 4.2", "\"rating\": 7.5");
    assert!(CatalogDocument::from_json_str(&bad_rating).is_err());

    let empty_tag = CATALOG_JSON.replace("[\"Tennis\"]", "[\"\"]");
    assert!(CatalogDocument::from_json_str(&empty_tag).is_err());

    Ok(())
}

#[tokio::test]
async fn test_catalog_open_selects_source() -> Result<()> {
    let sample = Catalog::open(&CatalogConfig::default()).await?;
    assert_eq!(sample.fetch_venues().await?.len(), 12);
    assert_eq!(sample.fetch_teams().await?.len(), 3);

    let dir = TempDir::new()?;
    let path = write_catalog(&dir, CATALOG_JSON).await?;
    let json = Catalog::open(&CatalogConfig {
        source: CatalogSource::Json,
        path: Some(path),
    })
    .await?;
    assert_eq!(json.fetch_venues().await?.len(), 3);

    let err = Catalog::open(&CatalogConfig {
        source: CatalogSource::Json,
        path: None,
    })
    .await
    .err()
    .expect("json source without a path must fail");
    assert!(matches!(err, PlaycesError::MissingConfigError { .. }));

    Ok(())
}

#[tokio::test]
async fn test_profile_update_is_validated() -> Result<()> {
    let catalog = SampleCatalog::new();
    let mut profile = catalog.fetch_profile().await?;
    assert_eq!(profile.name, "Shantanu Tapole");

    profile.name = "Shantanu T.".to_string();
    let updated = catalog.update_profile(profile.clone()).await?;
    assert_eq!(updated.name, "Shantanu T.");
    assert_eq!(catalog.fetch_profile().await?.name, "Shantanu T.");

    profile.email = "broken".to_string();
    assert!(catalog.update_profile(profile).await.is_err());
    assert_eq!(catalog.fetch_profile().await?.email, "shantanu.tapole@example.com");

    Ok(())
}
