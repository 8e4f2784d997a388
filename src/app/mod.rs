// Application layer: wires providers, filters and rendering for the CLI.

pub mod render;

use crate::config::AppConfig;
use crate::core::bookings::{BookingQuote, BookingTab};
use crate::core::discovery::DiscoveryService;
use crate::core::filter::VenueFilter;
use crate::core::ticker::Headline;
use crate::domain::ports::{BookingProvider, ProfileProvider, TeamProvider, VenueProvider};
use crate::utils::error::{PlaycesError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::Json => f.write_str("json"),
            Self::Csv => f.write_str("csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PlaycesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(PlaycesError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: "Valid formats: table, json, csv".to_string(),
            }),
        }
    }
}

pub struct App<C: VenueProvider> {
    discovery: DiscoveryService<C>,
    config: AppConfig,
}

impl<C> App<C>
where
    C: VenueProvider + BookingProvider + TeamProvider + ProfileProvider,
{
    pub fn new(catalog: C, config: AppConfig) -> Self {
        Self {
            discovery: DiscoveryService::new(catalog),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn catalog(&self) -> &C {
        self.discovery.provider()
    }

    pub async fn venues<W: Write>(
        &self,
        filter: &VenueFilter,
        format: OutputFormat,
        out: &mut W,
    ) -> Result<usize> {
        let venues = self.discovery.discover(filter).await?;
        match format {
            OutputFormat::Table => {
                render::venues_table(out, &venues, self.config.preferences.distance_unit)?
            }
            OutputFormat::Json => render::venues_json(out, &venues)?,
            OutputFormat::Csv => render::venues_csv(out, &venues)?,
        }
        Ok(venues.len())
    }

    pub async fn search<W: Write>(&self, query: &str, out: &mut W) -> Result<usize> {
        let venues = self.discovery.search(query).await?;
        render::venues_table(out, &venues, self.config.preferences.distance_unit)?;
        Ok(venues.len())
    }

    pub async fn venue<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let venue = self.discovery.find(name).await?;
        render::venue_detail(out, &venue, self.config.preferences.distance_unit)
    }

    pub async fn bookings<W: Write>(&self, tab: BookingTab, out: &mut W) -> Result<usize> {
        let all = self.catalog().fetch_bookings().await?;
        let selected = tab.select(&all);
        tracing::debug!(%tab, "Showing {} of {} bookings", selected.len(), all.len());
        render::bookings(out, &selected)?;
        Ok(selected.len())
    }

    pub async fn teams<W: Write>(&self, out: &mut W) -> Result<usize> {
        let teams = self.catalog().fetch_teams().await?;
        render::teams(out, &teams)?;
        Ok(teams.len())
    }

    /// Quotes at 09:00 UTC on `date`, or on `today` when no date is given.
    pub async fn quote<W: Write>(
        &self,
        venue_name: &str,
        hours: u32,
        date: Option<NaiveDate>,
        today: NaiveDate,
        out: &mut W,
    ) -> Result<u64> {
        let venue = self.discovery.find(venue_name).await?;
        let day = date.unwrap_or(today);
        let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default();
        let when = DateTime::<Utc>::from_naive_utc_and_offset(day.and_time(start), Utc);

        let quote = BookingQuote::new(&venue, when, hours, today)?;
        writeln!(
            out,
            "{} × {} hour(s) = ₹{}",
            crate::core::format::hourly_rate(venue.hourly_rate),
            quote.hours(),
            quote.total_price()
        )?;
        writeln!(out, "{}", quote.confirmation_message())?;
        Ok(quote.total_price())
    }

    pub async fn profile<W: Write>(&self, out: &mut W) -> Result<()> {
        let profile = self.catalog().fetch_profile().await?;
        render::profile(out, &profile)?;
        render::preferences(out, &self.config.preferences)
    }

    /// Mounts the headline, prints `ticks` rotations, then unmounts it.
    pub async fn headline<W: Write>(&self, ticks: usize, out: &mut W) -> Result<()> {
        let mounted = Headline::default().mount(self.config.tick_period());
        let mut rx = mounted.subscribe();

        let first = mounted.current();
        writeln!(out, "It's your turn to {} ({:?})", first.title(), first.accent())?;
        for _ in 0..ticks {
            if rx.changed().await.is_err() {
                break;
            }
            let headline = *rx.borrow_and_update();
            writeln!(out, "It's your turn to {} ({:?})", headline.title(), headline.accent())?;
        }

        mounted.unmount();
        Ok(())
    }
}
