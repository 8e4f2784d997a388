use anyhow::Context;
use clap::Parser;
use playces::core::filter::VenueFilter;
use playces::utils::error::ErrorSeverity;
use playces::utils::{logger, validation::Validate};
use playces::{App, AppConfig, Catalog, CliConfig, Command, PlaycesError};
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path))?,
        None => AppConfig::default(),
    }
    .with_catalog_path(cli.catalog.clone());

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match run(&cli.command, config, &mut out).await {
        Ok(()) => {
            out.flush()?;
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }
    }
}

async fn run<W: Write>(command: &Command, config: AppConfig, out: &mut W) -> Result<(), PlaycesError> {
    let catalog = Catalog::open(&config.catalog).await?;
    let app = App::new(catalog, config);

    match command {
        Command::Venues {
            sport,
            price,
            format,
        } => {
            let defaults = app.config().default_filter()?;
            let filter = VenueFilter::new(
                sport.clone().unwrap_or(defaults.sport),
                price.unwrap_or(defaults.price),
            );
            let count = app.venues(&filter, *format, out).await?;
            tracing::info!("Listed {} venues", count);
        }
        Command::Search { query } => {
            app.search(query, out).await?;
        }
        Command::Venue { name } => app.venue(name, out).await?,
        Command::Bookings { tab } => {
            app.bookings(*tab, out).await?;
        }
        Command::Teams => {
            app.teams(out).await?;
        }
        Command::Quote { venue, hours, date } => {
            let today = chrono::Utc::now().date_naive();
            app.quote(venue, *hours, *date, today, out).await?;
        }
        Command::Profile => app.profile(out).await?,
        Command::Headline { ticks } => app.headline(*ticks, out).await?,
    }

    Ok(())
}
