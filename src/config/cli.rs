use crate::app::OutputFormat;
use crate::core::bookings::BookingTab;
use crate::core::filter::{PriceFilter, SportFilter};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "playces")]
#[command(about = "Browse venues, bookings and teams from the PlayCes catalog")]
pub struct CliConfig {
    /// TOML configuration file
    #[arg(long, env = "PLAYCES_CONFIG")]
    pub config: Option<String>,

    /// JSON catalog file; replaces the built-in sample data
    #[arg(long)]
    pub catalog: Option<String>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List venues matching a sport and price bracket
    Venues {
        /// Sport name, or "All"
        #[arg(long)]
        sport: Option<SportFilter>,

        /// any, under-500, 500-1000, 1000-2000 or over-2000
        #[arg(long)]
        price: Option<PriceFilter>,

        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Search venues by name, address or sport
    Search { query: String },
    /// Show one venue in detail
    Venue { name: String },
    /// List bookings for a tab
    Bookings {
        #[arg(long, default_value = "upcoming")]
        tab: BookingTab,
    },
    /// List teams and their join codes
    Teams,
    /// Price a booking without confirming it
    Quote {
        venue: String,

        #[arg(long, default_value_t = 1)]
        hours: u32,

        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },
    /// Show the user profile
    Profile,
    /// Print the rotating welcome headline
    Headline {
        #[arg(long, default_value_t = 5)]
        ticks: usize,
    },
}
