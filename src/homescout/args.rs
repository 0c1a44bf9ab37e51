use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "homescout")]
#[command(about = "Browse, filter, and favorite real-estate listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the session data directory
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse listings through the saved filters
    #[command(alias = "ls")]
    Browse {
        /// Search term (matches title, address, city, state, zip)
        #[arg(required = false)]
        query: Option<String>,

        /// Minimum price (saved to the filter state)
        #[arg(long, value_name = "PRICE")]
        price_min: Option<String>,

        /// Maximum price (saved to the filter state)
        #[arg(long, value_name = "PRICE")]
        price_max: Option<String>,

        /// Comma-separated property categories (e.g. condo,townhouse)
        #[arg(long = "type", value_name = "TYPES")]
        property_type: Option<String>,

        /// Minimum bedrooms
        #[arg(long, value_name = "N")]
        beds: Option<String>,

        /// Minimum bathrooms
        #[arg(long, value_name = "N")]
        baths: Option<String>,

        /// Minimum square footage
        #[arg(long, value_name = "SQFT")]
        sqft_min: Option<String>,

        /// Location term (city, state, zip, or address)
        #[arg(long, value_name = "TERM")]
        location: Option<String>,

        /// Sort order: newest, price-low, price-high, sqft-high, sqft-low
        #[arg(long, value_name = "ORDER")]
        sort: Option<String>,
    },

    /// Search listings (dedicated command)
    Search { term: String },

    /// Show the full detail of one listing
    #[command(alias = "v")]
    View {
        /// Listing id
        id: u64,
    },

    /// Toggle a listing in the favorites set
    Fav {
        /// Listing id
        id: u64,
    },

    /// List favorited listings
    Favs,

    /// Show or change the saved filters
    Filters {
        #[command(subcommand)]
        action: Option<FiltersAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum FiltersAction {
    /// Show the active filters
    Show,

    /// Set filters as key=value pairs (e.g. price-max=500000 beds=2 sort=price-low)
    Set {
        #[arg(required = true, num_args = 1..)]
        assignments: Vec<String>,
    },

    /// Clear all filters back to defaults
    Reset,
}
