use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geospace
#[derive(Debug, Parser)]
#[command(
    name = "geospace",
    version,
    about = "Find cities near a place and measure distances between cities"
)]
pub struct CliArgs {
    /// Path to the input dataset (.json or .json.gz; default: bundled sample)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<PathBuf>,

    /// JSON config file (routing, lookup and search settings)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Skip the road distance lookup
    #[arg(long = "no-road", global = true)]
    pub no_road: bool,

    /// Always parse the dataset; neither read nor write the binary snapshot
    #[arg(long = "no-cache", global = true)]
    pub no_cache: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset
    Stats,

    /// List all countries as "CC: Country"
    Countries,

    /// Look up a single city ("Name" or "Name, Country")
    City {
        name: String,
    },

    /// Cities within a radius of a named city
    #[command(name = "nearby-name", alias = "nn")]
    NearbyName {
        /// Departure city ("Name" or "Name, Country")
        #[arg(long)]
        from: String,
        /// Radius in kilometers
        #[arg(long = "distance-to")]
        distance_to: String,
    },

    /// Cities within a radius of a coordinate
    #[command(name = "nearby-coord", alias = "nc")]
    NearbyCoord {
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
        /// Radius in kilometers
        #[arg(long = "distance-to")]
        distance_to: String,
    },

    /// Distance between two cities
    #[command(alias = "dist")]
    Distance {
        /// Departure city
        #[arg(long)]
        from: String,
        /// Destination city
        #[arg(long = "where")]
        to: String,
    },
}
