use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for covidmap-cli
#[derive(Debug, Parser)]
#[command(
    name = "covidmap",
    version,
    about = "Inspect the country registry and statistics behind the COVID-19 Africa map"
)]
pub struct CliArgs {
    /// Path to a JSON dashboard config (map style, view, failure policy)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every country with its marker position
    Countries,

    /// Show one country's figures as they appear in its map popup
    Country {
        /// Country name (case and accents are ignored)
        name: String,
    },

    /// Show totals over all countries next to the sidebar figures
    Stats,

    /// Print the marker descriptors a map session would receive, as JSON
    Markers {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the effective dashboard configuration as JSON
    Config,
}
