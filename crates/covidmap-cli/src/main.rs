//! covidmap — inspect the COVID-19 Africa dashboard data from a terminal
//!
//! Usage examples
//! --------------
//!
//! - List countries with their marker coordinates
//!   $ covidmap countries
//!
//! - Show a country's popup figures (name lookup ignores case and accents)
//!   $ covidmap country "south africa"
//!
//! - Totals across the dataset, next to the sidebar's headline figures
//!   $ covidmap stats
//!
//! - Marker descriptors as handed to the map engine
//!   $ covidmap markers --pretty
//!
//! Configuration
//! -------------
//!
//! Settings come from the defaults, then `COVIDMAP_ACCESS_TOKEN` /
//! `COVIDMAP_STYLE`, or from the JSON file given with `--config`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use covidmap_core::format::{format_compact, format_thousands};
use covidmap_core::panel::SUMMARY_CARDS;
use covidmap_core::prelude::*;

fn load_config(path: Option<&str>) -> anyhow::Result<DashboardConfig> {
    match path {
        Some(path) => DashboardConfig::from_json_file(path)
            .with_context(|| format!("failed to read config from {path}")),
        None => DashboardConfig::from_env().context("invalid environment configuration"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = load_config(args.config.as_deref())?;
    log::info!("map style {}", config.map.style);

    let stats = dataset::stats();
    let registry = LocationRegistry::africa();

    match args.command {
        Commands::Countries => {
            for s in stats {
                match registry.coordinate(&s.country) {
                    Some(p) => println!("{:<14} {:>9.4} {:>9.4}", s.country, p.lng(), p.lat()),
                    None => println!("{:<14} (no position)", s.country),
                }
            }
        }

        Commands::Country { name } => {
            let found = registry
                .find(&name)
                .and_then(|(canonical, p)| {
                    stats
                        .iter()
                        .find(|s| s.country == canonical)
                        .map(|s| (s, p))
                });
            match found {
                Some((s, p)) => {
                    println!("Country: {}", s.country);
                    println!("Position: {:.4}, {:.4}", p.lng(), p.lat());
                    println!("Total Cases: {}", format_thousands(s.cases));
                    println!("Active Cases: {}", format_thousands(s.active));
                    println!("Recovered: {}", format_thousands(s.recovered));
                    println!("Deaths: {}", format_thousands(s.deaths));
                }
                None => {
                    eprintln!("No country found for: {name}");
                }
            }
        }

        Commands::Stats => {
            let totals = Totals::from_stats(stats);
            println!("Dataset totals ({} countries):", totals.countries);
            println!("  Cases: {} ({})", format_thousands(totals.cases), format_compact(totals.cases));
            println!("  Active: {} ({})", format_thousands(totals.active), format_compact(totals.active));
            println!(
                "  Recovered: {} ({})",
                format_thousands(totals.recovered),
                format_compact(totals.recovered)
            );
            println!("  Deaths: {} ({})", format_thousands(totals.deaths), format_compact(totals.deaths));
            println!("Sidebar figures:");
            for card in SUMMARY_CARDS.iter() {
                println!("  {}: {}", card.label, card.value);
            }
        }

        Commands::Markers { pretty } => {
            let markers = build_markers(stats, registry);
            let json = if pretty {
                serde_json::to_string_pretty(&markers)?
            } else {
                serde_json::to_string(&markers)?
            };
            println!("{json}");
        }

        Commands::Config => {
            let mut shown = config;
            if shown.access_token.as_deref().is_some_and(|t| !t.is_empty()) {
                shown.access_token = Some("<set>".to_string());
            }
            println!("{}", serde_json::to_string_pretty(&shown)?);
        }
    }

    Ok(())
}
