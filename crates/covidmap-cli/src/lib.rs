//! covidmap-cli
//! ============
//!
//! Command-line inspector for the `covidmap-core` dataset.
//!
//! This crate primarily provides a binary (`covidmap`). The library target
//! exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! covidmap --help
//! covidmap countries
//! covidmap country kenya
//! covidmap stats
//! covidmap markers --pretty
//! ```
//!
//! For programmatic access use the [`covidmap-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
