//! Run configuration, assembled once at startup from command line arguments
//! and their environment fallbacks.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::cli::FetchArgs;

pub const YARIN_FILE: &str = "yarin.csv";
pub const WEEK_FILE: &str = "week.csv";

/// Visual Crossing unit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitSystem {
    /// Celsius and millimetres
    Metric,
    /// Fahrenheit and inches
    Us,
    Uk,
    Base,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Us => "us",
            UnitSystem::Uk => "uk",
            UnitSystem::Base => "base",
        }
    }
}

pub struct Config {
    pub output_dir: PathBuf,
    pub location: String,
    pub unit: UnitSystem,
    pub hot_threshold: f64,
    pub timezone: String,
    /// Visual Crossing API key. `None` triggers placeholder mode. The value
    /// must never appear in console output or error text.
    pub api_key: Option<String>,
}

impl Config {
    pub fn new(args: FetchArgs, api_key: Option<String>) -> Self {
        Config {
            output_dir: args.outdir,
            location: args.location,
            unit: args.unit,
            hot_threshold: args.hot_threshold,
            timezone: args.tz,
            // An empty key behaves like no key at all
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    pub fn yarin_path(&self) -> PathBuf {
        self.output_dir.join(YARIN_FILE)
    }

    pub fn week_path(&self) -> PathBuf {
        self.output_dir.join(WEEK_FILE)
    }
}

// -- Tests -------------------------------------------------------------------
