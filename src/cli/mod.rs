//! Command line interface.

pub mod command;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use indicatif::ProgressBar;

use crate::config::UnitSystem;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch tomorrow's and the coming week's forecast
    Fetch(FetchArgs),
    /// Show the first lines of previously fetched forecast files
    Preview {
        /// Directory holding yarin.csv and week.csv
        #[arg(long, env = "CRIME_DATA_DIR", default_value = "crime_prediction_data")]
        outdir: PathBuf,
    },
}

#[derive(Args)]
pub struct FetchArgs {
    /// Output directory for the CSV files
    #[arg(long, env = "CRIME_DATA_DIR", default_value = "crime_prediction_data")]
    pub outdir: PathBuf,

    /// Location to forecast, as a Visual Crossing location string
    #[arg(long, env = "WX_LOCATION", default_value = "San Francisco,CA")]
    pub location: String,

    /// Unit group for temperatures and precipitation
    #[arg(long, env = "WX_UNIT", value_enum, default_value = "metric")]
    pub unit: UnitSystem,

    /// Threshold (in the active unit) at or above which a day counts as hot
    #[arg(long, env = "HOT_THRESHOLD_C", default_value_t = 30.0)]
    pub hot_threshold: f64,

    /// Timezone used to resolve "tomorrow"
    #[arg(long, env = "WX_TZ", default_value = "America/Los_Angeles")]
    pub tz: String,
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}
