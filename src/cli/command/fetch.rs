//! Fetch tomorrow's and the coming week's forecast and write the CSV outputs.
//!
//! Without an API key the command degrades to placeholder mode: both files
//! are written with the header row only and the run still succeeds, so
//! downstream consumers always find well-formed CSVs.

use std::fs;

use anyhow::{anyhow, Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::{
    cli::{command::preview::preview_file, create_spinner},
    config::Config,
    export,
    fetch::{ForecastFetcher, VisualCrossing},
};

pub async fn fetch(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory `{}`",
            config.output_dir.display()
        )
    })?;

    let Some(api_key) = config.api_key.as_deref() else {
        return write_placeholders(config);
    };

    let fetcher = VisualCrossing::new(api_key, &config.location, config.unit)?;
    fetch_with(&fetcher, config).await
}

/// Runs the fetch pipeline against any forecast source.
pub async fn fetch_with<F: ForecastFetcher>(fetcher: &F, config: &Config) -> Result<()> {
    let tomorrow = local_tomorrow(&config.timezone)?;
    let week_end = tomorrow + Duration::days(6);

    let bar = create_spinner("Fetching tomorrow's forecast...".to_string());
    let day = fetcher.fetch_days(tomorrow, tomorrow).await?;
    export::write_days(&config.yarin_path(), &day, config.hot_threshold)?;
    bar.finish_with_message(format!("Saved `{}`", config.yarin_path().display()));

    let bar = create_spinner("Fetching the week's forecast...".to_string());
    let week = fetcher.fetch_days(tomorrow, week_end).await?;
    export::write_days(&config.week_path(), &week, config.hot_threshold)?;
    bar.finish_with_message(format!("Saved `{}`", config.week_path().display()));

    preview_file(&config.yarin_path());
    preview_file(&config.week_path());

    Ok(())
}

// Tomorrow as seen from the configured timezone, not the machine's
fn local_tomorrow(timezone: &str) -> Result<NaiveDate> {
    let tz: Tz = timezone
        .parse()
        .map_err(|e| anyhow!("unknown timezone `{}`: {}", timezone, e))?;

    Ok(Utc::now().with_timezone(&tz).date_naive() + Duration::days(1))
}

fn write_placeholders(config: &Config) -> Result<()> {
    export::write_placeholder(&config.yarin_path())?;
    export::write_placeholder(&config.week_path())?;

    eprintln!(
        "Warning: VISUAL_CROSSING_API_KEY is not set; wrote header-only placeholders to `{}`",
        config.output_dir.display()
    );

    Ok(())
}

// -- Tests -------------------------------------------------------------------
