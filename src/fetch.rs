//! Visual Crossing Timeline API client.
//!
//! The timeline endpoint returns one CSV row per day for a date range. The
//! request is made exactly once, with no retries; callers decide what a
//! failure means.

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use crate::{config::UnitSystem, forecast::ForecastDay};

const BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const ELEMENTS: &str = "datetime,temp,tempmin,tempmax,precip";
const BODY_PREVIEW_CHARS: usize = 400;

/// Source of daily forecasts for a date range, inclusive on both ends.
#[async_trait]
pub trait ForecastFetcher {
    async fn fetch_days(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<ForecastDay>>;
}

pub struct VisualCrossing {
    client: Client,
    base_url: String,
    api_key: String,
    location: String,
    unit: UnitSystem,
}

impl VisualCrossing {
    pub fn new(api_key: &str, location: &str, unit: UnitSystem) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(VisualCrossing {
            client,
            base_url: BASE_URL.to_string(),
            api_key: api_key.to_string(),
            location: location.to_string(),
            unit,
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    // The key travels as a query parameter, not in the path
    fn timeline_url(&self, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url,
            urlencoding::encode(&self.location),
            start,
            end
        )
    }
}

#[async_trait]
impl ForecastFetcher for VisualCrossing {
    async fn fetch_days(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<ForecastDay>> {
        let response = self
            .client
            .get(self.timeline_url(start, end))
            .query(&[
                ("unitGroup", self.unit.as_str()),
                ("include", "days"),
                ("elements", ELEMENTS),
                ("contentType", "csv"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            // reqwest errors print the request URL, which carries the key
            .map_err(|e| anyhow!("request to Visual Crossing failed: {}", e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| anyhow!("failed to read Visual Crossing response: {}", e.without_url()))?;

        if !status.is_success() {
            // Only the body preview goes into the error; the request URL
            // carries the API key and must stay out of it.
            let preview: String = body.chars().take(BODY_PREVIEW_CHARS).collect();
            bail!("Visual Crossing returned HTTP {}: {}", status, preview);
        }

        parse_timeline_csv(&body)
    }
}

#[derive(Debug, Deserialize)]
struct TimelineRow {
    datetime: NaiveDate,
    temp: f64,
    tempmin: f64,
    tempmax: f64,
    precip: Option<f64>,
}

fn parse_timeline_csv(body: &str) -> Result<Vec<ForecastDay>> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let mut days = Vec::new();

    for row in reader.deserialize() {
        let row: TimelineRow = row.context("unexpected row in Visual Crossing response")?;
        days.push(ForecastDay {
            date: row.datetime,
            tavg: row.temp,
            tmin: row.tempmin,
            tmax: row.tempmax,
            // Dry days come back with an empty precip cell
            prcp: row.precip.unwrap_or(0.0),
        });
    }

    Ok(days)
}

// -- Tests -------------------------------------------------------------------
