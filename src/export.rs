//! CSV output for the two forecast files.
//!
//! Both files carry the same header whether or not any data rows follow, so
//! downstream consumers always find a well-formed file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::forecast::ForecastDay;

pub const HEADER: [&str; 9] = [
    "date",
    "tavg",
    "tmin",
    "tmax",
    "prcp",
    "temp_range",
    "day",
    "is_rainy",
    "is_hot",
];

/// Writes forecast days with their derived columns, overwriting `path`.
pub fn write_days(path: &Path, days: &[ForecastDay], hot_threshold: f64) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create `{}`", path.display()))?;

    wtr.write_record(HEADER)?;

    for day in days {
        wtr.write_record([
            day.date.format("%Y-%m-%d").to_string(),
            format_number(day.tavg),
            format_number(day.tmin),
            format_number(day.tmax),
            format_number(day.prcp),
            format_number(day.temp_range()),
            day.weekday().to_string(),
            day.is_rainy().to_string(),
            day.is_hot(hot_threshold).to_string(),
        ])?;
    }

    wtr.flush()?;

    Ok(())
}

/// Writes the header row and nothing else.
pub fn write_placeholder(path: &Path) -> Result<()> {
    write_days(path, &[], 0.0)
}

// Whole numbers print without a decimal point
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use std::fs;

    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn should_write_placeholder_with_header_only() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("yarin.csv");

        write_placeholder(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "date,tavg,tmin,tmax,prcp,temp_range,day,is_rainy,is_hot\n"
        );
    }

    #[test]
    fn should_write_derived_columns() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("week.csv");

        let days = vec![ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            tavg: 18.0,
            tmin: 12.0,
            tmax: 24.0,
            prcp: 0.0,
        }];
        write_days(&path, &days, 30.0).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("date,tavg,tmin,tmax,prcp,temp_range,day,is_rainy,is_hot")
        );
        assert_eq!(lines.next(), Some("2024-05-01,18,12,24,0,12,Wed,false,false"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn should_overwrite_previous_content() {
        let tmp_dir = TempDir::new().unwrap();
        let path = tmp_dir.path().join("week.csv");

        let days = vec![ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            tavg: 18.5,
            tmin: 12.0,
            tmax: 31.0,
            prcp: 2.4,
        }];
        write_days(&path, &days, 30.0).unwrap();
        write_placeholder(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn should_format_fractional_values() {
        assert_eq!(format_number(18.0), "18");
        assert_eq!(format_number(18.5), "18.5");
        assert_eq!(format_number(-0.4), "-0.4");
    }
}
