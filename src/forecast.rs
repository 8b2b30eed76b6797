//! Daily forecast records and their derived columns.

use chrono::{Datelike, NaiveDate, Weekday};

/// One day of forecast statistics, in the unit group the fetch was made with.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub tavg: f64,
    pub tmin: f64,
    pub tmax: f64,
    pub prcp: f64,
}

impl ForecastDay {
    pub fn temp_range(&self) -> f64 {
        self.tmax - self.tmin
    }

    pub fn is_rainy(&self) -> bool {
        self.prcp > 0.0
    }

    /// A day is hot when its maximum reaches the threshold, inclusive.
    pub fn is_hot(&self, hot_threshold: f64) -> bool {
        self.tmax >= hot_threshold
    }

    pub fn weekday(&self) -> &'static str {
        match self.date.weekday() {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn day_fixture() -> ForecastDay {
        ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            tavg: 18.0,
            tmin: 12.0,
            tmax: 24.0,
            prcp: 0.0,
        }
    }

    #[test]
    fn should_derive_temp_range() {
        assert_eq!(day_fixture().temp_range(), 12.0);
    }

    #[test]
    fn should_not_be_rainy_at_zero_precipitation() {
        let mut day = day_fixture();
        assert!(!day.is_rainy());

        day.prcp = 0.1;
        assert!(day.is_rainy());
    }

    #[test]
    fn should_be_hot_at_threshold() {
        let day = day_fixture();
        assert!(day.is_hot(24.0));
        assert!(!day.is_hot(24.1));
    }

    #[test]
    fn should_name_weekday() {
        // 2024-05-01 was a Wednesday
        assert_eq!(day_fixture().weekday(), "Wed");
    }
}
