// src/domain/marketing.rs
//
// Value types returned by the marketing report queries.

use chrono::{Days, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Look-back window for trend reports, e.g. "30 days".
/// Unparseable input falls back to the 30 day default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastWindow {
    pub days: u32,
}

impl ForecastWindow {
    pub const DEFAULT_DAYS: u32 = 30;

    pub fn days(days: u32) -> Self {
        Self { days }
    }

    /// Accepts "14", "14 days" or "1 day"
    pub fn parse(input: &str) -> Self {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let pattern = PATTERN.get_or_init(|| {
            Regex::new(r"^\s*(\d+)\s*(?:days?)?\s*$").expect("window pattern is valid")
        });

        pattern
            .captures(input)
            .and_then(|caps| caps[1].parse::<u32>().ok())
            .map(Self::days)
            .unwrap_or_default()
    }

    /// First day inside the window that ends on `today`.
    /// Windows reaching past the calendar start at `NaiveDate::MIN`.
    pub fn start_date(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(u64::from(self.days)))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl Default for ForecastWindow {
    fn default() -> Self {
        Self::days(Self::DEFAULT_DAYS)
    }
}

/// Group booking as recorded in the marketing database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBookingDetails {
    pub group_size: u32,
    pub company_name: String,
    pub contact_name: String,
    pub contact_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window() {
        assert_eq!(ForecastWindow::parse("14 days").days, 14);
        assert_eq!(ForecastWindow::parse("1 day").days, 1);
        assert_eq!(ForecastWindow::parse("7").days, 7);
    }

    #[test]
    fn test_invalid_window_defaults() {
        assert_eq!(ForecastWindow::parse("next week").days, 30);
        assert_eq!(ForecastWindow::parse("").days, 30);
    }

    #[test]
    fn test_start_date() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        assert_eq!(
            ForecastWindow::days(14).start_date(today),
            NaiveDate::from_ymd_opt(2025, 3, 27).unwrap()
        );
    }

    #[test]
    fn test_oversized_window_starts_at_calendar_start() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let window = ForecastWindow::parse("1000000000 days");

        assert_eq!(window.days, 1_000_000_000);
        assert_eq!(window.start_date(today), NaiveDate::MIN);
        assert_eq!(
            ForecastWindow::days(u32::MAX).start_date(today),
            NaiveDate::MIN
        );
    }
}
