use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Date format every expense is stored in. The first seven characters of a
/// stored date are always its month key.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar month, rendered as `YYYY-MM`.
///
/// Used both as the identity of a budget row and as the bucket for monthly
/// expense aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Month containing the local date at the time of the call
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        // day 1 exists in every month
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Whether `date` falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    pub fn as_key(&self) -> String {
        self.0.format("%Y-%m").to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthKeyError(String);

impl fmt::Display for ParseMonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a month key of the form YYYY-MM", self.0)
    }
}

impl std::error::Error for ParseMonthKeyError {}

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMonthKeyError(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[4] != b'-' {
            return Err(err());
        }
        if !bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || b.is_ascii_digit())
        {
            return Err(err());
        }

        let year = s[..4].parse::<i32>().map_err(|_| err())?;
        let month = s[5..].parse::<u32>().map_err(|_| err())?;
        Self::new(year, month).ok_or_else(err)
    }
}

/// Parse a user-supplied `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}

/// Render a date the way it is persisted
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_display() {
        let key = MonthKey::new(2025, 12).unwrap();
        assert_eq!(key.to_string(), "2025-12");
        assert_eq!(MonthKey::new(2026, 3).unwrap().as_key(), "2026-03");
    }

    #[test]
    fn test_month_key_parse() {
        let key: MonthKey = "2025-12".parse().unwrap();
        assert_eq!(key.year(), 2025);
        assert_eq!(key.month(), 12);

        assert!("2025-13".parse::<MonthKey>().is_err());
        assert!("2025-1".parse::<MonthKey>().is_err());
        assert!("2025/12".parse::<MonthKey>().is_err());
        assert!("2025-12-05".parse::<MonthKey>().is_err());
        assert!("+025-12".parse::<MonthKey>().is_err());
    }

    #[test]
    fn test_from_date_truncates_to_month() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let key = MonthKey::from_date(date);
        assert_eq!(key, MonthKey::new(2025, 12).unwrap());
        assert!(key.contains(date));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
    }

    #[test]
    fn test_stored_date_prefix_is_month_key() {
        let date = parse_date("2025-02-07").unwrap();
        let stored = format_date(date);
        assert_eq!(&stored[..7], MonthKey::from_date(date).as_key());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("2025-02-30").is_none());
        assert!(parse_date("yesterday").is_none());
        assert_eq!(
            parse_date(" 2025-12-05 "),
            NaiveDate::from_ymd_opt(2025, 12, 5)
        );
    }
}
