//! Target-date handling. The API wants `YYYYMMDD`; the date control speaks `YYYY-MM-DD`.

use std::fmt;

use time::{macros::format_description, Date, Duration, OffsetDateTime};

use crate::error::DateError;

/// Calendar day a ranking is requested for, held in 8-digit wire form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetDate(String);

impl TargetDate {
    /// Accepts exactly eight ASCII digits.
    pub fn parse(raw: &str) -> Result<Self, DateError> {
        let trimmed = raw.trim();
        if trimmed.len() != 8 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(raw.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Normalizes a date-input value (`2024-03-15`) into wire form (`20240315`).
    pub fn from_input(value: &str) -> Result<Self, DateError> {
        let compact: String = value.trim().chars().filter(|c| *c != '-').collect();
        Self::parse(&compact).map_err(|_| DateError::InvalidFormat(value.to_string()))
    }

    pub fn from_date(date: Date) -> Self {
        let compact = date
            .format(format_description!("[year][month][day]"))
            .unwrap_or_default();
        Self(compact)
    }

    pub fn day_before(today: Date) -> Self {
        let previous = today.checked_sub(Duration::days(1)).unwrap_or(today);
        Self::from_date(previous)
    }

    /// The day before "today" in the local offset, falling back to UTC when
    /// the platform cannot report one.
    pub fn yesterday() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::day_before(now.date())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `YYYY-MM-DD` rendering for a native date input.
    pub fn input_value(&self) -> String {
        match (self.0.get(..4), self.0.get(4..6), self.0.get(6..8)) {
            (Some(year), Some(month), Some(day)) => format!("{year}-{month}-{day}"),
            _ => self.0.clone(),
        }
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn input_value_is_stripped_of_separators() {
        let target = TargetDate::from_input("2024-03-15").unwrap();
        assert_eq!(target.as_str(), "20240315");
    }

    #[test]
    fn input_value_round_trips_for_the_date_control() {
        let target = TargetDate::parse("20240315").unwrap();
        assert_eq!(target.input_value(), "2024-03-15");
    }

    #[test]
    fn rejects_anything_but_eight_digits() {
        assert!(TargetDate::parse("2024031").is_err());
        assert!(TargetDate::parse("2024-03-15").is_err());
        assert!(TargetDate::parse("2024031a").is_err());
        assert!(TargetDate::from_input("").is_err());
    }

    #[test]
    fn no_calendar_validation_beyond_digits() {
        // Out-of-range days are the API's problem, not ours.
        assert!(TargetDate::from_input("2024-02-31").is_ok());
    }

    #[test]
    fn day_before_crosses_month_and_year_boundaries() {
        assert_eq!(TargetDate::day_before(date!(2024 - 03 - 01)).as_str(), "20240229");
        assert_eq!(TargetDate::day_before(date!(2025 - 01 - 01)).as_str(), "20241231");
    }

    #[test]
    fn yesterday_is_well_formed() {
        let target = TargetDate::yesterday();
        assert!(TargetDate::parse(target.as_str()).is_ok());
    }
}
