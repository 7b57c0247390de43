//! Week label codec.
//!
//! Weekly schedules are persisted under labels of the form
//! `"Week-<year>-<2-digit week>"`, e.g. `"Week-2024-05"`. This module
//! owns the encode/decode rules plus the week-to-month approximation the
//! analytics layer groups by.
//!
//! # Week numbering
//! Labels use ISO-8601 week numbering (`chrono::Datelike::iso_week`):
//! weeks start on Monday, week 01 contains the year's first Thursday.
//!
//! # Month approximation
//! `week_to_month` maps a week number to `ceil(week / 4.333)`, clamped to
//! 1..=12. This is deliberately not calendar-accurate; downstream
//! aggregation depends on this exact formula, so it must not be "fixed".

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Full month names, indexed by month - 1.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Error for malformed week labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelParseError {
    /// Not three hyphen-delimited fields with a `Week` prefix.
    #[error("malformed week label '{0}': expected \"Week-<year>-<week>\"")]
    Malformed(String),
    /// Year or week field is not numeric.
    #[error("non-numeric field in week label '{0}'")]
    NonNumeric(String),
}

/// Formats the week label for a date.
///
/// Uses the ISO week-based year, which can differ from the calendar year
/// around New Year (e.g. 2024-12-30 is ISO week 1 of 2025).
pub fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("Week-{}-{:02}", iso.year(), iso.week())
}

/// Parses a week label into its (year, week) pair.
pub fn parse_week_label(label: &str) -> Result<(i32, u32), LabelParseError> {
    let parts: Vec<&str> = label.split('-').collect();
    let [prefix, year, week] = parts.as_slice() else {
        return Err(LabelParseError::Malformed(label.to_string()));
    };
    if *prefix != "Week" {
        return Err(LabelParseError::Malformed(label.to_string()));
    }

    let year: i32 = year
        .parse()
        .map_err(|_| LabelParseError::NonNumeric(label.to_string()))?;
    let week: u32 = week
        .parse()
        .map_err(|_| LabelParseError::NonNumeric(label.to_string()))?;

    Ok((year, week))
}

/// Approximate calendar month for an ISO week number.
///
/// `ceil(week / 4.333)`, clamped to 1..=12. Weeks 1-4 map to January,
/// 5-8 to February, and so on; weeks 52-53 clamp to December.
pub fn week_to_month(week: u32) -> u32 {
    let month = (week as f64 / 4.333).ceil() as u32;
    month.clamp(1, 12)
}

/// Decodes a week label into its approximate (year, month) pair.
pub fn label_year_month(label: &str) -> Result<(i32, u32), LabelParseError> {
    let (year, week) = parse_week_label(label)?;
    Ok((year, week_to_month(week)))
}

/// Full name of a calendar month (1-12). Out-of-range months yield "Unknown".
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "Unknown",
    }
}

/// Label for the month after (year, month), e.g. "March 2024".
///
/// December wraps to January of the following year.
pub fn next_month_label(year: i32, month: u32) -> String {
    if month >= 12 {
        format!("January {}", year + 1)
    } else {
        format!("{} {}", month_name(month + 1), year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_label_format() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        assert_eq!(week_label(date), "Week-2024-05");
    }

    #[test]
    fn test_week_label_iso_year_boundary() {
        // 2024-12-30 falls in ISO week 1 of 2025.
        let date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        assert_eq!(week_label(date), "Week-2025-01");
    }

    #[test]
    fn test_parse_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let label = week_label(date);
        let (year, week) = parse_week_label(&label).unwrap();
        assert_eq!(year, 2024);
        assert_eq!(week, date.iso_week().week());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            parse_week_label("2024-05"),
            Err(LabelParseError::Malformed("2024-05".to_string()))
        );
        assert_eq!(
            parse_week_label("Month-2024-05"),
            Err(LabelParseError::Malformed("Month-2024-05".to_string()))
        );
        assert_eq!(
            parse_week_label("Week-2024-05-extra"),
            Err(LabelParseError::Malformed("Week-2024-05-extra".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(
            parse_week_label("Week-20x4-05"),
            Err(LabelParseError::NonNumeric("Week-20x4-05".to_string()))
        );
        assert_eq!(
            parse_week_label("Week-2024-ab"),
            Err(LabelParseError::NonNumeric("Week-2024-ab".to_string()))
        );
    }

    #[test]
    fn test_week_to_month_approximation() {
        assert_eq!(week_to_month(1), 1);
        assert_eq!(week_to_month(4), 1);
        assert_eq!(week_to_month(5), 2);
        assert_eq!(week_to_month(9), 3);
        // 13 / 4.333 = 3.0002..., so week 13 already spills into month 4.
        assert_eq!(week_to_month(13), 4);
        // Weeks 52-53 exceed 12 before clamping.
        assert_eq!(week_to_month(52), 12);
        assert_eq!(week_to_month(53), 12);
    }

    #[test]
    fn test_label_year_month() {
        assert_eq!(label_year_month("Week-2024-05"), Ok((2024, 2)));
        assert_eq!(label_year_month("Week-2024-53"), Ok((2024, 12)));
        assert!(label_year_month("garbage").is_err());
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
    }

    #[test]
    fn test_next_month_label() {
        assert_eq!(next_month_label(2024, 2), "March 2024");
        assert_eq!(next_month_label(2024, 12), "January 2025");
    }
}
