use std::fmt;

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Display format for derived dates in the output.
pub const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// A single non-null cell. Inputs only ever produce `Text`; `Date` is
/// introduced by the week-anchor stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Value {
    Text(String),
    Date(NaiveDate),
}

impl Value {
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            Value::Date(_) => None,
        }
    }

    pub fn as_display(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Date(d) => d.format(DATE_OUTPUT_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_display())
    }
}

/// Raw input fields are either text or missing; an empty field counts as missing.
pub fn parse_cell(raw: &str) -> Option<Value> {
    if raw.is_empty() {
        None
    } else {
        Some(Value::Text(raw.to_string()))
    }
}

pub fn render_cell(value: Option<&Value>) -> String {
    value.map(Value::as_display).unwrap_or_default()
}

/// Numeric day/month orders are tried month-first; day-first only wins when
/// the month-first reading is not a valid date.
pub fn parse_naive_date(value: &str) -> Result<NaiveDate> {
    const DATE_FORMATS: &[&str] = &[
        "%Y-%m-%d",
        "%m/%d/%Y",
        "%m-%d-%Y",
        "%m.%d.%Y",
        "%Y/%m/%d",
        "%d/%m/%Y",
        "%d-%m-%Y",
        "%d.%m.%Y",
        "%d %b %Y",
        "%b %d %Y",
        "%B %d, %Y",
    ];
    for fmt in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, fmt) {
            return Ok(parsed);
        }
    }
    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(parsed) = NaiveDate::parse_from_str(value, "%Y%m%d") {
            return Ok(parsed);
        }
    }
    Err(anyhow!("Failed to parse '{value}' as date"))
}

pub fn parse_naive_datetime(value: &str) -> Result<NaiveDateTime> {
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%m/%d/%Y %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%m/%d/%Y %H:%M",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(parsed);
        }
    }
    Err(anyhow!("Failed to parse '{value}' as datetime"))
}

/// Parses a free-text date or date-time, discarding any time of day. Offset
/// timestamps keep the calendar date they were written in.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    parse_naive_date(trimmed)
        .or_else(|_| parse_naive_datetime(trimmed).map(|dt| dt.date()))
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cell_treats_empty_as_missing() {
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell(" "), Some(Value::text(" ")));
        assert_eq!(parse_cell("PO"), Some(Value::text("PO")));
    }

    #[test]
    fn parse_calendar_date_supports_multiple_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 14).unwrap();
        for raw in [
            "2024-03-14",
            " 2024-03-14 ",
            "03/14/2024",
            "2024/03/14",
            "14-03-2024",
            "14.03.2024",
            "14 Mar 2024",
            "March 14, 2024",
            "2024-03-14 17:45:00",
            "2024-03-14T17:45",
            "2024-03-14 17:45:00.250",
            "03-14-2024",
            "03.14.2024",
            "20240314",
            "2024-03-14T10:00:00Z",
            "2024-03-14T23:30:00-05:00",
        ] {
            assert_eq!(parse_calendar_date(raw), Some(expected), "input {raw:?}");
        }
    }

    #[test]
    fn ambiguous_numeric_dates_read_month_first() {
        let march_fourth = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        for raw in ["03-04-2024", "03.04.2024", "3/4/2024", "03/04/2024"] {
            assert_eq!(parse_calendar_date(raw), Some(march_fourth), "input {raw:?}");
        }
    }

    #[test]
    fn parse_calendar_date_rejects_garbage() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("next tuesday"), None);
        assert_eq!(parse_calendar_date("2024-02-30"), None);
        assert_eq!(parse_calendar_date("20241399"), None);
        assert_eq!(parse_calendar_date("2024031"), None);
    }

    #[test]
    fn date_values_render_as_iso_dates() {
        let value = Value::Date(NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(value.as_display(), "2024-03-11");
        assert_eq!(value.as_text(), None);
        assert_eq!(render_cell(None), "");
    }
}
