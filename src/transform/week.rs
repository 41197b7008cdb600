use chrono::{Datelike, Days, NaiveDate};

use crate::{
    data::{Value, parse_calendar_date},
    schema::{Column, OutputRow, OutputTable},
};

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Derives the week anchor for a raw period value; `None` when it does not parse.
pub fn anchor(period: Option<&Value>) -> Option<NaiveDate> {
    let date = match period? {
        Value::Text(raw) => parse_calendar_date(raw),
        Value::Date(date) => Some(*date),
    };
    date.map(week_start)
}

/// Sets `Agg Date` from `Period Date`, returning false when the period is
/// missing or unparseable.
pub fn anchor_row(row: &mut OutputRow) -> bool {
    let anchored = anchor(row.get(Column::PERIOD_DATE));
    let parsed = anchored.is_some();
    row.set(Column::AGG_DATE, anchored.map(Value::Date));
    parsed
}

/// Applies [`anchor_row`] to every row and returns the unparseable count.
pub fn apply(table: &mut OutputTable) -> usize {
    table
        .rows
        .iter_mut()
        .map(anchor_row)
        .filter(|parsed| !parsed)
        .count()
}
