use std::borrow::Cow;

use itertools::Itertools;

use crate::{
    data::Value,
    mappings::AttributeSlot,
    schema::OutputTable,
};

/// Separator used when rejoining attribute value lists.
pub const LIST_SEPARATOR: char = ';';

/// Uppercases, avoiding allocation when the input has no lowercase characters.
pub fn uppercase(input: &str) -> Cow<'_, str> {
    if input.chars().all(|ch| !ch.is_lowercase()) {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(input.to_uppercase())
    }
}

/// Join key form of a Bill of Lading: trimmed and uppercased. Blank keys are `None`.
pub fn normalize_key(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(uppercase(trimmed).into_owned())
    }
}

pub fn normalize_key_value(value: Option<&Value>) -> Option<String> {
    normalize_key(&value?.as_display())
}

/// Header comparison form: lowercase with internal whitespace runs collapsed.
pub fn normalize_header(name: &str) -> String {
    name.to_lowercase().split_whitespace().join(" ")
}

/// Unifies `,` and `;` separators, trims pieces, drops empty ones and repeats
/// (keeping first occurrences), then rejoins with [`LIST_SEPARATOR`].
pub fn dedupe_list(value: &str) -> Cow<'_, str> {
    let joined = value
        .split([',', ';'])
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .unique()
        .join(&LIST_SEPARATOR.to_string());
    if joined == value {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(joined)
    }
}

/// Dedupes text cells; nulls and non-text values pass through.
pub fn dedupe_cell(value: Option<Value>) -> Option<Value> {
    match value {
        Some(Value::Text(text)) => Some(Value::Text(dedupe_list(&text).into_owned())),
        other => other,
    }
}

/// Runs [`dedupe_cell`] over the five canonical attribute value columns.
pub fn apply(table: &mut OutputTable) {
    for row in &mut table.rows {
        for slot in AttributeSlot::ALL {
            let column = slot.value_column();
            let deduped = dedupe_cell(row.take(column));
            row.set(column, deduped);
        }
    }
}
