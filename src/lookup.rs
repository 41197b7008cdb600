//! Conditional fill of `Ft Shipment Error` from a data quality export.
//!
//! The lookup table is reduced once to a [`LookupIndex`] keyed by normalized
//! Bill of Lading. Every output row can be resolved against it, but only rows
//! whose current error reads "not identified" are overwritten.

use std::collections::{HashMap, hash_map::Entry};

use log::debug;

use crate::{
    config::LookupColumns,
    data::Value,
    error::PipelineError,
    record::RecordSet,
    schema::{Column, OutputTable},
    transform::string_ops::{normalize_header, normalize_key_value},
};

/// Gate value marking an error reason that may be replaced.
pub const UNRESOLVED_ERROR: &str = "not identified";

/// Finds the first header equal to any candidate after case/whitespace
/// normalization. Candidates are tried in order.
pub fn find_column<S: AsRef<str>>(headers: &[String], candidates: &[S]) -> Option<usize> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    candidates.iter().find_map(|candidate| {
        let wanted = normalize_header(candidate.as_ref());
        normalized.iter().position(|header| *header == wanted)
    })
}

/// Normalized Bill of Lading to tracking error, first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupIndex {
    entries: HashMap<String, Option<Value>>,
}

impl LookupIndex {
    pub fn build(lookup: &RecordSet, columns: &LookupColumns) -> Result<Self, PipelineError> {
        let headers = lookup.headers();
        let schema_error = || PipelineError::LookupSchema {
            available: headers.to_vec(),
        };
        let key_idx =
            find_column(headers, columns.bill_of_lading.as_slice()).ok_or_else(schema_error)?;
        let error_idx =
            find_column(headers, columns.tracking_error.as_slice()).ok_or_else(schema_error)?;
        debug!(
            "Lookup columns resolved: key '{}', error '{}'",
            headers[key_idx], headers[error_idx]
        );

        let mut entries = HashMap::new();
        let mut duplicates = 0usize;
        for row in lookup.rows() {
            let Some(key) = normalize_key_value(row.get(key_idx).and_then(Option::as_ref)) else {
                continue;
            };
            match entries.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(row.get(error_idx).cloned().flatten());
                }
                Entry::Occupied(_) => duplicates += 1,
            }
        }
        debug!(
            "Lookup index holds {} key(s); {} duplicate row(s) ignored",
            entries.len(),
            duplicates
        );
        Ok(Self { entries })
    }

    /// Raw tracking error for a Bill of Lading in any casing or padding.
    pub fn resolve(&self, bill_of_lading: Option<&Value>) -> Option<&Value> {
        let key = normalize_key_value(bill_of_lading)?;
        self.entries.get(&key)?.as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether an error reason is still open for the lookup fill.
pub fn is_unresolved(error: Option<&Value>) -> bool {
    error
        .and_then(Value::as_text)
        .is_some_and(|text| text.trim().to_lowercase() == UNRESOLVED_ERROR)
}

/// Main-input columns the fill reads, checked by exact name.
pub const REQUIRED_MAIN_COLUMNS: [Column; 2] = [Column::BILL_OF_LADING, Column::FT_SHIPMENT_ERROR];

/// Fails on the first required column the main input does not carry.
pub fn check_main_columns(main: &RecordSet) -> Result<(), PipelineError> {
    match REQUIRED_MAIN_COLUMNS
        .into_iter()
        .find(|column| !main.has_column(column.name()))
    {
        Some(missing) => Err(PipelineError::missing_field(missing.name())),
        None => Ok(()),
    }
}

/// Overwrites unresolved `Ft Shipment Error` cells with non-empty lookup
/// results and returns how many rows changed. With `keep_audit`, also
/// records the raw lookup result for every row.
pub fn fill(table: &mut OutputTable, index: &LookupIndex, keep_audit: bool) -> usize {
    let mut updated = 0usize;
    for row in &mut table.rows {
        if !is_unresolved(row.get(Column::FT_SHIPMENT_ERROR)) {
            continue;
        }
        let Some(found) = index.resolve(row.get(Column::BILL_OF_LADING)) else {
            continue;
        };
        if found.as_display().is_empty() {
            continue;
        }
        let replacement = found.clone();
        row.set(Column::FT_SHIPMENT_ERROR, Some(replacement));
        updated += 1;
    }

    if keep_audit {
        let audit = table
            .rows
            .iter()
            .map(|row| index.resolve(row.get(Column::BILL_OF_LADING)).cloned())
            .collect();
        table.audit = Some(audit);
    }
    updated
}
