//! Dynamic tabular input.
//!
//! A [`RecordSet`] is what the I/O layer hands to the pipeline: an ordered
//! header list and rows of optional text cells. Nothing about its columns is
//! known at compile time; the schema projector is the only place that turns it
//! into the fixed output shape.

use std::collections::{HashMap, HashSet};

use crate::data::{Value, parse_cell};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    headers: Vec<String>,
    rows: Vec<Vec<Option<Value>>>,
    positions: HashMap<String, usize>,
}

impl RecordSet {
    /// Builds a record set, renaming repeated headers to `name.1`, `name.2`, ...
    pub fn new(headers: Vec<String>) -> Self {
        let headers = disambiguate_headers(&headers);
        let positions = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();
        Self {
            headers,
            rows: Vec::new(),
            positions,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<Value>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Appends a row of raw text fields; short rows are padded with nulls and
    /// extra trailing fields are dropped.
    pub fn push_raw<S: AsRef<str>>(&mut self, raw: &[S]) {
        let row = (0..self.headers.len())
            .map(|idx| raw.get(idx).and_then(|field| parse_cell(field.as_ref())))
            .collect();
        self.rows.push(row);
    }

    /// Iterates one column's cells in row order. Yields nothing if the column is absent.
    pub fn column<'a>(&'a self, name: &str) -> impl Iterator<Item = Option<&'a Value>> + 'a {
        let idx = self.column_index(name);
        self.rows
            .iter()
            .filter(move |_| idx.is_some())
            .map(move |row| idx.and_then(|i| row.get(i)).and_then(|cell| cell.as_ref()))
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&Value> {
        let idx = self.column_index(name)?;
        self.rows.get(row)?.get(idx)?.as_ref()
    }
}

/// Renames repeated header names the way spreadsheet readers do: the second
/// `X` becomes `X.1`, the third `X.2`, skipping any suffix that is already
/// taken by another header.
pub fn disambiguate_headers(headers: &[String]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut counters: HashMap<&str, usize> = HashMap::new();
    let originals: HashSet<&str> = headers.iter().map(String::as_str).collect();
    let mut result = Vec::with_capacity(headers.len());

    for name in headers {
        if taken.insert(name.clone()) {
            result.push(name.clone());
            continue;
        }
        let counter = counters.entry(name.as_str()).or_insert(0);
        let candidate = loop {
            *counter += 1;
            let candidate = format!("{name}.{counter}");
            if !taken.contains(&candidate) && !originals.contains(candidate.as_str()) {
                break candidate;
            }
        };
        taken.insert(candidate.clone());
        result.push(candidate);
    }
    result
}
