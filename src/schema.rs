//! Template schema and the fixed-shape output table.
//!
//! The template is the ordered list of canonical columns every output row
//! carries. [`project`] is the single conversion point from a dynamic
//! [`RecordSet`] into an [`OutputTable`]; later stages address cells through
//! [`Column`] handles instead of looking names up per row.

use crate::{data::Value, record::RecordSet};

pub const TEMPLATE_LEN: usize = 47;

pub const TEMPLATE_COLUMNS: [&str; TEMPLATE_LEN] = [
    "Tenant Name",
    "Shipment Mode",
    "Agg Date",
    "Carrier Name",
    "Destination Country",
    "Drop-off Region",
    "Region Pickup",
    "Pickup Country",
    "Tracking Method",
    "Tracking Type",
    "Period Date",
    "Destination Country.1",
    "Final Status Reason",
    "P44 Shipment ID",
    "Pickup Country.1",
    "Tracked",
    "Active Equipment ID",
    "Attr1 Name",
    "Attr1 Value",
    "Attr2 Name",
    "Attr2 Value",
    "Attr3 Name",
    "Attr3 Value",
    "Attr4 Name",
    "Attr4 Value",
    "Attr5 Name",
    "Attr5 Value",
    "Bill of Lading",
    "Destination Name",
    "Dropoff Arrival Milestone",
    "Dropoff City State",
    "Dropoff Departure Milestone",
    "Ft Shipment Error",
    "Has Equipment ID (Yes / No)",
    "Historical Equipment ID",
    "IS_PING_COMPLETE",
    "P44 Carrier ID",
    "Pickup Arrival Milestone",
    "Pickup City State",
    "Pickup Departure Milestone",
    "Pickup State",
    "PICKUP_ARRIVAL_STATUS_30_MIN",
    "Pickup Name",
    "Tenant ID",
    "Tl Equipment ID Source",
    "TOTAL_STOPS",
    "TRACKING_METHOD_RCA",
];

/// Header of the optional column holding the raw lookup result.
pub const AUDIT_COLUMN: &str = "Tracking Error (from DQ)";

/// Position of a column within the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Column(usize);

impl Column {
    pub const AGG_DATE: Column = Column(2);
    pub const DESTINATION_COUNTRY: Column = Column(4);
    pub const PICKUP_COUNTRY: Column = Column(7);
    pub const TRACKING_METHOD: Column = Column(8);
    pub const TRACKING_TYPE: Column = Column(9);
    pub const PERIOD_DATE: Column = Column(10);
    pub const ATTR1_NAME: Column = Column(17);
    pub const BILL_OF_LADING: Column = Column(27);
    pub const FT_SHIPMENT_ERROR: Column = Column(32);

    pub fn from_name(name: &str) -> Option<Column> {
        TEMPLATE_COLUMNS
            .iter()
            .position(|candidate| *candidate == name)
            .map(Column)
    }

    pub(crate) const fn at(index: usize) -> Column {
        Column(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn name(self) -> &'static str {
        TEMPLATE_COLUMNS[self.0]
    }

    pub fn all() -> impl Iterator<Item = Column> {
        (0..TEMPLATE_LEN).map(Column)
    }
}

/// One output row; always exactly [`TEMPLATE_LEN`] cells.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    cells: Vec<Option<Value>>,
}

impl Default for OutputRow {
    fn default() -> Self {
        Self {
            cells: vec![None; TEMPLATE_LEN],
        }
    }
}

impl OutputRow {
    pub fn get(&self, column: Column) -> Option<&Value> {
        self.cells[column.index()].as_ref()
    }

    pub fn set(&mut self, column: Column, value: Option<Value>) {
        self.cells[column.index()] = value;
    }

    pub fn take(&mut self, column: Column) -> Option<Value> {
        self.cells[column.index()].take()
    }

    pub fn text(&self, column: Column) -> Option<&str> {
        self.get(column).and_then(Value::as_text)
    }

    pub fn cells(&self) -> &[Option<Value>] {
        &self.cells
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OutputTable {
    pub rows: Vec<OutputRow>,
    /// Raw lookup result per row, present only when the audit column was requested.
    pub audit: Option<Vec<Option<Value>>>,
}

impl OutputTable {
    pub fn headers(&self) -> Vec<String> {
        let mut headers: Vec<String> = TEMPLATE_COLUMNS.iter().map(|s| s.to_string()).collect();
        if self.audit.is_some() {
            headers.push(AUDIT_COLUMN.to_string());
        }
        headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of one row in header order, including the audit cell when present.
    pub fn row_cells(&self, row: usize) -> Vec<Option<&Value>> {
        let mut cells: Vec<Option<&Value>> =
            self.rows[row].cells.iter().map(Option::as_ref).collect();
        if let Some(audit) = &self.audit {
            cells.push(audit.get(row).and_then(Option::as_ref));
        }
        cells
    }
}

/// Copies every template column found by exact name in `main`; columns the
/// input lacks are null for every row.
pub fn project(main: &RecordSet) -> OutputTable {
    let sources: Vec<Option<usize>> = TEMPLATE_COLUMNS
        .iter()
        .map(|name| main.column_index(name))
        .collect();

    let rows = main
        .rows()
        .iter()
        .map(|input| {
            let cells = sources
                .iter()
                .map(|source| source.and_then(|idx| input.get(idx).cloned().flatten()))
                .collect();
            OutputRow { cells }
        })
        .collect();

    OutputTable { rows, audit: None }
}
