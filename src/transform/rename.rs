use log::debug;

use crate::{
    record::RecordSet,
    schema::{Column, OutputTable},
};

/// Source columns whose values replace a template column when present.
pub const FIELD_RENAMES: &[(&str, Column)] = &[
    ("Shipment Tracking Type", Column::TRACKING_TYPE),
    ("Shipment Tracking Method", Column::TRACKING_METHOD),
];

/// Overwrites each rename target with the source column, nulls included.
/// A missing source column leaves the target as projected.
pub fn apply(main: &RecordSet, table: &mut OutputTable) {
    for (source, target) in FIELD_RENAMES {
        if !main.has_column(source) {
            continue;
        }
        debug!("Copying '{}' into '{}'", source, target.name());
        for (row, value) in table.rows.iter_mut().zip(main.column(source)) {
            row.set(*target, value.cloned());
        }
    }
}
