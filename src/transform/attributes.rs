use crate::{
    data::Value,
    mappings::{AttributeSlot, attribute_slot},
    schema::{OutputRow, OutputTable},
};

/// A (name, value) attribute pair as read from one generic slot.
pub type AttributePair = (Option<Value>, Option<Value>);

/// Sorts five generic attribute pairs into their canonical buckets by name.
///
/// Every bucket starts as an empty-string pair. Pairs are visited in input
/// order, so when two inputs name the same bucket the later one wins.
/// Pairs with a missing or unrecognized name are dropped.
pub fn realign(pairs: [AttributePair; 5]) -> [AttributePair; 5] {
    let mut out: [AttributePair; 5] =
        std::array::from_fn(|_| (Some(Value::text("")), Some(Value::text(""))));
    for (name, value) in pairs {
        let Some(slot) = name.as_ref().and_then(Value::as_text).and_then(attribute_slot) else {
            continue;
        };
        out[slot.ordinal()] = (name, value);
    }
    out
}

pub fn realign_row(row: &mut OutputRow) {
    let pairs = AttributeSlot::ALL
        .map(|slot| (row.take(slot.name_column()), row.take(slot.value_column())));
    for (slot, (name, value)) in AttributeSlot::ALL.into_iter().zip(realign(pairs)) {
        row.set(slot.name_column(), name);
        row.set(slot.value_column(), value);
    }
}

pub fn apply(table: &mut OutputTable) {
    table.rows.iter_mut().for_each(realign_row);
}
