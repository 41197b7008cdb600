use crate::{
    data::Value,
    mappings::country_name,
    schema::{Column, OutputTable},
};

pub const COUNTRY_COLUMNS: &[Column] = &[Column::DESTINATION_COUNTRY, Column::PICKUP_COUNTRY];

/// Replaces a known two-letter code with its full name; anything else passes through.
pub fn map_country(value: Option<Value>) -> Option<Value> {
    match value {
        Some(Value::Text(code)) => match country_name(&code) {
            Some(name) => Some(Value::text(name)),
            None => Some(Value::Text(code)),
        },
        other => other,
    }
}

pub fn apply(table: &mut OutputTable) {
    for row in &mut table.rows {
        for column in COUNTRY_COLUMNS {
            let mapped = map_country(row.take(*column));
            row.set(*column, mapped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OutputRow;

    #[test]
    fn known_codes_expand_and_others_pass_through() {
        assert_eq!(map_country(Some(Value::text("NL"))), Some(Value::text("Netherlands")));
        assert_eq!(map_country(Some(Value::text("nl"))), Some(Value::text("nl")));
        assert_eq!(map_country(Some(Value::text("Germany"))), Some(Value::text("Germany")));
        assert_eq!(map_country(None), None);
    }

    #[test]
    fn mapping_twice_is_idempotent() {
        let once = map_country(Some(Value::text("GB")));
        assert_eq!(map_country(once.clone()), once);
    }

    #[test]
    fn apply_maps_both_country_columns_independently() {
        let mut row = OutputRow::default();
        row.set(Column::DESTINATION_COUNTRY, Some(Value::text("US")));
        row.set(Column::PICKUP_COUNTRY, Some(Value::text("XX")));
        let mut table = OutputTable::default();
        table.rows.push(row);

        apply(&mut table);
        assert_eq!(
            table.rows[0].text(Column::DESTINATION_COUNTRY),
            Some("United States of America")
        );
        assert_eq!(table.rows[0].text(Column::PICKUP_COUNTRY), Some("XX"));
    }
}
