//! Static lookup tables shared by the transform stages.

use std::{collections::HashMap, sync::OnceLock};

use crate::schema::Column;

pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("AD", "Andorra"),
    ("BA", "Bosnia and Herzegovina"),
    ("BE", "Belgium"),
    ("BG", "Bulgaria"),
    ("CY", "Cyprus"),
    ("DE", "Germany"),
    ("EE", "Estonia"),
    ("ES", "Spain"),
    ("FR", "France"),
    ("GB", "United Kingdom of Great Britain and Northern Ireland"),
    ("GR", "Greece"),
    ("HR", "Croatia"),
    ("IT", "Italy"),
    ("LT", "Lithuania"),
    ("NL", "Netherlands"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("RO", "Romania"),
    ("RS", "Serbia"),
    ("SI", "Slovenia"),
    ("US", "United States of America"),
];

/// Canonical attribute bucket, `Attr1` through `Attr5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeSlot {
    Attr1,
    Attr2,
    Attr3,
    Attr4,
    Attr5,
}

impl AttributeSlot {
    pub const ALL: [AttributeSlot; 5] = [
        AttributeSlot::Attr1,
        AttributeSlot::Attr2,
        AttributeSlot::Attr3,
        AttributeSlot::Attr4,
        AttributeSlot::Attr5,
    ];

    pub fn ordinal(self) -> usize {
        match self {
            AttributeSlot::Attr1 => 0,
            AttributeSlot::Attr2 => 1,
            AttributeSlot::Attr3 => 2,
            AttributeSlot::Attr4 => 3,
            AttributeSlot::Attr5 => 4,
        }
    }

    pub fn name_column(self) -> Column {
        Column::at(Column::ATTR1_NAME.index() + self.ordinal() * 2)
    }

    pub fn value_column(self) -> Column {
        Column::at(Column::ATTR1_NAME.index() + self.ordinal() * 2 + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            AttributeSlot::Attr1 => "Attr1",
            AttributeSlot::Attr2 => "Attr2",
            AttributeSlot::Attr3 => "Attr3",
            AttributeSlot::Attr4 => "Attr4",
            AttributeSlot::Attr5 => "Attr5",
        }
    }
}

pub const ATTRIBUTE_SLOTS: &[(&str, AttributeSlot)] = &[
    ("Business Unit", AttributeSlot::Attr1),
    ("PO", AttributeSlot::Attr2),
    ("TMSTOPID", AttributeSlot::Attr3),
    ("Order Type", AttributeSlot::Attr4),
    ("GTMSLOAT", AttributeSlot::Attr5),
];

static COUNTRY_INDEX: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
static SLOT_INDEX: OnceLock<HashMap<&'static str, AttributeSlot>> = OnceLock::new();

/// Full country name for an exact, case-sensitive two-letter code.
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRY_INDEX
        .get_or_init(|| COUNTRY_CODES.iter().copied().collect())
        .get(code)
        .copied()
}

/// Canonical slot for an attribute name; `None` for unrecognized names.
pub fn attribute_slot(name: &str) -> Option<AttributeSlot> {
    SLOT_INDEX
        .get_or_init(|| ATTRIBUTE_SLOTS.iter().copied().collect())
        .get(name)
        .copied()
}
