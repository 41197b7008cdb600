//! Listing of the template columns and static mapping tables.

use anyhow::Result;

use crate::{
    cli::TemplateArgs,
    mappings::{ATTRIBUTE_SLOTS, COUNTRY_CODES},
    schema::Column,
    table,
};

pub fn execute(args: &TemplateArgs) -> Result<()> {
    print!("{}", render(args.mappings));
    Ok(())
}

pub fn render(include_mappings: bool) -> String {
    let headers = vec!["#".to_string(), "column".to_string()];
    let rows: Vec<Vec<String>> = Column::all()
        .map(|column| vec![(column.index() + 1).to_string(), column.name().to_string()])
        .collect();
    let mut output = table::render_table(&headers, &rows);

    if include_mappings {
        output.push('\n');
        let rows: Vec<Vec<String>> = COUNTRY_CODES
            .iter()
            .map(|(code, name)| vec![code.to_string(), name.to_string()])
            .collect();
        output.push_str(&table::render_table(
            &["code".to_string(), "country".to_string()],
            &rows,
        ));

        output.push('\n');
        let rows: Vec<Vec<String>> = ATTRIBUTE_SLOTS
            .iter()
            .map(|(name, slot)| vec![name.to_string(), slot.label().to_string()])
            .collect();
        output.push_str(&table::render_table(
            &["attribute".to_string(), "slot".to_string()],
            &rows,
        ));
    }
    output
}
