//! The cleaning pipeline: projection, renames, week anchors, country names,
//! attribute realignment, list dedup and the conditional lookup fill.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    config::PipelineConfig,
    error::PipelineError,
    lookup::{self, LookupIndex},
    record::RecordSet,
    schema::{self, OutputTable},
    transform::{attributes, country, rename, string_ops, week},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Rows whose `Period Date` was missing or could not be parsed.
    pub unparseable_date_count: usize,
    /// Rows whose `Ft Shipment Error` was replaced from the lookup.
    pub updated_error_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub table: OutputTable,
    pub stats: Statistics,
}

/// Runs every stage over `main`, filling from `lookup` when given.
///
/// Schema problems with either input abort the run; per-row problems are
/// counted in [`Statistics`] or passed through.
pub fn process(
    main: &RecordSet,
    lookup: Option<&RecordSet>,
    config: &PipelineConfig,
) -> Result<PipelineOutput, PipelineError> {
    let index = match lookup {
        Some(lookup) => {
            let index = LookupIndex::build(lookup, &config.lookup_columns)?;
            lookup::check_main_columns(main)?;
            Some(index)
        }
        None => None,
    };

    let mut table = schema::project(main);
    debug!(
        "Projected {} row(s) onto {} template column(s)",
        table.len(),
        schema::TEMPLATE_LEN
    );

    rename::apply(main, &mut table);
    let unparseable_date_count = week::apply(&mut table);
    country::apply(&mut table);
    attributes::apply(&mut table);
    string_ops::apply(&mut table);

    let updated_error_count = index
        .as_ref()
        .map_or(0, |index| lookup::fill(&mut table, index, config.keep_audit_column));

    let stats = Statistics {
        unparseable_date_count,
        updated_error_count,
    };
    info!(
        "Pipeline complete: {} row(s), {} unparseable period date(s), {} error(s) updated",
        table.len(),
        stats.unparseable_date_count,
        stats.updated_error_count
    );
    Ok(PipelineOutput { table, stats })
}
