use std::fs;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::{
    cli::CleanArgs,
    config::PipelineConfig,
    data::render_cell,
    io_utils,
    pipeline::{self, PipelineOutput},
    record::RecordSet,
    schema::OutputTable,
    table,
};

pub fn execute(args: &CleanArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if args.keep_audit_column {
        config.keep_audit_column = true;
    }

    let delimiter = io_utils::resolve_input_delimiter(&args.input, args.delimiter);
    let input_encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let output_path = args.output.as_deref();
    let output_delimiter =
        io_utils::resolve_output_delimiter(output_path, args.output_delimiter, delimiter);
    let output_encoding = io_utils::resolve_encoding(args.output_encoding.as_deref())?;
    info!(
        "Cleaning '{}' -> {} (delimiter '{}', output '{}')",
        args.input.display(),
        output_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".into()),
        crate::printable_delimiter(delimiter),
        crate::printable_delimiter(output_delimiter)
    );

    let main = io_utils::read_record_set_from_path(&args.input, delimiter, input_encoding)
        .with_context(|| format!("Failed to read main file {:?}", args.input))?;
    info!(
        "Read {} row(s) across {} column(s) from main file",
        main.len(),
        main.headers().len()
    );
    let lookup = load_lookup(args)?;

    let PipelineOutput { table: output, stats } =
        pipeline::process(&main, lookup.as_ref(), &config)?;

    let mut writer = io_utils::open_csv_writer(output_path, output_delimiter, output_encoding)?;
    io_utils::write_table(&mut writer, &output)?;

    info!("Rows processed: {}", output.len());
    info!("Unparseable Period Date values: {}", stats.unparseable_date_count);
    info!("Ft Shipment Error updates: {}", stats.updated_error_count);

    if let Some(rows) = args.preview {
        eprint!("{}", render_preview(&output, rows));
    }
    if let Some(path) = &args.stats_json {
        let json = serde_json::to_string_pretty(&stats).context("Serializing statistics")?;
        fs::write(path, json).with_context(|| format!("Writing statistics to {path:?}"))?;
    }
    Ok(())
}

/// Reads the lookup file if one was given. A file that cannot be read is
/// reported and skipped so the rest of the cleaning still runs.
fn load_lookup(args: &CleanArgs) -> Result<Option<RecordSet>> {
    let Some(path) = &args.lookup else {
        return Ok(None);
    };
    let delimiter = io_utils::resolve_input_delimiter(path, args.lookup_delimiter);
    let encoding = io_utils::resolve_encoding(args.lookup_encoding.as_deref())?;
    match io_utils::read_record_set_from_path(path, delimiter, encoding) {
        Ok(set) => {
            info!("Read {} row(s) from lookup file {:?}", set.len(), path);
            Ok(Some(set))
        }
        Err(err) => {
            warn!("Could not read lookup file {path:?}, continuing without it: {err:#}");
            Ok(None)
        }
    }
}

pub fn render_preview(output: &OutputTable, rows: usize) -> String {
    let body: Vec<Vec<String>> = (0..output.len().min(rows))
        .map(|idx| output.row_cells(idx).into_iter().map(render_cell).collect())
        .collect();
    table::render_table(&output.headers(), &body)
}
