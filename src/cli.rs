use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Reshape shipment exports into the canonical template and back-fill tracking errors",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clean a shipment export, optionally filling tracking errors from a data quality export
    Clean(CleanArgs),
    /// List the template columns and the static mapping tables
    Template(TemplateArgs),
}

#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Main shipment export (CSV/TSV, '-' for stdin)
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Data quality export used to fill 'Ft Shipment Error'
    #[arg(short = 'l', long = "lookup")]
    pub lookup: Option<PathBuf>,
    /// Output file (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
    /// YAML file with pipeline options
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    /// Add a 'Tracking Error (from DQ)' column with the raw lookup result
    #[arg(long = "keep-audit-column")]
    pub keep_audit_column: bool,
    /// CSV delimiter character for the main input (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// CSV delimiter character for the lookup input (defaults by extension)
    #[arg(long = "lookup-delimiter", value_parser = parse_delimiter)]
    pub lookup_delimiter: Option<u8>,
    /// Delimiter to use for output (defaults to the main input delimiter)
    #[arg(long = "output-delimiter", value_parser = parse_delimiter)]
    pub output_delimiter: Option<u8>,
    /// Character encoding of the main input (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// Character encoding of the lookup input (defaults to utf-8)
    #[arg(long = "lookup-encoding")]
    pub lookup_encoding: Option<String>,
    /// Character encoding for the output file/stdout (defaults to utf-8)
    #[arg(long = "output-encoding")]
    pub output_encoding: Option<String>,
    /// Print the first N output rows as a table on stderr
    #[arg(long)]
    pub preview: Option<usize>,
    /// Write run statistics as JSON to this path
    #[arg(long = "stats-json")]
    pub stats_json: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Also list the country code table and attribute slot map
    #[arg(long)]
    pub mappings: bool,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "|" | "pipe" => Ok(b'|'),
        ";" | "semicolon" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}
