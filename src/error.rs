use thiserror::Error;

/// Structural failures that abort a pipeline run before any output exists.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("Missing required column '{field}' in main dataset")]
    MissingRequiredField { field: String },

    #[error(
        "Required columns 'Bill of Lading' and 'Tracking Error' not found in lookup file. Have: [{}]",
        .available.join(", ")
    )]
    LookupSchema { available: Vec<String> },
}

impl PipelineError {
    pub fn missing_field(field: &str) -> Self {
        PipelineError::MissingRequiredField {
            field: field.to_string(),
        }
    }
}
