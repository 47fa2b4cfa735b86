use std::path::PathBuf;

use material_color::dynamic::UnknownOption;
use material_color::GenerateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Generation failed: {0}")]
    Generate(#[from] GenerateError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(#[from] png::DecodingError),

    #[error("Unsupported PNG layout: {0:?}")]
    UnsupportedPng(png::ColorType),

    #[error("{0}")]
    UnknownOption(#[from] UnknownOption),

    #[error("Unknown output format '{0}' (expected json or yaml)")]
    UnknownFormat(String),

    #[error("No source given (use --hex, --image or --raw)")]
    NoSource,

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML encode error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Machine-readable tag, matching the core library's tags where the
    /// error comes from the pipeline.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Generate(e) => e.kind(),
            CliError::Read { .. } | CliError::Io(_) => "io",
            CliError::PngDecode(_) | CliError::UnsupportedPng(_) => "image",
            CliError::UnknownOption(_)
            | CliError::UnknownFormat(_)
            | CliError::NoSource => "usage",
            CliError::Json(_) | CliError::Yaml(_) => "encode",
        }
    }
}
