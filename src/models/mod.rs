pub mod config;
pub mod output;

pub use config::{AppConfig, ConfigOverrides, OutputFormat, CONFIG_FILE_ENV};
pub use output::{PaletteDoc, SchemeDocument, SchemeParamsDoc};
