use material_color::{Argb, GenerateError, GenerateOptions, Platform, SpecVersion, Variant};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::CliError;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// Application configuration loaded from a YAML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub variant: Variant,

    #[serde(default)]
    pub dark: bool,

    /// -1 (reduced) to 1 (high)
    #[serde(default)]
    pub contrast: f64,

    #[serde(default)]
    pub platform: Platform,

    #[serde(default)]
    pub version: SpecVersion,

    /// Quantizer color budget
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,

    /// Number of seed candidates to report
    #[serde(default = "default_desired_seeds")]
    pub desired_seeds: usize,

    /// Seed used when an image has no usable color
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Drop greys and rare hues before scoring
    #[serde(default = "default_filter")]
    pub filter: bool,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_max_colors() -> usize {
    128
}

fn default_desired_seeds() -> usize {
    4
}

fn default_fallback() -> String {
    "#4285F4".to_string()
}

fn default_filter() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            dark: false,
            contrast: 0.0,
            platform: Platform::default(),
            version: SpecVersion::default(),
            max_colors: default_max_colors(),
            desired_seeds: default_desired_seeds(),
            fallback: default_fallback(),
            filter: default_filter(),
            format: OutputFormat::default(),
        }
    }
}

/// Serialization format for generated schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(CliError::UnknownFormat(s.to_string())),
        }
    }
}

/// Command-line values that take precedence over the config file.
///
/// `None` keeps the file's value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub variant: Option<Variant>,
    pub dark: Option<bool>,
    pub contrast: Option<f64>,
    pub platform: Option<Platform>,
    pub version: Option<SpecVersion>,
    pub format: Option<OutputFormat>,
}

impl AppConfig {
    /// The config file to read: the explicit path, else `$CONFIG_FILE`.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from))
    }

    /// Load configuration, falling back to defaults.
    ///
    /// A missing file is not an error; a malformed one is logged and
    /// ignored.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file parses as null, which means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        tracing::info!(
            variant = %config.variant,
            version = %config.version,
            dark = config.dark,
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(variant) = overrides.variant {
            self.variant = variant;
        }
        if let Some(dark) = overrides.dark {
            self.dark = dark;
        }
        if let Some(contrast) = overrides.contrast {
            self.contrast = contrast;
        }
        if let Some(platform) = overrides.platform {
            self.platform = platform;
        }
        if let Some(version) = overrides.version {
            self.version = version;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
    }

    /// Pipeline options for this configuration.
    pub fn generate_options(&self) -> Result<GenerateOptions, CliError> {
        let fallback: Argb = self
            .fallback
            .parse()
            .map_err(|e| CliError::Generate(GenerateError::InvalidHex(e)))?;
        Ok(GenerateOptions {
            dark: self.dark,
            contrast: self.contrast,
            variant: self.variant,
            platform: self.platform,
            version: self.version,
            max_colors: self.max_colors,
            desired_seeds: self.desired_seeds,
            fallback,
            filter: self.filter,
            cancellation: None,
        })
    }
}
