use crate::error::AppError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tone_scale::{AnchorPalette, QueryMode, ReferenceScale, SearchScope, ToneReconciler};

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Anchor palette override as hex strings (at least 11 colors)
    pub palette: Option<Vec<String>>,

    /// Rows the von Luschan search may pick from
    pub search_scope: SearchScope,

    /// How the search query is built
    pub query: QueryMode,

    /// What to do when a record fails
    pub on_error: ErrorPolicy,

    /// Format of the reconciled table
    pub output_format: OutputFormat,
}

/// Batch behavior on a per-record failure
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Log the failure and continue with the next record
    #[default]
    Skip,
    /// Stop at the first failure
    Abort,
}

/// Reconciled table format
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(ErrorPolicy::Skip),
            "abort" => Ok(ErrorPolicy::Abort),
            other => Err(format!("unknown error policy {other:?} (expected skip or abort)")),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Skip => f.write_str("skip"),
            ErrorPolicy::Abort => f.write_str("abort"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other:?} (expected csv or json)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => f.write_str("csv"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        // An empty file is a valid "all defaults" config
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from a file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        scope = %config.search_scope,
                        query = %config.query,
                        custom_palette = config.palette.is_some(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// The anchor palette: configured override or the detector default
    pub fn anchor_palette(&self) -> Result<AnchorPalette, AppError> {
        match &self.palette {
            Some(hex) => Ok(AnchorPalette::from_hex(hex)?),
            None => Ok(AnchorPalette::default()),
        }
    }

    /// Build a reconciler with the configured tables and options
    pub fn build_reconciler(&self) -> Result<ToneReconciler, AppError> {
        Ok(
            ToneReconciler::new(ReferenceScale::default(), self.anchor_palette()?)
                .with_scope(self.search_scope)
                .with_query(self.query),
        )
    }
}
