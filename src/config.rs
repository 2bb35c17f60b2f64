use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level aridity configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AridityConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Monthly model and baseline settings.
    #[serde(default)]
    pub spi: SpiToml,

    /// Anchored model; skipped when absent.
    #[serde(default)]
    pub anchored: Option<AnchoredToml>,

    /// Spatial clipping applied before aggregation.
    #[serde(default)]
    pub extent: Option<ExtentToml>,
}

impl AridityConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub summary: Option<PathBuf>,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            summary: None,
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpiToml {
    #[serde(default = "default_unit_count")]
    pub unit_count: u32,
    #[serde(default = "default_strictness")]
    pub strictness: String,
    #[serde(default = "default_min_group_size")]
    pub min_group_size: usize,
}

impl Default for SpiToml {
    fn default() -> Self {
        Self {
            unit_count: default_unit_count(),
            strictness: default_strictness(),
            min_group_size: default_min_group_size(),
        }
    }
}

fn default_unit_count() -> u32 {
    1
}
fn default_strictness() -> String {
    "lenient".to_string()
}
fn default_min_group_size() -> usize {
    3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchoredToml {
    /// Parquet file with a `date` column of anchor dates.
    pub anchors: PathBuf,
    #[serde(default = "default_day_count")]
    pub day_count: u32,
    #[serde(default)]
    pub shift_days: i32,
}

fn default_day_count() -> u32 {
    16
}

/// Rectangular block of cells: first row and column, then size.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtentToml {
    pub row: usize,
    pub col: usize,
    pub rows: usize,
    pub cols: usize,
}
