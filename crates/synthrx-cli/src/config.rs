use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use synthrx_core::DateWindow;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid date range '{0}': expected YYYY-MM-DD..YYYY-MM-DD")]
    InvalidRange(String),
    #[error(transparent)]
    Core(#[from] synthrx_core::Error),
}

/// Optional overrides loaded from a TOML config file. Window bounds are
/// given as `lower`/`upper` date strings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub rows: Option<usize>,
    pub out_dir: Option<PathBuf>,
    pub seed: Option<u64>,
    pub patient_window: Option<DateWindow>,
    pub dispense_window: Option<DateWindow>,
    pub diagnosis_window: Option<DateWindow>,
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

/// Parse a `YYYY-MM-DD..YYYY-MM-DD` flag value into a validated window.
pub fn parse_range(raw: &str) -> Result<DateWindow, ConfigError> {
    let (lower, upper) = raw
        .split_once("..")
        .ok_or_else(|| ConfigError::InvalidRange(raw.to_string()))?;
    let lower = parse_date(lower, raw)?;
    let upper = parse_date(upper, raw)?;
    Ok(DateWindow::new(lower, upper)?)
}

fn parse_date(part: &str, raw: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(part.trim(), "%Y-%m-%d")
        .map_err(|_| ConfigError::InvalidRange(raw.to_string()))
}
