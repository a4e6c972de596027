use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use synthrx_core::DateWindow;

/// Options for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where the delimited files and the run report are written.
    pub out_dir: PathBuf,
    /// Number of patient rows to synthesize.
    pub rows: usize,
    /// Seed for the run's random streams; unset draws one from OS entropy.
    pub seed: Option<u64>,
    /// Birth-date window for patient rows.
    pub patient_window: DateWindow,
    /// Date window for dispense histories.
    pub dispense_window: DateWindow,
    /// Date window for diagnosis histories.
    pub diagnosis_window: DateWindow,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("fakes"),
            rows: 4096,
            seed: None,
            patient_window: year_window(1940, 1949),
            dispense_window: year_window(1990, 2009),
            diagnosis_window: year_window(2010, 2019),
        }
    }
}

fn year_window(from_year: i32, to_year: i32) -> DateWindow {
    let lower = NaiveDate::from_ymd_opt(from_year, 1, 1).unwrap_or_default();
    let upper = NaiveDate::from_ymd_opt(to_year, 12, 31).unwrap_or_default();
    DateWindow::new(lower, upper).unwrap_or_default()
}

/// Row count for one written table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows: u64,
    pub file: String,
}

/// Summary of a generation run, written alongside the data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub tables: Vec<TableReport>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}
