use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::errors::GenerationError;
use crate::history::{build_diagnosis_history, build_dispense_history};
use crate::model::{GenerateOptions, GenerationReport, TableReport};
use crate::output::csv::{write_diagnoses_csv, write_dispenses_csv, write_patients_csv};
use crate::sampler::RngSampler;
use crate::subjects::synthesize_patients;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub out_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for a generation run: synthesizes the subject table, builds
/// both event histories per subject, and writes the three tables as
/// delimited files sharing one run timestamp.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let stamp = chrono::Local::now().format("%Y_%m_%dT%H_%M_%S").to_string();
        let seed = self.options.seed.unwrap_or_else(rand::random);

        std::fs::create_dir_all(&self.options.out_dir)?;

        info!(
            run_id = %run_id,
            rows = self.options.rows,
            seed,
            "generation started"
        );

        let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, "patients"));
        let patients =
            synthesize_patients(self.options.rows, &self.options.patient_window, &mut rng);

        let mut sampler = RngSampler::new(ChaCha8Rng::seed_from_u64(hash_seed(seed, "dispenses")));
        let mut dispenses = Vec::new();
        for patient in &patients {
            dispenses.extend(build_dispense_history(
                &patient.study_id,
                &self.options.dispense_window,
                &mut sampler,
            ));
        }

        let mut sampler = RngSampler::new(ChaCha8Rng::seed_from_u64(hash_seed(seed, "diagnoses")));
        let mut diagnoses = Vec::new();
        for patient in &patients {
            diagnoses.extend(build_diagnosis_history(
                &patient.study_id,
                &self.options.diagnosis_window,
                &mut sampler,
            ));
        }

        let mut tables = Vec::new();
        let mut bytes_written = 0_u64;

        let file = format!("patients-{stamp}.csv");
        let path = self.options.out_dir.join(&file);
        bytes_written += write_patients_csv(&path, &patients)?;
        info!(table = "patients", rows = patients.len(), path = %path.display(), "table written");
        tables.push(TableReport {
            table: "patients".to_string(),
            rows: patients.len() as u64,
            file,
        });

        let file = format!("dispenses-{stamp}.csv");
        let path = self.options.out_dir.join(&file);
        bytes_written += write_dispenses_csv(&path, &dispenses)?;
        info!(table = "dispenses", rows = dispenses.len(), path = %path.display(), "table written");
        tables.push(TableReport {
            table: "dispenses".to_string(),
            rows: dispenses.len() as u64,
            file,
        });

        let file = format!("diagnoses-{stamp}.csv");
        let path = self.options.out_dir.join(&file);
        bytes_written += write_diagnoses_csv(&path, &diagnoses)?;
        info!(table = "diagnoses", rows = diagnoses.len(), path = %path.display(), "table written");
        tables.push(TableReport {
            table: "diagnoses".to_string(),
            rows: diagnoses.len() as u64,
            file,
        });

        let report = GenerationReport {
            run_id,
            seed,
            tables,
            bytes_written,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        let report_path = self
            .options
            .out_dir
            .join(format!("generation_report-{stamp}.json"));
        std::fs::write(&report_path, serde_json::to_vec_pretty(&report)?)?;

        info!(
            run_id = %report.run_id,
            duration_ms = report.duration_ms,
            bytes_written = report.bytes_written,
            "generation completed"
        );

        Ok(GenerationResult {
            out_dir: self.options.out_dir.clone(),
            report,
        })
    }
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
