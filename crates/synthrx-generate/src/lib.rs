//! Synthetic patient cohort generation engine.
//!
//! Produces three linked tables (patients, dispenses, diagnoses) as CSV
//! with intentionally injected data-quality defects. The per-subject
//! history builders in [`history`] carry the stochastic control flow; the
//! engine wires them to the subject table and the delimited output.

pub mod engine;
pub mod errors;
pub mod history;
pub mod model;
pub mod output;
pub mod sampler;
pub mod subjects;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use history::{build_diagnosis_history, build_dispense_history};
pub use model::{GenerateOptions, GenerationReport, TableReport};
pub use sampler::{RngSampler, Sampler};
