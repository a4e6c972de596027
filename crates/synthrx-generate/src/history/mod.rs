//! Stochastic per-subject event-history builders.
//!
//! Each builder consumes only the injected [`crate::sampler::Sampler`]
//! capability and performs no I/O; both are expressed as accumulation
//! loops with an explicit stop condition.

pub mod diagnoses;
pub mod dispenses;

pub use diagnoses::build_diagnosis_history;
pub use dispenses::build_dispense_history;
