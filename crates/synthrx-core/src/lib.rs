//! Core data model for synthrx.
//!
//! This crate defines the subject, event, and patient-row types shared by
//! the generation engine and the CLI, the fixed diagnosis code table, and
//! the validated date window handed to every generator.

pub mod error;
pub mod events;
pub mod hf_codes;
pub mod subject;
pub mod window;

pub use error::{Error, Result};
pub use events::{DiagnosisEvent, DispenseEvent, Member, PatientRecord};
pub use subject::SubjectId;
pub use window::DateWindow;
