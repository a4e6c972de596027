use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::subject::SubjectId;

/// One simulated medication refill record.
///
/// Events belong to a per-subject sequence ordered by construction. Dates
/// are non-decreasing in generative order; a negative refill gap may place
/// an adjacent pair out of calendar order, which is intentional noise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispenseEvent {
    pub subject_id: SubjectId,
    pub dispense_date: NaiveDate,
    pub drug_id: String,
    pub days_supply: u32,
}

/// One simulated clinical diagnosis record.
///
/// The code is always drawn from [`crate::hf_codes::CODES`] and the name is
/// fully determined by the code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisEvent {
    pub subject_id: SubjectId,
    pub dx_date: NaiveDate,
    pub dx_code: &'static str,
    pub dx_name: &'static str,
}

/// Membership column value for a patient row.
///
/// The canonical encoding is a 0/1 integer flag; the text form reproduces
/// an upstream encoding defect where the flag arrives as `Y`/`N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Member {
    Flag(u8),
    Label(char),
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Flag(value) => write!(f, "{value}"),
            Member::Label(value) => write!(f, "{value}"),
        }
    }
}

/// One synthetic patient row. Height is in centimeters unless the
/// meters-units defect fired for this row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientRecord {
    pub study_id: SubjectId,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: String,
    pub height: f64,
    pub member: Member,
    pub birth_date: NaiveDate,
}
