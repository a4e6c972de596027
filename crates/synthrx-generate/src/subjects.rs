use chrono::NaiveDate;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName, Suffix};
use rand::Rng;
use rand_distr::StandardNormal;

use synthrx_core::{DateWindow, Member, PatientRecord, SubjectId};

use crate::sampler::uniform_date_between;

const TEST_USER_RATE: f64 = 0.001;
const HEIGHT_IN_METERS_RATE: f64 = 0.005;
const MEMBER_AS_TEXT_RATE: f64 = 0.005;

const HEIGHT_MEAN_CM: f64 = 175.0;
const HEIGHT_STD_DEV_CM: f64 = 7.5;

/// Synthesize the patients table: independent per-row records with three
/// infrequent data issues injected (a placeholder test user, a height
/// emitted in meters instead of centimeters, and a membership flag emitted
/// as text).
pub fn synthesize_patients<R: Rng>(
    rows: usize,
    birth_window: &DateWindow,
    rng: &mut R,
) -> Vec<PatientRecord> {
    (0..rows)
        .map(|index| synthesize_patient(index, birth_window, rng))
        .collect()
}

fn synthesize_patient<R: Rng>(
    index: usize,
    birth_window: &DateWindow,
    rng: &mut R,
) -> PatientRecord {
    // Each defect is an independent draw, evaluated before the row is built.
    let test_user = rng.random::<f64>() < TEST_USER_RATE;
    let height_in_meters = rng.random::<f64>() < HEIGHT_IN_METERS_RATE;
    let member_as_text = rng.random::<f64>() < MEMBER_AS_TEXT_RATE;

    let z: f64 = rng.sample(StandardNormal);
    let height_cm = ((HEIGHT_MEAN_CM + HEIGHT_STD_DEV_CM * z) * 10.0).round() / 10.0;

    let (first_name, middle_name, last_name, suffix, birth_date): (
        String,
        String,
        String,
        String,
        NaiveDate,
    ) = if test_user {
        (
            "TEST".to_string(),
            String::new(),
            "PATIENT".to_string(),
            String::new(),
            test_user_birth_date(),
        )
    } else {
        (
            FirstName().fake_with_rng(rng),
            FirstName().fake_with_rng(rng),
            LastName().fake_with_rng(rng),
            Suffix().fake_with_rng(rng),
            uniform_date_between(rng, birth_window.lower(), birth_window.upper()),
        )
    };

    PatientRecord {
        study_id: SubjectId::from_index(index),
        first_name,
        middle_name,
        last_name,
        suffix,
        height: if height_in_meters {
            height_cm / 100.0
        } else {
            height_cm
        },
        member: if member_as_text {
            Member::Label(if rng.random_bool(0.5) { 'N' } else { 'Y' })
        } else {
            Member::Flag(rng.random_range(0..=1))
        },
        birth_date,
    }
}

/// Sentinel birth date marking the placeholder test user.
fn test_user_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1840, 12, 31).unwrap_or_default()
}
