use synthrx_core::{DateWindow, DiagnosisEvent, SubjectId, hf_codes};

use crate::sampler::Sampler;

const SEED_RATE: f64 = 0.20;
const CONTINUE_RATE: f64 = 0.50;

/// Build the diagnosis sequence for one subject; most subjects get none.
///
/// The seed fires with probability 0.20, otherwise the sequence stays
/// empty. After a seed, each round appends another event with constant
/// probability 0.50, giving a geometric length distribution bounded in
/// practice by the shrinking date window. Follow-up dates are drawn
/// between the previous event and the upper bound, so dates never
/// decrease; codes are drawn independently from the full table each round.
pub fn build_diagnosis_history(
    subject_id: &SubjectId,
    window: &DateWindow,
    sampler: &mut dyn Sampler,
) -> Vec<DiagnosisEvent> {
    let mut events = Vec::new();
    if sampler.uniform() > SEED_RATE {
        return events;
    }

    let mut last_date = sampler.date_between(window.lower(), window.upper());
    let (dx_code, dx_name) = hf_codes::CODES[sampler.index(hf_codes::CODES.len())];
    events.push(DiagnosisEvent {
        subject_id: subject_id.clone(),
        dx_date: last_date,
        dx_code,
        dx_name,
    });

    while sampler.uniform() <= CONTINUE_RATE {
        last_date = sampler.date_between(last_date, window.upper());
        let (dx_code, dx_name) = hf_codes::CODES[sampler.index(hf_codes::CODES.len())];
        events.push(DiagnosisEvent {
            subject_id: subject_id.clone(),
            dx_date: last_date,
            dx_code,
            dx_name,
        });
    }

    events
}
