use chrono::Duration;

use synthrx_core::{DateWindow, DispenseEvent, SubjectId};

use crate::sampler::Sampler;

/// Allowed days-supply values for a dispense.
pub const DAYS_SUPPLY_CHOICES: [u32; 3] = [30, 60, 90];

/// Drug identifier candidates for a subject's first dispense.
pub const DRUG_IDS: [&str; 2] = ["Drug A", "Drug B"];

/// Hyphenated spellings of the same two drugs, emitted as an infrequent
/// data-entry inconsistency.
pub const DRUG_IDS_HYPHENATED: [&str; 2] = ["Drug-A", "Drug-B"];

const HYPHENATED_NAME_RATE: f64 = 0.10;

/// Build the dispense sequence for one subject, in generative order.
///
/// The seed event is always emitted, so the sequence is never empty. The
/// growth loop then appends refills spaced by
/// `round(L * 7 + (prev_supply - 7))` days, with `L` drawn from a unit
/// log-normal; nothing clamps the gap, so a candidate date may fall behind
/// its predecessor in calendar terms. The drug identifier chosen at the
/// seed is carried through every later event.
///
/// Continuation requires a uniform draw at or below
/// `0.85 - (k - 1) / 10` (k = events so far) and a candidate date inside
/// the window. The threshold goes negative once k reaches 10, which is the
/// intended implicit cap on sequence length.
pub fn build_dispense_history(
    subject_id: &SubjectId,
    window: &DateWindow,
    sampler: &mut dyn Sampler,
) -> Vec<DispenseEvent> {
    // Hyphenation defect is decided once per call, before the seed step.
    let drug_ids = if sampler.uniform() < HYPHENATED_NAME_RATE {
        &DRUG_IDS_HYPHENATED
    } else {
        &DRUG_IDS
    };

    let mut prev_date = sampler.date_between(window.lower(), window.upper());
    let drug_id = drug_ids[sampler.index(drug_ids.len())];
    let mut prev_supply = DAYS_SUPPLY_CHOICES[sampler.index(DAYS_SUPPLY_CHOICES.len())];

    let mut events = vec![DispenseEvent {
        subject_id: subject_id.clone(),
        dispense_date: prev_date,
        drug_id: drug_id.to_string(),
        days_supply: prev_supply,
    }];

    loop {
        let gap_days =
            (sampler.log_normal() * 7.0 + (f64::from(prev_supply) - 7.0)).round() as i64;
        let candidate = prev_date + Duration::days(gap_days);

        let threshold = 0.85 - (events.len() as f64 - 1.0) / 10.0;
        if sampler.uniform() > threshold || candidate > window.upper() {
            return events;
        }

        prev_supply = DAYS_SUPPLY_CHOICES[sampler.index(DAYS_SUPPLY_CHOICES.len())];
        prev_date = candidate;
        events.push(DispenseEvent {
            subject_id: subject_id.clone(),
            dispense_date: candidate,
            drug_id: drug_id.to_string(),
            days_supply: prev_supply,
        });
    }
}
