use std::collections::VecDeque;

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use synthrx_core::{DateWindow, SubjectId};
use synthrx_generate::history::dispenses::{
    DAYS_SUPPLY_CHOICES, DRUG_IDS, DRUG_IDS_HYPHENATED, build_dispense_history,
};
use synthrx_generate::sampler::{RngSampler, Sampler};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn window() -> DateWindow {
    DateWindow::new(date(1990, 1, 1), date(2009, 12, 31)).expect("window")
}

fn subject() -> SubjectId {
    SubjectId::from_index(1)
}

#[test]
fn history_is_never_empty() {
    for seed in 0..300 {
        let mut sampler = RngSampler::new(ChaCha8Rng::seed_from_u64(seed));
        let history = build_dispense_history(&subject(), &window(), &mut sampler);
        assert!(!history.is_empty());
    }
}

#[test]
fn drug_id_is_constant_within_a_subject() {
    for seed in 0..300 {
        let mut sampler = RngSampler::new(ChaCha8Rng::seed_from_u64(seed));
        let history = build_dispense_history(&subject(), &window(), &mut sampler);
        let first_drug = history[0].drug_id.clone();
        for event in &history {
            assert_eq!(event.drug_id, first_drug);
        }
    }
}

#[test]
fn days_supply_is_from_the_fixed_set() {
    for seed in 0..300 {
        let mut sampler = RngSampler::new(ChaCha8Rng::seed_from_u64(seed));
        for event in build_dispense_history(&subject(), &window(), &mut sampler) {
            assert!(DAYS_SUPPLY_CHOICES.contains(&event.days_supply));
        }
    }
}

#[test]
fn drug_ids_come_from_a_known_candidate_set() {
    for seed in 0..300 {
        let mut sampler = RngSampler::new(ChaCha8Rng::seed_from_u64(seed));
        let history = build_dispense_history(&subject(), &window(), &mut sampler);
        let drug = history[0].drug_id.as_str();
        assert!(DRUG_IDS.contains(&drug) || DRUG_IDS_HYPHENATED.contains(&drug));
    }
}

// The continuation threshold 0.85 - (k - 1) / 10 goes negative at k = 10,
// so no history can grow past ten events.
#[test]
fn length_never_exceeds_the_decay_cap() {
    for seed in 0..1000 {
        let mut sampler = RngSampler::new(ChaCha8Rng::seed_from_u64(seed));
        let history = build_dispense_history(&subject(), &window(), &mut sampler);
        assert!(history.len() <= 10, "length {} at seed {}", history.len(), seed);
    }
}

#[test]
fn dates_never_exceed_the_upper_bound() {
    let window = window();
    for seed in 0..300 {
        let mut sampler = RngSampler::new(ChaCha8Rng::seed_from_u64(seed));
        for event in build_dispense_history(&subject(), &window, &mut sampler) {
            assert!(event.dispense_date <= window.upper());
        }
    }
}

#[test]
fn degenerate_window_seeds_on_that_date_and_stops() {
    let day = date(2000, 6, 15);
    let degenerate = DateWindow::new(day, day).expect("window");
    for seed in 0..100 {
        let mut sampler = RngSampler::new(ChaCha8Rng::seed_from_u64(seed));
        let history = build_dispense_history(&subject(), &degenerate, &mut sampler);
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].dispense_date, day);
    }
}

#[test]
fn deterministic_under_a_fixed_seed() {
    let mut a = RngSampler::new(ChaCha8Rng::seed_from_u64(42));
    let mut b = RngSampler::new(ChaCha8Rng::seed_from_u64(42));
    let history_a = build_dispense_history(&subject(), &window(), &mut a);
    let history_b = build_dispense_history(&subject(), &window(), &mut b);
    assert_eq!(history_a, history_b);
}

#[test]
fn hyphenated_drug_ids_appear_at_the_defect_rate() {
    let mut sampler = RngSampler::new(ChaCha8Rng::seed_from_u64(2024));
    let trials = 5000;
    let mut hyphenated = 0;
    for _ in 0..trials {
        let history = build_dispense_history(&subject(), &window(), &mut sampler);
        if DRUG_IDS_HYPHENATED.contains(&history[0].drug_id.as_str()) {
            hyphenated += 1;
        }
    }
    let rate = f64::from(hyphenated) / f64::from(trials);
    assert!((0.08..=0.12).contains(&rate), "hyphenation rate {rate}");
}

/// Sampler that replays pre-scripted draws, for pinning branch decisions.
struct ScriptedSampler {
    uniforms: VecDeque<f64>,
    dates: VecDeque<NaiveDate>,
    log_normals: VecDeque<f64>,
    indices: VecDeque<usize>,
}

impl Sampler for ScriptedSampler {
    fn uniform(&mut self) -> f64 {
        self.uniforms.pop_front().expect("scripted uniform")
    }

    fn date_between(&mut self, lo: NaiveDate, _hi: NaiveDate) -> NaiveDate {
        self.dates.pop_front().unwrap_or(lo)
    }

    fn log_normal(&mut self) -> f64 {
        self.log_normals.pop_front().expect("scripted log-normal")
    }

    fn index(&mut self, len: usize) -> usize {
        self.indices.pop_front().expect("scripted index") % len
    }
}

#[test]
fn scripted_seed_event_is_reproduced_exactly() {
    // No hyphenation (0.5 >= 0.1), seed on 2000-03-01 with Drug B / 90
    // days; the first growth draw (0.9 > 0.85) stops immediately.
    let mut sampler = ScriptedSampler {
        uniforms: VecDeque::from([0.5, 0.9]),
        dates: VecDeque::from([date(2000, 3, 1)]),
        log_normals: VecDeque::from([1.0]),
        indices: VecDeque::from([1, 2]),
    };
    let window = DateWindow::new(date(2000, 1, 1), date(2000, 12, 31)).expect("window");
    let history = build_dispense_history(&subject(), &window, &mut sampler);

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].dispense_date, date(2000, 3, 1));
    assert_eq!(history[0].drug_id, "Drug B");
    assert_eq!(history[0].days_supply, 90);
}

#[test]
fn scripted_growth_applies_the_lognormal_gap() {
    // Seed on 2000-01-01 with Drug A / 30 days. First growth round: gap =
    // round(1.0 * 7 + 23) = 30 days, continuation draw 0.1 <= 0.85, new
    // supply 60. Second round: gap = round(7 + 53) = 60 days, draw 0.9 >
    // 0.75 stops the sequence.
    let mut sampler = ScriptedSampler {
        uniforms: VecDeque::from([0.5, 0.1, 0.9]),
        dates: VecDeque::from([date(2000, 1, 1)]),
        log_normals: VecDeque::from([1.0, 1.0]),
        indices: VecDeque::from([0, 0, 1]),
    };
    let window = DateWindow::new(date(2000, 1, 1), date(2000, 12, 31)).expect("window");
    let history = build_dispense_history(&subject(), &window, &mut sampler);

    assert_eq!(history.len(), 2);
    assert_eq!(history[0].dispense_date, date(2000, 1, 1));
    assert_eq!(history[0].days_supply, 30);
    assert_eq!(history[1].dispense_date, date(2000, 1, 31));
    assert_eq!(history[1].days_supply, 60);
    assert_eq!(history[1].drug_id, "Drug A");
}
