use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand_distr::StandardNormal;

/// Random-source capability injected into every builder call.
///
/// Bundling the draws behind one trait keeps the builders free of RNG
/// plumbing; tests can pass a seeded [`RngSampler`] for whole-run
/// determinism or a scripted implementation to pin exact branch decisions.
pub trait Sampler {
    /// Uniform draw from `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform date from the closed interval `[lo, hi]`. Requires `lo <= hi`.
    fn date_between(&mut self, lo: NaiveDate, hi: NaiveDate) -> NaiveDate;

    /// Draw from a unit log-normal (mean 0, sigma 1 in log space).
    fn log_normal(&mut self) -> f64;

    /// Uniform index into a non-empty choice set of `len` elements.
    fn index(&mut self, len: usize) -> usize;
}

/// [`Sampler`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.random()
    }

    fn date_between(&mut self, lo: NaiveDate, hi: NaiveDate) -> NaiveDate {
        uniform_date_between(&mut self.rng, lo, hi)
    }

    fn log_normal(&mut self) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        z.exp()
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Uniform date from `[lo, hi]`, inclusive on both ends.
pub fn uniform_date_between<R: Rng + ?Sized>(
    rng: &mut R,
    lo: NaiveDate,
    hi: NaiveDate,
) -> NaiveDate {
    let span = (hi - lo).num_days();
    if span <= 0 {
        return lo;
    }
    lo + Duration::days(rng.random_range(0..=span))
}
