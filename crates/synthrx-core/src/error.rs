use chrono::NaiveDate;
use thiserror::Error;

/// Core error type shared across synthrx crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A date window's bounds are inverted.
    #[error("invalid date window: lower bound {lower} is after upper bound {upper}")]
    InvalidWindow { lower: NaiveDate, upper: NaiveDate },
}

/// Convenience alias for results returned by synthrx crates.
pub type Result<T> = std::result::Result<T, Error>;
