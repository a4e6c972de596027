use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Closed date interval `[lower, upper]`.
///
/// Construction rejects inverted bounds, so every window reaching the
/// generators satisfies `lower <= upper`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct DateWindow {
    lower: NaiveDate,
    upper: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct RawWindow {
    lower: NaiveDate,
    upper: NaiveDate,
}

impl DateWindow {
    pub fn new(lower: NaiveDate, upper: NaiveDate) -> Result<Self, Error> {
        if lower > upper {
            return Err(Error::InvalidWindow { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> NaiveDate {
        self.lower
    }

    pub fn upper(&self) -> NaiveDate {
        self.upper
    }

    /// Width of the window in whole days; zero for a degenerate window.
    pub fn num_days(&self) -> i64 {
        (self.upper - self.lower).num_days()
    }
}

impl TryFrom<RawWindow> for DateWindow {
    type Error = Error;

    fn try_from(raw: RawWindow) -> Result<Self, Error> {
        Self::new(raw.lower, raw.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn rejects_inverted_bounds() {
        let result = DateWindow::new(date(2001, 1, 1), date(2000, 12, 31));
        assert!(matches!(result, Err(Error::InvalidWindow { .. })));
    }

    #[test]
    fn accepts_degenerate_window() {
        let window = DateWindow::new(date(2000, 6, 15), date(2000, 6, 15)).expect("window");
        assert_eq!(window.num_days(), 0);
        assert_eq!(window.lower(), window.upper());
    }
}
