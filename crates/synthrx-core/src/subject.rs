use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque stable key correlating one synthetic person across all output
/// tables. Immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(String);

impl SubjectId {
    /// Build the zero-padded study id for a row index, e.g. `S-0042`.
    pub fn from_index(index: usize) -> Self {
        Self(format!("S-{index:04}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_index_zero_pads_to_four_digits() {
        assert_eq!(SubjectId::from_index(1).as_str(), "S-0001");
        assert_eq!(SubjectId::from_index(4095).as_str(), "S-4095");
        assert_eq!(SubjectId::from_index(12345).as_str(), "S-12345");
    }
}
