//! Turning user input into library positions.

use crate::models::error::SError;
use tracing::warn;

/// Which entries an operation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// 1-based positions in the order the user typed them. May be out of range.
    Positions(Vec<i64>),
    /// The last entry of the library.
    Latest,
}

impl Selection {
    /// Parses `"1,3"`-style input. `"latest"` selects the last entry.
    ///
    /// Input that is not a list of integers yields an empty selection rather
    /// than an error.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case("latest") {
            return Selection::Latest;
        }

        let parsed: Result<Vec<i64>, _> = input.split(',').map(|s| s.trim().parse::<i64>()).collect();
        match parsed {
            Ok(positions) => Selection::Positions(positions),
            Err(e) => {
                warn!("ignoring selection {input:?}: {e}");
                Selection::Positions(Vec::new())
            }
        }
    }

    /// Resolves to 0-based indices into a library of `len` entries.
    pub fn resolve(&self, len: usize) -> Result<Vec<usize>, SError> {
        match self {
            Selection::Latest => len.checked_sub(1).map(|i| vec![i]).ok_or(SError::EmptyLibrary),
            Selection::Positions(positions) => Ok(positions
                .iter()
                .filter(|&&p| p >= 1 && (p as u64) <= len as u64)
                .map(|&p| (p - 1) as usize)
                .collect()),
        }
    }
}
