//! Positions into the displayed band and musician lists.

use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;

/// A position in a displayed list.
///
/// Users type 1-based positions; the model works with 0-based offsets. An `Index` is only
/// meaningful against the list snapshot that is displayed when a command executes and is
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(usize);

impl Index {
    /// Build from a user-facing 1-based position. Zero is rejected.
    pub fn from_one_based(position: usize) -> Result<Self, DomainError> {
        position
            .checked_sub(1)
            .map(Self)
            .ok_or(DomainError::InvalidIndex)
    }

    /// Build from an offset the caller already knows is in range.
    #[cfg(test)]
    pub(crate) fn from_zero_based(offset: usize) -> Self {
        Self(offset)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0.saturating_add(1)
    }
}

impl FromStr for Index {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidIndex);
        }
        let position: usize = trimmed.parse().map_err(|_| DomainError::InvalidIndex)?;
        Self::from_one_based(position)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_between_one_and_zero_based() {
        let index = Index::from_one_based(3).unwrap();
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.one_based(), 3);
        assert_eq!(Index::from_zero_based(2), index);
        assert_eq!(index.to_string(), "3");
    }

    #[test]
    fn largest_positions_do_not_overflow() {
        let last = Index::from_one_based(usize::MAX).unwrap();
        assert_eq!(last.one_based(), usize::MAX);
        assert_eq!(Index::from_zero_based(usize::MAX).one_based(), usize::MAX);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(Index::from_one_based(0), Err(DomainError::InvalidIndex));
        assert_eq!("0".parse::<Index>(), Err(DomainError::InvalidIndex));
    }

    #[test]
    fn rejects_signed_and_non_numeric_text() {
        for input in ["", " ", "-1", "+1", "1a", "one", "1 2"] {
            assert!(input.parse::<Index>().is_err(), "accepted {input:?}");
        }
        assert_eq!(" 7 ".parse::<Index>().unwrap().zero_based(), 6);
    }
}
