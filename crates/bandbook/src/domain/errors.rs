//! Domain-specific errors.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,
    #[error("{field} {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },
    #[error("unknown band")]
    UnknownBand,
    #[error("unknown musician")]
    UnknownMusician,
    #[error("This musician already exists in the address book: {0}")]
    DuplicateMusician(String),
    #[error("This band already exists in the address book: {0}")]
    DuplicateBand(String),
    #[error("This musician already exists in the band")]
    AlreadyMember,
    #[error("This musician is not a member of the band")]
    NotMember,
}
