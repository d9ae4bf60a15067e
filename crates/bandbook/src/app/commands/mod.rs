//! Executable commands and the outcome/error types they report.

use std::fmt;

use thiserror::Error;

use crate::app::roster::Roster;
use crate::domain::errors::DomainError;
use crate::domain::model::{Band, Musician};

pub mod add;
pub mod add_musician_to_band;
pub mod delete;
pub mod general;
pub mod remove_musician_from_band;
pub mod view;

pub use add::{AddBand, AddMusician};
pub use add_musician_to_band::AddMusicianToBand;
pub use delete::{DeleteBand, DeleteMusician};
pub use general::{Clear, Exit, Help};
pub use remove_musician_from_band::RemoveMusicianFromBand;
pub use view::{FindBand, FindMusician, List};

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

/// A parsed command ready to run against the roster.
pub trait Command: fmt::Debug {
    fn execute(&self, roster: &mut Roster) -> Result<CommandOutcome, CommandError>;

    /// Whether a successful run changes the roster and should be persisted.
    fn mutates(&self) -> bool {
        true
    }
}

/// What a successful command reports back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub feedback: String,
    /// The displayed lists changed shape and should be rendered again.
    pub show_lists: bool,
    pub exit: bool,
}

impl CommandOutcome {
    pub fn message<S: Into<String>>(feedback: S) -> Self {
        Self {
            feedback: feedback.into(),
            show_lists: false,
            exit: false,
        }
    }

    pub fn with_lists(mut self) -> Self {
        self.show_lists = true;
        self
    }

    pub fn exit<S: Into<String>>(feedback: S) -> Self {
        Self {
            feedback: feedback.into(),
            show_lists: false,
            exit: true,
        }
    }
}

/// User-facing command failures. The display text is shown as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Missing or malformed arguments, reported before execution.
    #[error("{0}")]
    InvalidArgument(String),
    /// A position does not resolve within the displayed list.
    #[error("{0}")]
    OutOfRange(String),
    /// The band already contains the musician.
    #[error("{0}")]
    DuplicateRelation(String),
    /// The model refused the change.
    #[error("{0}")]
    Rejected(String),
}

impl CommandError {
    pub(crate) fn invalid_format(usage: &str) -> Self {
        Self::InvalidArgument(format!("{MESSAGE_INVALID_COMMAND_FORMAT}{usage}"))
    }
}

impl From<DomainError> for CommandError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidIndex | DomainError::InvalidField { .. } => {
                Self::InvalidArgument(err.to_string())
            }
            other => Self::Rejected(other.to_string()),
        }
    }
}

/// Describe a band/musician pairing for feedback messages.
pub fn format_pair(band: &Band, musician: &Musician) -> String {
    format!("Band: {}; Musician: {}", band.name, musician.name)
}
