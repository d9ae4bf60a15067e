//! `delete` and `deleteb`: remove a displayed musician or band.

use crate::app::commands::{Command, CommandError, CommandOutcome};
use crate::app::parser;
use crate::app::roster::Roster;
use crate::domain::index::Index;

pub const MESSAGE_INVALID_MUSICIAN_INDEX: &str = "The musician index provided is invalid";
pub const MESSAGE_INVALID_BAND_INDEX: &str = "The band index provided is invalid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteMusician {
    target: Index,
}

impl DeleteMusician {
    pub const COMMAND_WORD: &'static str = "delete";

    pub const MESSAGE_USAGE: &'static str = "delete: Deletes the musician identified by the \
        index number used in the displayed musician list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub const MESSAGE_SUCCESS: &'static str = "Deleted Musician: ";

    pub fn new(target: Index) -> Self {
        Self { target }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        parse_single_index(args, Self::MESSAGE_USAGE).map(Self::new)
    }
}

impl Command for DeleteMusician {
    fn execute(&self, roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        let Some((id, _)) = roster.musician_at(self.target) else {
            return Err(CommandError::OutOfRange(MESSAGE_INVALID_MUSICIAN_INDEX.into()));
        };
        let removed = roster.remove_musician(id)?;
        tracing::info!(name = %removed.name, "musician deleted");
        Ok(CommandOutcome::message(format!(
            "{}{removed}",
            Self::MESSAGE_SUCCESS
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteBand {
    target: Index,
}

impl DeleteBand {
    pub const COMMAND_WORD: &'static str = "deleteb";

    pub const MESSAGE_USAGE: &'static str = "deleteb: Deletes the band identified by the \
        index number used in the displayed band list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: deleteb 1";

    pub const MESSAGE_SUCCESS: &'static str = "Deleted Band: ";

    pub fn new(target: Index) -> Self {
        Self { target }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        parse_single_index(args, Self::MESSAGE_USAGE).map(Self::new)
    }
}

impl Command for DeleteBand {
    fn execute(&self, roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        let Some((id, _)) = roster.band_at(self.target) else {
            return Err(CommandError::OutOfRange(MESSAGE_INVALID_BAND_INDEX.into()));
        };
        let removed = roster.remove_band(id)?;
        tracing::info!(name = %removed.name, "band deleted");
        Ok(CommandOutcome::message(format!(
            "{}{removed}",
            Self::MESSAGE_SUCCESS
        )))
    }
}

fn parse_single_index(args: &str, usage: &str) -> Result<Index, CommandError> {
    let trimmed = args.trim();
    if trimmed.is_empty() {
        return Err(CommandError::invalid_format(usage));
    }
    parser::parse_index(trimmed).map_err(|_| CommandError::invalid_format(usage))
}
