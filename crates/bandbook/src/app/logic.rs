//! Parse, execute, persist: the single entry point for front ends.

use anyhow::Result;
use thiserror::Error;

use crate::app::commands::{CommandError, CommandOutcome};
use crate::app::parser::parse_command;
use crate::app::roster::Roster;
use crate::app::storage::RosterStore;

#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Command(#[from] CommandError),
    /// The command ran but its result could not be written to disk.
    #[error("Could not save data to file: {0:#}")]
    Storage(anyhow::Error),
}

/// Owns the roster and, optionally, the store it is persisted to.
#[derive(Debug, Default)]
pub struct Logic {
    roster: Roster,
    store: Option<RosterStore>,
}

impl Logic {
    /// Work on an in-memory roster that is never saved.
    pub fn in_memory(roster: Roster) -> Self {
        Self {
            roster,
            store: None,
        }
    }

    /// Load the roster from `store`, starting empty if it has no data yet.
    pub fn open(store: RosterStore) -> Result<Self> {
        let roster = store.load()?.unwrap_or_default();
        Ok(Self {
            roster,
            store: Some(store),
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> Option<&RosterStore> {
        self.store.as_ref()
    }

    /// Run one command line. Successful mutating commands are saved immediately and
    /// ask for the lists to be shown again, since positions may have shifted.
    pub fn execute(&mut self, line: &str) -> Result<CommandOutcome, LogicError> {
        let command = parse_command(line)?;
        let mut outcome = command.execute(&mut self.roster).inspect_err(|err| {
            tracing::debug!(line, error = %err, "command failed");
        })?;

        if !command.mutates() {
            return Ok(outcome);
        }
        if let Some(store) = &self.store {
            store.save(&self.roster).map_err(|err| {
                tracing::warn!(error = %err, path = %store.path().display(), "save failed");
                LogicError::Storage(err)
            })?;
        }
        outcome.show_lists = true;
        Ok(outcome)
    }
}
