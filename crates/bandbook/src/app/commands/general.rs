//! `clear`, `help`, and `exit`.

use crate::app::commands::{
    AddBand, AddMusician, AddMusicianToBand, Command, CommandError, CommandOutcome, DeleteBand,
    DeleteMusician, FindBand, FindMusician, RemoveMusicianFromBand,
};
use crate::app::roster::Roster;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clear;

impl Clear {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_SUCCESS: &'static str = "Address book has been cleared!";
}

impl Command for Clear {
    fn execute(&self, roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        roster.clear();
        tracing::info!("roster cleared");
        Ok(CommandOutcome::message(Self::MESSAGE_SUCCESS).with_lists())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Help;

impl Help {
    pub const COMMAND_WORD: &'static str = "help";

    pub const MESSAGE_USAGE: &'static str = "help: Shows the available commands.\n\
        Example: help";

    /// Usage of every command, one block per command.
    pub fn usage() -> String {
        [
            AddMusician::MESSAGE_USAGE,
            AddBand::MESSAGE_USAGE,
            AddMusicianToBand::MESSAGE_USAGE,
            RemoveMusicianFromBand::MESSAGE_USAGE,
            DeleteMusician::MESSAGE_USAGE,
            DeleteBand::MESSAGE_USAGE,
            FindMusician::MESSAGE_USAGE,
            FindBand::MESSAGE_USAGE,
            "list: Lists all bands and musicians.",
            "clear: Removes every band and musician.",
            "exit: Exits the program.",
        ]
        .join("\n\n")
    }
}

impl Command for Help {
    fn execute(&self, _roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        Ok(CommandOutcome::message(Self::usage()))
    }

    fn mutates(&self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exit;

impl Exit {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting address book as requested ...";
}

impl Command for Exit {
    fn execute(&self, _roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        Ok(CommandOutcome::exit(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT))
    }

    fn mutates(&self) -> bool {
        false
    }
}
