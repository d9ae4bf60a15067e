//! `list`, `find`, and `findb`: change what the displayed lists contain.

use crate::app::commands::{Command, CommandError, CommandOutcome};
use crate::app::roster::{BandView, MusicianView, Roster};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct List;

impl List {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all bands and musicians";
}

impl Command for List {
    fn execute(&self, roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        roster.show_all();
        Ok(CommandOutcome::message(Self::MESSAGE_SUCCESS).with_lists())
    }

    fn mutates(&self) -> bool {
        false
    }
}

/// Shows musicians whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindMusician {
    keywords: Vec<String>,
}

impl FindMusician {
    pub const COMMAND_WORD: &'static str = "find";

    pub const MESSAGE_USAGE: &'static str = "find: Finds all musicians whose names contain any of \
        the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob charlie";

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let keywords = split_keywords(args);
        if keywords.is_empty() {
            return Err(CommandError::invalid_format(Self::MESSAGE_USAGE));
        }
        Ok(Self { keywords })
    }
}

impl Command for FindMusician {
    fn execute(&self, roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        roster.set_musician_view(MusicianView::NameKeywords(self.keywords.clone()));
        let count = roster.displayed_musicians().len();
        Ok(CommandOutcome::message(format!("{count} musicians listed!")).with_lists())
    }

    fn mutates(&self) -> bool {
        false
    }
}

/// Shows bands whose name contains any of the keywords, together with their members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindBand {
    keywords: Vec<String>,
}

impl FindBand {
    pub const COMMAND_WORD: &'static str = "findb";

    pub const MESSAGE_USAGE: &'static str = "findb: Finds all bands whose names contain any of \
        the specified keywords (case-insensitive) and displays them with their members.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: findb beatles";

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let keywords = split_keywords(args);
        if keywords.is_empty() {
            return Err(CommandError::invalid_format(Self::MESSAGE_USAGE));
        }
        Ok(Self { keywords })
    }
}

impl Command for FindBand {
    fn execute(&self, roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        roster.set_band_view(BandView::NameKeywords(self.keywords.clone()));
        roster.set_musician_view(MusicianView::MembersOfDisplayedBands);
        let bands = roster.displayed_bands().len();
        let members = roster.displayed_musicians().len();
        Ok(
            CommandOutcome::message(format!("{bands} bands listed with {members} members!"))
                .with_lists(),
        )
    }

    fn mutates(&self) -> bool {
        false
    }
}

fn split_keywords(args: &str) -> Vec<String> {
    args.split_whitespace().map(str::to_string).collect()
}
