//! `add` and `addb`: create musicians and bands.

use crate::app::commands::{Command, CommandError, CommandOutcome};
use crate::app::parser::{
    self, PREFIX_EMAIL, PREFIX_GENRE, PREFIX_INSTRUMENT, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
};
use crate::app::roster::Roster;
use crate::domain::model::{Band, Email, Musician, Name, Phone, parse_labels};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMusician {
    musician: Musician,
}

impl AddMusician {
    pub const COMMAND_WORD: &'static str = "add";

    pub const MESSAGE_USAGE: &'static str = "add: Adds a musician to the address book. \
        Parameters: n/NAME p/PHONE e/EMAIL [t/TAG]... [i/INSTRUMENT]... [g/GENRE]...\n\
        Example: add n/John Doe p/98765432 e/johnd@example.com t/friends i/guitar g/rock";

    pub const MESSAGE_SUCCESS: &'static str = "New musician added: ";

    pub fn new(musician: Musician) -> Self {
        Self { musician }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let map = parser::tokenize(
            args,
            &[
                PREFIX_NAME,
                PREFIX_PHONE,
                PREFIX_EMAIL,
                PREFIX_TAG,
                PREFIX_INSTRUMENT,
                PREFIX_GENRE,
            ],
        );
        let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL];
        if !map.has_all(&required) || !map.preamble().is_empty() {
            return Err(CommandError::invalid_format(Self::MESSAGE_USAGE));
        }
        map.verify_no_duplicate_prefixes(&required)?;

        let field = |prefix| map.value(prefix).unwrap_or_default();
        let musician = Musician {
            name: Name::parse(field(PREFIX_NAME))?,
            phone: Phone::parse(field(PREFIX_PHONE))?,
            email: Email::parse(field(PREFIX_EMAIL))?,
            tags: parse_labels(map.all_values(PREFIX_TAG))?,
            instruments: parse_labels(map.all_values(PREFIX_INSTRUMENT))?,
            genres: parse_labels(map.all_values(PREFIX_GENRE))?,
        };
        Ok(Self::new(musician))
    }
}

impl Command for AddMusician {
    fn execute(&self, roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        roster.add_musician(self.musician.clone())?;
        tracing::info!(name = %self.musician.name, "musician added");
        Ok(CommandOutcome::message(format!(
            "{}{}",
            Self::MESSAGE_SUCCESS,
            self.musician
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBand {
    band: Band,
}

impl AddBand {
    pub const COMMAND_WORD: &'static str = "addb";

    pub const MESSAGE_USAGE: &'static str = "addb: Adds a band to the address book. \
        Parameters: n/NAME [g/GENRE]...\n\
        Example: addb n/The Beatles g/rock";

    pub const MESSAGE_SUCCESS: &'static str = "New band added: ";

    pub fn new(band: Band) -> Self {
        Self { band }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let map = parser::tokenize(args, &[PREFIX_NAME, PREFIX_GENRE]);
        let Some(name) = map.value(PREFIX_NAME) else {
            return Err(CommandError::invalid_format(Self::MESSAGE_USAGE));
        };
        if !map.preamble().is_empty() {
            return Err(CommandError::invalid_format(Self::MESSAGE_USAGE));
        }
        map.verify_no_duplicate_prefixes(&[PREFIX_NAME])?;

        let band = Band::new(Name::parse(name)?, parse_labels(map.all_values(PREFIX_GENRE))?);
        Ok(Self::new(band))
    }
}

impl Command for AddBand {
    fn execute(&self, roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        roster.add_band(self.band.clone())?;
        tracing::info!(name = %self.band.name, "band added");
        Ok(CommandOutcome::message(format!(
            "{}{}",
            Self::MESSAGE_SUCCESS,
            self.band
        )))
    }
}
