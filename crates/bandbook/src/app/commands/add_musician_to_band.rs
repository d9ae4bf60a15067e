//! `addm`: put a displayed musician into a displayed band.

use crate::app::commands::{Command, CommandError, CommandOutcome, format_pair};
use crate::app::parser::{self, PREFIX_BAND_INDEX, PREFIX_MUSICIAN_INDEX};
use crate::app::roster::Roster;
use crate::domain::errors::DomainError;
use crate::domain::index::Index;

/// Adds the musician at one displayed position to the band at another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddMusicianToBand {
    band: Index,
    musician: Index,
}

impl AddMusicianToBand {
    pub const COMMAND_WORD: &'static str = "addm";

    pub const MESSAGE_USAGE: &'static str = "addm: Adds a musician to a band. \
        Parameters: b/INDEX OF BAND m/INDEX OF MUSICIAN\n\
        Example: addm b/1 m/1";

    pub const MESSAGE_SUCCESS: &'static str = "New musician added to band: ";
    pub const MESSAGE_DUPLICATE_MUSICIAN: &'static str = "This musician already exists in the band";
    pub const MESSAGE_OUT_OF_BOUNDS: &'static str = "The index of musician is not found in the list below. \
        Do enter the command 'list' and check if the index is in the list!";

    pub fn new(band: Index, musician: Index) -> Self {
        Self { band, musician }
    }

    /// Parse `b/INDEX m/INDEX`. Both prefixes are required.
    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let prefixes = [PREFIX_BAND_INDEX, PREFIX_MUSICIAN_INDEX];
        let map = parser::tokenize(args, &prefixes);
        if !map.has_all(&prefixes) || !map.preamble().is_empty() {
            return Err(CommandError::invalid_format(Self::MESSAGE_USAGE));
        }
        map.verify_no_duplicate_prefixes(&prefixes)?;

        let (Some(band), Some(musician)) =
            (map.value(PREFIX_BAND_INDEX), map.value(PREFIX_MUSICIAN_INDEX))
        else {
            return Err(CommandError::invalid_format(Self::MESSAGE_USAGE));
        };
        Ok(Self::new(
            parser::parse_index(band)?,
            parser::parse_index(musician)?,
        ))
    }

    fn out_of_bounds() -> CommandError {
        CommandError::OutOfRange(Self::MESSAGE_OUT_OF_BOUNDS.into())
    }
}

impl Command for AddMusicianToBand {
    fn execute(&self, roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        // Both positions are checked against the displayed lists before the relation is read.
        let (Some((band_id, band)), Some((musician_id, musician))) =
            (roster.band_at(self.band), roster.musician_at(self.musician))
        else {
            tracing::debug!(
                band = self.band.one_based(),
                musician = self.musician.one_based(),
                "addm position out of range"
            );
            return Err(Self::out_of_bounds());
        };
        let description = format_pair(band, musician);

        match roster.has_musician_in_band(band_id, musician_id) {
            Ok(false) => {}
            Ok(true) => {
                return Err(CommandError::DuplicateRelation(
                    Self::MESSAGE_DUPLICATE_MUSICIAN.into(),
                ));
            }
            Err(_) => return Err(Self::out_of_bounds()),
        }

        roster
            .add_musician_to_band(band_id, musician_id)
            .map_err(|err| match err {
                DomainError::AlreadyMember => {
                    CommandError::DuplicateRelation(Self::MESSAGE_DUPLICATE_MUSICIAN.into())
                }
                _ => Self::out_of_bounds(),
            })?;

        tracing::info!(pair = %description, "musician added to band");
        Ok(CommandOutcome::message(format!(
            "{}{description}",
            Self::MESSAGE_SUCCESS
        )))
    }
}
