//! `removem`: take a displayed musician out of a displayed band.

use crate::app::commands::{Command, CommandError, CommandOutcome, format_pair};
use crate::app::parser::{self, PREFIX_BAND_INDEX, PREFIX_MUSICIAN_INDEX};
use crate::app::roster::Roster;
use crate::domain::index::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveMusicianFromBand {
    band: Index,
    musician: Index,
}

impl RemoveMusicianFromBand {
    pub const COMMAND_WORD: &'static str = "removem";

    pub const MESSAGE_USAGE: &'static str = "removem: Removes a musician from a band. \
        Parameters: b/INDEX OF BAND m/INDEX OF MUSICIAN\n\
        Example: removem b/1 m/1";

    pub const MESSAGE_SUCCESS: &'static str = "Musician removed from band: ";
    pub const MESSAGE_NOT_IN_BAND: &'static str = "This musician is not a member of the band";
    pub const MESSAGE_OUT_OF_BOUNDS: &'static str = "The index of band or musician is not found in the list below. \
        Do enter the command 'list' and check if the index is in the list!";

    pub fn new(band: Index, musician: Index) -> Self {
        Self { band, musician }
    }

    pub fn parse(args: &str) -> Result<Self, CommandError> {
        let prefixes = [PREFIX_BAND_INDEX, PREFIX_MUSICIAN_INDEX];
        let map = parser::tokenize(args, &prefixes);
        if !map.preamble().is_empty() {
            return Err(CommandError::invalid_format(Self::MESSAGE_USAGE));
        }
        map.verify_no_duplicate_prefixes(&prefixes)?;

        match (map.value(PREFIX_BAND_INDEX), map.value(PREFIX_MUSICIAN_INDEX)) {
            (Some(band), Some(musician)) => Ok(Self::new(
                parser::parse_index(band)?,
                parser::parse_index(musician)?,
            )),
            _ => Err(CommandError::invalid_format(Self::MESSAGE_USAGE)),
        }
    }
}

impl Command for RemoveMusicianFromBand {
    fn execute(&self, roster: &mut Roster) -> Result<CommandOutcome, CommandError> {
        let out_of_bounds = || CommandError::OutOfRange(Self::MESSAGE_OUT_OF_BOUNDS.into());

        let (Some((band_id, band)), Some((musician_id, musician))) =
            (roster.band_at(self.band), roster.musician_at(self.musician))
        else {
            return Err(out_of_bounds());
        };
        let description = format_pair(band, musician);

        if !roster
            .has_musician_in_band(band_id, musician_id)
            .map_err(|_| out_of_bounds())?
        {
            return Err(CommandError::Rejected(Self::MESSAGE_NOT_IN_BAND.into()));
        }
        roster.remove_musician_from_band(band_id, musician_id)?;

        tracing::info!(pair = %description, "musician removed from band");
        Ok(CommandOutcome::message(format!(
            "{}{description}",
            Self::MESSAGE_SUCCESS
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::app::parser::parse_command;

    fn run(roster: &mut Roster, line: &str) -> Result<CommandOutcome, CommandError> {
        parse_command(line)?.execute(roster)
    }

    fn roster() -> Roster {
        let mut roster = Roster::new();
        run(&mut roster, "addb n/Queen").unwrap();
        run(&mut roster, "add n/Freddie p/11111111 e/freddie@example.com").unwrap();
        roster
    }

    #[test]
    fn removes_existing_member() {
        let mut roster = roster();
        run(&mut roster, "addm b/1 m/1").unwrap();

        let outcome = run(&mut roster, "removem b/1 m/1").unwrap();
        assert_eq!(
            outcome.feedback,
            "Musician removed from band: Band: Queen; Musician: Freddie"
        );
        let (band, _) = roster.band_at(Index::from_zero_based(0)).unwrap();
        assert!(roster.members_of(band).is_empty());
    }

    #[test]
    fn non_member_and_out_of_range_are_distinct_failures() {
        let mut roster = roster();
        assert_eq!(
            run(&mut roster, "removem b/1 m/1").unwrap_err(),
            CommandError::Rejected(RemoveMusicianFromBand::MESSAGE_NOT_IN_BAND.into())
        );
        assert!(matches!(
            run(&mut roster, "removem b/3 m/1"),
            Err(CommandError::OutOfRange(_))
        ));
    }
}
