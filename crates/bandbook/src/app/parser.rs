//! Turning command lines into commands.
//!
//! A command line is a keyword followed by arguments. Arguments are either a free-form
//! preamble or values introduced by a prefix such as `n/` or `b/`. A prefix only counts when
//! it starts the argument string or follows whitespace, so `rock/pop` inside a value is left
//! alone.

use std::collections::HashMap;
use std::fmt;

use crate::app::commands::{
    AddBand, AddMusician, AddMusicianToBand, Clear, Command, CommandError, DeleteBand,
    DeleteMusician, Exit, FindBand, FindMusician, Help, List, MESSAGE_UNKNOWN_COMMAND,
    RemoveMusicianFromBand,
};
use crate::domain::index::Index;

/// Marker introducing a named argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_INSTRUMENT: Prefix = Prefix::new("i/");
pub const PREFIX_GENRE: Prefix = Prefix::new("g/");
pub const PREFIX_BAND_INDEX: Prefix = Prefix::new("b/");
pub const PREFIX_MUSICIAN_INDEX: Prefix = Prefix::new("m/");

/// Tokenized arguments: the preamble plus every value recorded per prefix.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Text before the first recognized prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in order of appearance.
    pub fn all_values(&self, prefix: Prefix) -> Vec<&str> {
        self.values
            .get(&prefix)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Fail when any of the single-valued `prefixes` was given more than once.
    pub fn verify_no_duplicate_prefixes(&self, prefixes: &[Prefix]) -> Result<(), CommandError> {
        let repeated: Vec<&str> = prefixes
            .iter()
            .filter(|prefix| self.values.get(*prefix).is_some_and(|values| values.len() > 1))
            .map(Prefix::as_str)
            .collect();
        if repeated.is_empty() {
            return Ok(());
        }
        Err(CommandError::InvalidArgument(format!(
            "Multiple values specified for the following single-valued field(s): {}",
            repeated.join(" ")
        )))
    }

    /// Whether every one of `prefixes` has at least one value.
    pub fn has_all(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|prefix| self.values.contains_key(prefix))
    }
}

/// Split `args` on the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    let mut previous_is_space = true;
    for (offset, ch) in args.char_indices() {
        if previous_is_space
            && let Some(prefix) = prefixes
                .iter()
                .find(|prefix| args[offset..].starts_with(prefix.as_str()))
        {
            positions.push((offset, *prefix));
        }
        previous_is_space = ch.is_whitespace();
    }

    let preamble_end = positions.first().map(|(offset, _)| *offset).unwrap_or(args.len());
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (slot, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions
            .get(slot + 1)
            .map(|(next, _)| *next)
            .unwrap_or(args.len());
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

/// Parse a user-typed position.
pub fn parse_index(raw: &str) -> Result<Index, CommandError> {
    raw.parse::<Index>().map_err(CommandError::from)
}

/// Parse a full command line into a runnable command.
pub fn parse_command(line: &str) -> Result<Box<dyn Command>, CommandError> {
    let trimmed = line.trim();
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(split) => trimmed.split_at(split),
        None => (trimmed, ""),
    };

    tracing::debug!(command = word, "parsing command");

    let command: Box<dyn Command> = match word {
        AddMusician::COMMAND_WORD => Box::new(AddMusician::parse(args)?),
        AddBand::COMMAND_WORD => Box::new(AddBand::parse(args)?),
        AddMusicianToBand::COMMAND_WORD => Box::new(AddMusicianToBand::parse(args)?),
        RemoveMusicianFromBand::COMMAND_WORD => Box::new(RemoveMusicianFromBand::parse(args)?),
        DeleteMusician::COMMAND_WORD => Box::new(DeleteMusician::parse(args)?),
        DeleteBand::COMMAND_WORD => Box::new(DeleteBand::parse(args)?),
        List::COMMAND_WORD => Box::new(List),
        FindMusician::COMMAND_WORD => Box::new(FindMusician::parse(args)?),
        FindBand::COMMAND_WORD => Box::new(FindBand::parse(args)?),
        Clear::COMMAND_WORD => Box::new(Clear),
        Help::COMMAND_WORD => Box::new(Help),
        Exit::COMMAND_WORD => Box::new(Exit),
        "" => return Err(CommandError::invalid_format(Help::MESSAGE_USAGE)),
        _ => return Err(CommandError::InvalidArgument(MESSAGE_UNKNOWN_COMMAND.into())),
    };
    Ok(command)
}
