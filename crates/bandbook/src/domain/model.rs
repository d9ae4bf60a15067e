//! Domain models for bands, musicians, and their validated fields.

use std::collections::BTreeSet;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::errors::DomainError;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}]+( [\p{L}\p{N}]+)*$").expect("valid name regex"));
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]([A-Za-z0-9+_.-]*[A-Za-z0-9])?@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .expect("valid email regex")
});
static LABEL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}]+$").expect("valid label regex"));

/// Stable identity of a band inside the roster arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BandId(pub(crate) usize);

/// Stable identity of a musician inside the roster arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MusicianId(pub(crate) usize);

/// Display name of a band or musician. Compared case-insensitively for duplicates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if !NAME_PATTERN.is_match(&collapsed) {
            return Err(DomainError::InvalidField {
                field: "Names",
                reason: "should only contain alphanumeric characters and spaces, and it should not be blank",
            });
        }
        Ok(Self(collapsed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether two names identify the same entity.
    pub fn same_as(&self, other: &Name) -> bool {
        self.0.to_lowercase() == other.0.to_lowercase()
    }

    /// Whether any word of the name equals `keyword`, ignoring case.
    pub fn contains_word(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.0
            .split(' ')
            .any(|word| word.to_lowercase() == keyword)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if !PHONE_PATTERN.is_match(trimmed) {
            return Err(DomainError::InvalidField {
                field: "Phone numbers",
                reason: "should only contain numbers, and it should be at least 3 digits long",
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err(DomainError::InvalidField {
                field: "Emails",
                reason: "should be of the format local-part@domain",
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Single-word label used for tags, instruments, and genres.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(String);

impl Label {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if !LABEL_PATTERN.is_match(trimmed) {
            return Err(DomainError::InvalidField {
                field: "Tags, instruments and genres",
                reason: "should be a single alphanumeric word",
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse every raw value into a label set, failing on the first invalid entry.
pub fn parse_labels<'a>(
    raw: impl IntoIterator<Item = &'a str>,
) -> Result<BTreeSet<Label>, DomainError> {
    raw.into_iter().map(Label::parse).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Musician {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub tags: BTreeSet<Label>,
    pub instruments: BTreeSet<Label>,
    pub genres: BTreeSet<Label>,
}

impl Musician {
    pub fn is_same_musician(&self, other: &Musician) -> bool {
        self.name.same_as(&other.name)
    }
}

impl fmt::Display for Musician {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Phone: {}; Email: {}", self.name, self.phone, self.email)?;
        write_labels(f, "Instruments", &self.instruments)?;
        write_labels(f, "Genres", &self.genres)?;
        write_labels(f, "Tags", &self.tags)
    }
}

/// A band and the identities of its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Band {
    pub name: Name,
    pub genres: BTreeSet<Label>,
    pub members: BTreeSet<MusicianId>,
}

impl Band {
    pub fn new(name: Name, genres: BTreeSet<Label>) -> Self {
        Self {
            name,
            genres,
            members: BTreeSet::new(),
        }
    }

    pub fn is_same_band(&self, other: &Band) -> bool {
        self.name.same_as(&other.name)
    }

    pub fn has_member(&self, musician: MusicianId) -> bool {
        self.members.contains(&musician)
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        write_labels(f, "Genres", &self.genres)
    }
}

fn write_labels(f: &mut fmt::Formatter<'_>, heading: &str, labels: &BTreeSet<Label>) -> fmt::Result {
    if labels.is_empty() {
        return Ok(());
    }
    write!(f, "; {heading}: ")?;
    for label in labels {
        write!(f, "[{label}]")?;
    }
    Ok(())
}
