//! Roster persistence.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::app::roster::Roster;
use crate::domain::model::{Band, Email, Musician, Name, Phone, parse_labels};

/// Serializable snapshot of the whole roster.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RosterRecord {
    #[serde(default)]
    pub musicians: Vec<MusicianRecord>,
    #[serde(default)]
    pub bands: Vec<BandRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MusicianRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub instruments: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Bands reference their members by musician name.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BandRecord {
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub members: Vec<String>,
}

impl From<&Musician> for MusicianRecord {
    fn from(value: &Musician) -> Self {
        Self {
            name: value.name.to_string(),
            phone: value.phone.to_string(),
            email: value.email.to_string(),
            tags: value.tags.iter().map(ToString::to_string).collect(),
            instruments: value.instruments.iter().map(ToString::to_string).collect(),
            genres: value.genres.iter().map(ToString::to_string).collect(),
        }
    }
}

impl MusicianRecord {
    /// Validate the record back into a domain [`Musician`].
    pub fn into_musician(self) -> Result<Musician> {
        let musician = Musician {
            name: Name::parse(&self.name)?,
            phone: Phone::parse(&self.phone)?,
            email: Email::parse(&self.email)?,
            tags: parse_labels(self.tags.iter().map(String::as_str))?,
            instruments: parse_labels(self.instruments.iter().map(String::as_str))?,
            genres: parse_labels(self.genres.iter().map(String::as_str))?,
        };
        Ok(musician)
    }
}

impl From<&Roster> for RosterRecord {
    fn from(roster: &Roster) -> Self {
        let musicians = roster.musicians().map(|(_, m)| MusicianRecord::from(m)).collect();
        let bands = roster
            .bands()
            .map(|(id, band)| BandRecord {
                name: band.name.to_string(),
                genres: band.genres.iter().map(ToString::to_string).collect(),
                members: roster
                    .members_of(id)
                    .into_iter()
                    .filter_map(|member| roster.musician(member))
                    .map(|member| member.name.to_string())
                    .collect(),
            })
            .collect();
        Self { musicians, bands }
    }
}

impl RosterRecord {
    /// Rebuild a roster, resolving band members by name.
    pub fn into_roster(self) -> Result<Roster> {
        let mut roster = Roster::new();
        let mut by_name = HashMap::new();

        for record in self.musicians {
            let label = record.name.clone();
            let musician = record
                .into_musician()
                .with_context(|| format!("invalid musician '{label}'"))?;
            let key = musician.name.as_str().to_lowercase();
            let id = roster
                .add_musician(musician)
                .with_context(|| format!("invalid musician '{label}'"))?;
            by_name.insert(key, id);
        }

        for record in self.bands {
            let label = record.name.clone();
            let mut band = Band::new(
                Name::parse(&record.name).with_context(|| format!("invalid band '{label}'"))?,
                parse_labels(record.genres.iter().map(String::as_str))
                    .with_context(|| format!("invalid band '{label}'"))?,
            );
            for member in &record.members {
                let id = by_name
                    .get(&member.trim().to_lowercase())
                    .ok_or_else(|| anyhow!("band '{label}' lists unknown member '{member}'"))?;
                band.members.insert(*id);
            }
            roster
                .add_band(band)
                .with_context(|| format!("invalid band '{label}'"))?;
        }

        Ok(roster)
    }
}

/// Reads and writes the roster as pretty JSON.
#[derive(Debug, Clone)]
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted roster, or `None` when no data file exists yet.
    pub fn load(&self) -> Result<Option<Roster>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read data file at {}", self.path.display()))?;
        let record: RosterRecord = serde_json::from_str(&data)
            .with_context(|| format!("invalid roster data in {}", self.path.display()))?;
        let roster = record
            .into_roster()
            .with_context(|| format!("inconsistent roster data in {}", self.path.display()))?;
        tracing::debug!(
            path = %self.path.display(),
            bands = roster.band_count(),
            musicians = roster.musician_count(),
            "roster loaded"
        );
        Ok(Some(roster))
    }

    /// Persist the roster, creating parent directories as needed.
    pub fn save(&self, roster: &Roster) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        }

        let data = serde_json::to_string_pretty(&RosterRecord::from(roster))
            .context("failed to serialize roster")?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed to write data file to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::app::parser::parse_command;

    fn populated() -> Roster {
        let mut roster = Roster::new();
        for line in [
            "add n/Alice Tan p/12345678 e/alice@example.com t/lead i/guitar",
            "add n/Bob Lee p/87654321 e/bob@example.com",
            "addb n/Queen g/rock",
            "addm b/1 m/2",
        ] {
            parse_command(line).unwrap().execute(&mut roster).unwrap();
        }
        roster
    }

    #[test]
    fn load_returns_none_without_file() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let store = RosterStore::new(temp.path().join("missing.json"));
        assert!(store.load()?.is_none());
        Ok(())
    }

    #[test]
    fn saved_roster_loads_with_membership() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let store = RosterStore::new(temp.path().join("data/bandbook.json"));
        store.save(&populated())?;

        let roster = store.load()?.expect("roster saved");
        assert_eq!(roster.musician_count(), 2);
        let (queen, band) = roster.bands().next().expect("band");
        assert_eq!(band.name.as_str(), "Queen");
        let members: Vec<_> = roster
            .members_of(queen)
            .into_iter()
            .filter_map(|id| roster.musician(id))
            .map(|musician| musician.name.to_string())
            .collect();
        assert_eq!(members, vec!["Bob Lee".to_string()]);
        Ok(())
    }

    #[test]
    fn unknown_member_is_an_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("bandbook.json");
        fs::write(
            &path,
            r#"{ "musicians": [], "bands": [ { "name": "Queen", "members": ["Nobody"] } ] }"#,
        )?;
        let err = RosterStore::new(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains("unknown member 'Nobody'"));
        Ok(())
    }

    #[test]
    fn malformed_json_is_an_error() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("bandbook.json");
        fs::write(&path, "not json")?;
        assert!(RosterStore::new(&path).load().is_err());
        Ok(())
    }
}
