//! Roster data loading.
//!
//! Loads packs from an external RON file, with fallback to the built-in
//! roster when the file is missing or malformed.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::builtin::builtin_roster;
use super::general::{Faction, General};
use super::pack::{Pack, Roster};

/// Default data file location, relative to the working directory.
pub const ROSTER_PATH: &str = "assets/data/roster.ron";

/// Roster loading failures.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse roster file: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// On-disk pack definition. Factions are given by their Chinese label.
#[derive(Debug, Clone, Deserialize)]
struct PackDef {
    key: String,
    name: String,
    generals: Vec<GeneralDef>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeneralDef {
    name: String,
    faction: String,
    hp: u8,
    #[serde(default)]
    skills: String,
}

impl Roster {
    /// Loads the roster from the default data file, falling back to the
    /// built-in packs if the file is missing or malformed.
    pub fn load() -> Self {
        match Self::load_from_path(Path::new(ROSTER_PATH)) {
            Ok(roster) => {
                log::info!(
                    "Loaded {} generals in {} packs from {}",
                    roster.total_generals(),
                    roster.packs().len(),
                    ROSTER_PATH
                );
                roster
            }
            Err(RosterError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No roster file at {}; using built-in packs", ROSTER_PATH);
                Self::builtin()
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}. Using built-in packs.", ROSTER_PATH, e);
                Self::builtin()
            }
        }
    }

    /// The built-in default roster.
    pub fn builtin() -> Self {
        builtin_roster()
    }

    pub fn load_from_path(path: &Path) -> Result<Self, RosterError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron_str(&text)
    }

    /// Parses a roster from RON pack definitions.
    pub fn from_ron_str(text: &str) -> Result<Self, RosterError> {
        let defs: Vec<PackDef> = ron::from_str(text)?;
        let packs = defs
            .into_iter()
            .map(|def| {
                let generals = def
                    .generals
                    .into_iter()
                    .map(|g| {
                        General::new(&g.name, Faction::from_label(&g.faction), g.hp, &g.skills)
                    })
                    .collect();
                Pack::new(&def.key, &def.name, generals)
            })
            .collect();
        Ok(Roster::new(packs))
    }
}
