//! Packs and the roster collection.

use serde::{Deserialize, Serialize};

use crate::session::BanList;

use super::general::General;

/// A named collection of generals (武将包).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    pub key: String,
    pub name: String,
    pub generals: Vec<General>,
}

impl Pack {
    /// Builds a pack and stamps its provenance onto every general.
    pub fn new(key: &str, name: &str, mut generals: Vec<General>) -> Self {
        for general in &mut generals {
            general.pack = name.to_string();
            general.pack_key = key.to_string();
        }
        Self {
            key: key.to_string(),
            name: name.to_string(),
            generals,
        }
    }

    pub fn len(&self) -> usize {
        self.generals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generals.is_empty()
    }
}

/// The full roster, as an ordered list of packs.
///
/// Read-only after loading; all draw-time filtering produces fresh vectors.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    packs: Vec<Pack>,
}

impl Roster {
    pub fn new(packs: Vec<Pack>) -> Self {
        Self { packs }
    }

    /// Packs in load order.
    pub fn packs(&self) -> &[Pack] {
        &self.packs
    }

    pub fn pack(&self, key: &str) -> Option<&Pack> {
        self.packs.iter().find(|p| p.key == key)
    }

    /// Total general count across all packs.
    pub fn total_generals(&self) -> usize {
        self.packs.iter().map(Pack::len).sum()
    }

    /// Looks a general up by its unique name, across every pack.
    pub fn find_general(&self, name: &str) -> Option<&General> {
        self.packs
            .iter()
            .flat_map(|p| p.generals.iter())
            .find(|g| g.name == name)
    }

    /// The eligible pool: generals of the selected packs, minus banned names.
    ///
    /// Packs are visited in the order the keys are given; unknown keys are
    /// skipped. Returned generals carry their pack provenance.
    pub fn available(&self, pack_keys: &[&str], bans: &BanList) -> Vec<General> {
        let mut pool = Vec::new();
        for key in pack_keys {
            if let Some(pack) = self.pack(key) {
                for general in &pack.generals {
                    if !bans.is_banned(&general.name) {
                        pool.push(general.clone());
                    }
                }
            }
        }
        pool
    }

    /// Case-insensitive substring search over general names, optionally
    /// limited to one pack.
    pub fn search(&self, query: &str, pack_filter: Option<&str>) -> Vec<&General> {
        let query = query.to_lowercase();
        self.packs
            .iter()
            .filter(|p| pack_filter.map_or(true, |key| p.key == key))
            .flat_map(|p| p.generals.iter())
            .filter(|g| query.is_empty() || g.name.to_lowercase().contains(&query))
            .collect()
    }
}
