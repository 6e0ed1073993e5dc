//! General roster: records, packs, and data loading.

pub mod builtin;
pub mod general;
pub mod loader;
pub mod pack;

pub use builtin::builtin_roster;
pub use general::{Faction, General};
pub use loader::{RosterError, ROSTER_PATH};
pub use pack::{Pack, Roster};
