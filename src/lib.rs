//! Wujiang - a Sanguosha (三国杀) general drafting library
//!
//! Draws random general sets from a curated roster and parses raw ability
//! text into structured skill entries.

pub mod draw;
pub mod roster;
pub mod session;
pub mod skills;

// Re-export commonly used types
pub use draw::{draw_for_mode, draw_partitioned, shuffle, DrawError, DrawGroup, GameMode};
pub use roster::{Faction, General, Pack, Roster, RosterError};
pub use session::BanList;
pub use skills::{segment, Lexicon, Segmenter, SkillEntry};
