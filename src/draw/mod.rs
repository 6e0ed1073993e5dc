//! Random draws: shuffling, partitioned selection, and game modes.

pub mod mode;
pub mod selector;
pub mod shuffle;

pub use mode::{draw_for_mode, DrawGroup, GameMode, GENERALS_PER_PLAYER, LANDLORD_SIZES};
pub use selector::{draw_partitioned, DrawError};
pub use shuffle::shuffle;
