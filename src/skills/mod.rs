//! Skill text segmentation.

pub mod lexicon;
pub mod segmenter;

pub use lexicon::Lexicon;
pub use segmenter::{segment, Segmenter, SkillEntry};
