//! Strength scoring sections
//!
//! Each section awards points for one aspect of a password. The evaluator
//! sums them into the strength score.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

/// Points awarded by a single section.
pub type SectionScore = u8;
