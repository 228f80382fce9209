//! Character variety section - one point per recognized class present.

use secrecy::{ExposeSecret, SecretString};
use crate::charset::CharacterClasses;
use super::SectionScore;

/// Awards a point each for lowercase, uppercase, digit and special characters.
///
/// Only the 8-symbol [`STRENGTH_SPECIALS`](crate::charset::STRENGTH_SPECIALS)
/// set counts as special here.
pub fn character_variety_section(password: &SecretString) -> SectionScore {
    CharacterClasses::for_strength(password.expose_secret()).count() as SectionScore
}
