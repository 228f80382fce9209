//! Length section - rewards passwords of a comfortable length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionScore;

/// Length from which the length bonus is awarded.
pub const MIN_STRONG_LENGTH: usize = 12;

const LENGTH_POINTS: SectionScore = 2;

/// Awards 2 points when the password has at least 12 characters.
pub fn length_section(password: &SecretString) -> SectionScore {
    if password.expose_secret().chars().count() >= MIN_STRONG_LENGTH {
        return LENGTH_POINTS;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!abcd".to_string().into());
        assert_eq!(length_section(&pwd), 0);
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("123456789012".to_string().into());
        assert_eq!(length_section(&pwd), 2);
    }

    #[test]
    fn test_length_section_counts_characters_not_bytes() {
        // 6 characters, 12 bytes
        let pwd = SecretString::new("éééééé".to_string().into());
        assert_eq!(length_section(&pwd), 0);
    }
}
