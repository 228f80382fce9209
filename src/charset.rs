//! Character classes recognized by the generator, estimator and classifier.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";

/// The 32 ASCII punctuation symbols used for generation and entropy.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// The smaller special set the strength classifier and improver look for.
///
/// Deliberately distinct from [`PUNCTUATION`]: a password whose only symbols
/// are e.g. `~` or `?` gets entropy credit for them but no classifier point.
pub const STRENGTH_SPECIALS: &str = "!@#$%^&*";

pub const LOWERCASE_POOL: usize = 26;
pub const UPPERCASE_POOL: usize = 26;
pub const DIGIT_POOL: usize = 10;
pub const PUNCTUATION_POOL: usize = 32;

/// Full generation pool: letters, digits and punctuation (94 characters).
pub fn full_pool() -> Vec<char> {
    LOWERCASE
        .chars()
        .chain(UPPERCASE.chars())
        .chain(DIGITS.chars())
        .chain(PUNCTUATION.chars())
        .collect()
}

/// Which recognized character classes appear in a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl CharacterClasses {
    /// Detects classes, counting any of `specials` as the special class.
    pub fn detect(password: &str, specials: &str) -> Self {
        Self {
            has_lower: password.chars().any(|c| LOWERCASE.contains(c)),
            has_upper: password.chars().any(|c| UPPERCASE.contains(c)),
            has_digit: password.chars().any(|c| DIGITS.contains(c)),
            has_special: password.chars().any(|c| specials.contains(c)),
        }
    }

    /// Classes as seen by the entropy estimator (32-symbol punctuation).
    pub fn for_entropy(password: &str) -> Self {
        Self::detect(password, PUNCTUATION)
    }

    /// Classes as seen by the strength classifier (8-symbol subset).
    pub fn for_strength(password: &str) -> Self {
        Self::detect(password, STRENGTH_SPECIALS)
    }

    /// Sum of the pool sizes of the classes present.
    pub fn pool_size(&self) -> usize {
        let mut size = 0;
        if self.has_lower {
            size += LOWERCASE_POOL;
        }
        if self.has_upper {
            size += UPPERCASE_POOL;
        }
        if self.has_digit {
            size += DIGIT_POOL;
        }
        if self.has_special {
            size += PUNCTUATION_POOL;
        }
        size
    }

    pub fn count(&self) -> usize {
        [self.has_lower, self.has_upper, self.has_digit, self.has_special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}
