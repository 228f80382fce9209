//! Random password generation from the full 94-character pool.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use secrecy::SecretString;

use crate::charset::full_pool;
use crate::error::{GenieError, Result};

/// Longest password the generator will produce.
pub const MAX_PASSWORD_LENGTH: usize = 4096;

/// Generates a password of `length` characters using the operating system CSPRNG.
///
/// # Errors
/// Returns [`GenieError::InvalidLength`] when `length` is zero or above
/// [`MAX_PASSWORD_LENGTH`].
pub fn generate(length: usize) -> Result<SecretString> {
    generate_with_rng(&mut OsRng, length)
}

/// Same as [`generate`] with a caller-supplied cryptographically secure source.
pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R, length: usize) -> Result<SecretString> {
    if length == 0 {
        return Err(GenieError::InvalidLength(
            "length must be at least 1".to_string(),
        ));
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(GenieError::InvalidLength(format!(
            "length must be at most {}",
            MAX_PASSWORD_LENGTH
        )));
    }

    let pool = full_pool();
    let password = random_chars(rng, &pool, length);

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of {} characters", length);

    Ok(SecretString::new(password.into()))
}

/// Draws `count` characters uniformly from `pool`.
pub(crate) fn random_chars<R: RngCore + CryptoRng>(rng: &mut R, pool: &[char], count: usize) -> String {
    (0..count).map(|_| pool[rng.gen_range(0..pool.len())]).collect()
}

/// Parses user input into a password length.
///
/// Accepts surrounding whitespace; rejects anything that is not an integer
/// between 1 and [`MAX_PASSWORD_LENGTH`].
pub fn parse_length(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| GenieError::InvalidLength(format!("'{}' is not a whole number", trimmed)))?;
    if value <= 0 {
        return Err(GenieError::InvalidLength(format!(
            "{} is not a positive number",
            value
        )));
    }
    match usize::try_from(value) {
        Ok(length) if length <= MAX_PASSWORD_LENGTH => Ok(length),
        _ => Err(GenieError::InvalidLength(format!(
            "{} is larger than the maximum of {}",
            value, MAX_PASSWORD_LENGTH
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use secrecy::ExposeSecret;

    #[test]
    fn test_generate_exact_length_from_pool() {
        let pool = full_pool();
        for length in [1, 2, 12, 64] {
            let pwd = generate(length).unwrap();
            let pwd = pwd.expose_secret();
            assert_eq!(pwd.chars().count(), length);
            assert!(pwd.chars().all(|c| pool.contains(&c)));
        }
    }

    #[test]
    fn test_generate_zero_length_fails() {
        assert!(matches!(generate(0), Err(GenieError::InvalidLength(_))));
    }

    #[test]
    fn test_generate_above_maximum_fails() {
        assert!(generate(MAX_PASSWORD_LENGTH).is_ok());
        assert!(matches!(
            generate(MAX_PASSWORD_LENGTH + 1),
            Err(GenieError::InvalidLength(_))
        ));
    }

    #[test]
    fn test_generate_with_seeded_rng_is_reproducible() {
        let a = generate_with_rng(&mut ChaCha20Rng::seed_from_u64(7), 20).unwrap();
        let b = generate_with_rng(&mut ChaCha20Rng::seed_from_u64(7), 20).unwrap();
        assert_eq!(a.expose_secret(), b.expose_secret());
    }

    #[test]
    fn test_generate_covers_every_class_eventually() {
        let pwd = generate_with_rng(&mut ChaCha20Rng::seed_from_u64(42), 2000).unwrap();
        let classes = crate::charset::CharacterClasses::for_entropy(pwd.expose_secret());
        assert_eq!(classes.count(), 4);
    }

    #[test]
    fn test_parse_length_valid() {
        assert_eq!(parse_length("12"), Ok(12));
        assert_eq!(parse_length("  8\n"), Ok(8));
        assert_eq!(parse_length("4096"), Ok(MAX_PASSWORD_LENGTH));
    }

    #[test]
    fn test_parse_length_too_large() {
        for input in ["4097", "100000000000", "99999999999999999999"] {
            assert!(
                matches!(parse_length(input), Err(GenieError::InvalidLength(_))),
                "expected InvalidLength for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_length_invalid() {
        for input in ["", "abc", "0", "-3", "4.5"] {
            assert!(
                matches!(parse_length(input), Err(GenieError::InvalidLength(_))),
                "expected InvalidLength for {:?}",
                input
            );
        }
    }
}
