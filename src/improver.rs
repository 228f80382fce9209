//! Password improver - appends characters until the password is Very Strong.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secrecy::{ExposeSecret, SecretString};

use crate::charset::{CharacterClasses, DIGITS, STRENGTH_SPECIALS, UPPERCASE, full_pool};
use crate::error::{GenieError, Result};
use crate::evaluator::{StrengthCategory, classify};
use crate::generator::random_chars;

/// Characters appended unconditionally on every round.
pub const IMPROVEMENT_CHUNK: usize = 4;

/// Upper bound on improvement rounds before giving up.
///
/// Every round adds at least [`IMPROVEMENT_CHUNK`] characters and fills every
/// missing class except lowercase, so real passwords finish in a handful of
/// rounds. Hitting the cap means the scoring rules no longer match the improver.
pub const MAX_IMPROVEMENT_ROUNDS: usize = 100;

/// Result of [`improve_until_very_strong`].
#[derive(Debug)]
pub struct Improvement {
    pub password: SecretString,
    /// Actions applied during the final round only.
    pub explanations: Vec<String>,
    pub rounds: usize,
}

/// Runs one improvement round, returning the longer password and the actions applied.
pub fn improve_once(password: &SecretString) -> (SecretString, Vec<String>) {
    improve_once_with_rng(&mut OsRng, password)
}

/// Same as [`improve_once`] with a caller-supplied cryptographically secure source.
pub fn improve_once_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    password: &SecretString,
) -> (SecretString, Vec<String>) {
    let mut improved = password.expose_secret().to_string();
    let mut explanations = Vec::new();

    improved.push_str(&random_chars(rng, &full_pool(), IMPROVEMENT_CHUNK));
    explanations.push(format!(
        "Added {} random characters to increase length and entropy",
        IMPROVEMENT_CHUNK
    ));

    let classes = CharacterClasses::for_strength(&improved);
    let missing = [
        (classes.has_upper, UPPERCASE, "an uppercase letter"),
        (classes.has_digit, DIGITS, "a digit"),
        (classes.has_special, STRENGTH_SPECIALS, "a special character"),
    ];
    for (present, set, description) in missing {
        if present {
            continue;
        }
        let pool: Vec<char> = set.chars().collect();
        improved.push_str(&random_chars(rng, &pool, 1));
        explanations.push(format!("Added {} ({}) for character variety", description, set_hint(set)));
    }

    (SecretString::new(improved.into()), explanations)
}

fn set_hint(set: &str) -> String {
    match set {
        UPPERCASE => "A-Z".to_string(),
        DIGITS => "0-9".to_string(),
        other => other.to_string(),
    }
}

/// Improves `password` round after round until it classifies as Very Strong.
///
/// A password that is already Very Strong comes back unchanged with no
/// explanations.
///
/// # Errors
/// Returns [`GenieError::ImprovementLimitExceeded`] if the password is still
/// not Very Strong after [`MAX_IMPROVEMENT_ROUNDS`] rounds.
pub fn improve_until_very_strong(password: &SecretString) -> Result<Improvement> {
    improve_until_very_strong_with_rng(&mut OsRng, password)
}

/// Same as [`improve_until_very_strong`] with a caller-supplied source.
pub fn improve_until_very_strong_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    password: &SecretString,
) -> Result<Improvement> {
    let mut current = SecretString::new(password.expose_secret().to_string().into());
    let mut explanations = Vec::new();
    let mut rounds = 0;

    while classify(&current) != StrengthCategory::VeryStrong {
        if rounds == MAX_IMPROVEMENT_ROUNDS {
            #[cfg(feature = "tracing")]
            tracing::error!("Improvement gave up after {} rounds", rounds);
            return Err(GenieError::ImprovementLimitExceeded { rounds });
        }
        // Each round's list replaces the previous one.
        (current, explanations) = improve_once_with_rng(rng, &current);
        rounds += 1;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Improvement round {} applied {} actions, length now {}",
            rounds,
            explanations.len(),
            current.expose_secret().chars().count()
        );
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Password reached Very Strong after {} rounds", rounds);

    Ok(Improvement {
        password: current,
        explanations,
        rounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_improve_once_appends_chunk_and_missing_classes() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let (improved, explanations) = improve_once_with_rng(&mut rng, &secret("abc"));
        let improved = improved.expose_secret();

        assert!(improved.starts_with("abc"));
        let classes = CharacterClasses::for_strength(improved);
        assert!(classes.has_upper && classes.has_digit && classes.has_special);

        // 3 original + 4 chunk + one per class still missing after the chunk
        let added = improved.chars().count() - 3;
        assert_eq!(added, IMPROVEMENT_CHUNK + explanations.len() - 1);
        assert!(explanations[0].contains("random characters"));
    }

    #[test]
    fn test_improve_once_skips_present_classes() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let (improved, explanations) = improve_once_with_rng(&mut rng, &secret("aB1!"));
        assert_eq!(explanations.len(), 1);
        assert_eq!(improved.expose_secret().chars().count(), 8);
    }

    #[test]
    fn test_improve_once_explanation_order() {
        // Find a round whose chunk left uppercase, digit and special all missing.
        let (improved, explanations) = (0..1000)
            .map(|seed| improve_once_with_rng(&mut ChaCha20Rng::seed_from_u64(seed), &secret("")))
            .find(|(_, explanations)| explanations.len() == 4)
            .expect("some seed leaves every class missing after the chunk");

        assert!(explanations[0].contains("random characters"));
        assert!(explanations[1].contains("uppercase"));
        assert!(explanations[2].contains("digit"));
        assert!(explanations[3].contains("special"));

        let chars: Vec<char> = improved.expose_secret().chars().collect();
        assert_eq!(chars.len(), IMPROVEMENT_CHUNK + 3);
        assert!(UPPERCASE.contains(chars[4]));
        assert!(DIGITS.contains(chars[5]));
        assert!(STRENGTH_SPECIALS.contains(chars[6]));
    }

    #[test]
    fn test_improve_until_very_strong_terminates() {
        for seed in 0..50 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let start = secret("a");
            let result = improve_until_very_strong_with_rng(&mut rng, &start).unwrap();
            assert_eq!(classify(&result.password), StrengthCategory::VeryStrong);
            assert!(result.rounds >= 1 && result.rounds <= MAX_IMPROVEMENT_ROUNDS);
            assert!(result.password.expose_secret().starts_with('a'));
        }
    }

    #[test]
    fn test_improve_until_very_strong_from_empty() {
        let result = improve_until_very_strong(&secret("")).unwrap();
        assert_eq!(classify(&result.password), StrengthCategory::VeryStrong);
        assert!(!result.explanations.is_empty());
    }

    #[test]
    fn test_improve_until_very_strong_already_very_strong() {
        let result = improve_until_very_strong(&secret("VeryStrong123!")).unwrap();
        assert_eq!(result.rounds, 0);
        assert!(result.explanations.is_empty());
        assert_eq!(result.password.expose_secret(), "VeryStrong123!");
    }

    #[test]
    fn test_improve_until_keeps_only_last_round_explanations() {
        // "abc" needs two rounds to pass 12 characters; the second round only
        // appends the chunk because every class is already present.
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let result = improve_until_very_strong_with_rng(&mut rng, &secret("abc")).unwrap();
        if result.rounds > 1 {
            assert_eq!(result.explanations.len(), 1);
        }
        assert!(result.explanations[0].contains("random characters"));
    }
}
