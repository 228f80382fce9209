//! Password generation and strength estimation library
//!
//! Generates random passwords from a 94-character pool, estimates their
//! entropy and brute-force crack time, classifies their strength and can
//! strengthen them until they classify as Very Strong. An interactive
//! [`Session`] ties it together over any [`Console`].
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate, forwarded to `log` so the
//!   binary can print it with `env_logger` (`RUST_LOG=debug`)
//!
//! # Example
//!
//! ```rust
//! use pw_genie::{StrengthCategory, classify, entropy, generate, improve_until_very_strong};
//!
//! let password = generate(16).expect("length is positive");
//! println!("{} bits", entropy(&password));
//!
//! let improved = improve_until_very_strong(&password).expect("improvement converges");
//! assert_eq!(classify(&improved.password), StrengthCategory::VeryStrong);
//! ```

// Internal modules
mod charset;
mod console;
mod defenses;
mod entropy;
mod error;
mod evaluator;
mod generator;
mod improver;
mod sections;
mod session;

// Public API
pub use charset::{CharacterClasses, DIGITS, LOWERCASE, PUNCTUATION, STRENGTH_SPECIALS, UPPERCASE, full_pool};
pub use console::{Console, Palette, TerminalConsole, Tone};
pub use defenses::{DefensePage, defense_pages, explain_defenses};
pub use entropy::{CrackTime, CrackTimeUnit, GUESSES_PER_SECOND, crack_time, crack_time_at, entropy};
pub use error::{GenieError, Result};
pub use evaluator::{MAX_SCORE, PasswordEvaluation, StrengthCategory, classify, evaluate, score};
pub use generator::{MAX_PASSWORD_LENGTH, generate, generate_with_rng, parse_length};
pub use improver::{
    IMPROVEMENT_CHUNK, Improvement, MAX_IMPROVEMENT_ROUNDS, improve_once, improve_once_with_rng,
    improve_until_very_strong, improve_until_very_strong_with_rng,
};
pub use session::Session;

// Re-export for callers constructing passwords
pub use secrecy::{ExposeSecret, SecretString};
