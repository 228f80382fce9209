//! Password strength evaluator - scoring, classification and the combined report.

use std::fmt;

use secrecy::SecretString;

use crate::entropy::{CrackTime, crack_time, entropy};
use crate::sections::{SectionScore, character_variety_section, length_section};

/// Highest score the sections can award together.
pub const MAX_SCORE: SectionScore = 6;

/// Coarse strength label derived from the section score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthCategory {
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthCategory {
    pub fn from_score(score: SectionScore) -> Self {
        match score {
            s if s >= 6 => StrengthCategory::VeryStrong,
            s if s >= 4 => StrengthCategory::Strong,
            s if s >= 2 => StrengthCategory::Moderate,
            _ => StrengthCategory::Weak,
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Moderate => "Moderate",
            StrengthCategory::Strong => "Strong",
            StrengthCategory::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Sums the points of every scoring section.
pub fn score(password: &SecretString) -> SectionScore {
    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionScore); 2] = [
        ("length", length_section),
        ("variety", character_variety_section),
    ];

    let mut total = 0;
    for (_section_name, section_fn) in sections {
        let points = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!("Section {} awarded {} points", _section_name, points);

        total += points;
    }
    total
}

/// Classifies a password as Weak, Moderate, Strong or Very Strong.
pub fn classify(password: &SecretString) -> StrengthCategory {
    StrengthCategory::from_score(score(password))
}

/// Everything the session reports about a password.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordEvaluation {
    pub strength: StrengthCategory,
    pub score: SectionScore,
    pub entropy: f64,
    pub crack_time: CrackTime,
}

/// Evaluates strength, entropy and crack time in one pass.
pub fn evaluate(password: &SecretString) -> PasswordEvaluation {
    let score = score(password);
    let entropy = entropy(password);
    let evaluation = PasswordEvaluation {
        strength: StrengthCategory::from_score(score),
        score,
        entropy,
        crack_time: crack_time(entropy),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Evaluated password: score {}/{}, {} bits",
        evaluation.score,
        MAX_SCORE,
        evaluation.entropy
    );

    evaluation
}
