//! Attack-defense explainer - how a generated password holds up against common attacks.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::console::{Console, Tone};
use crate::error::Result;
use crate::evaluator::PasswordEvaluation;

/// One screen of the explainer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefensePage {
    pub title: String,
    pub body: String,
}

/// Builds the explainer pages for a password and its evaluation.
pub fn defense_pages(password: &SecretString, evaluation: &PasswordEvaluation) -> Vec<DefensePage> {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();
    let digest = format!("{:x}", Sha256::digest(pwd.as_bytes()));

    vec![
        DefensePage {
            title: "Brute-force attacks".to_string(),
            body: format!(
                "An attacker tries every possible combination until one works.\n\
                 Your password carries about {} bits of entropy, so at ten billion\n\
                 guesses per second an exhaustive search would take roughly {}.\n\
                 Every extra character multiplies that time by the size of the pool.",
                evaluation.entropy, evaluation.crack_time
            ),
        },
        DefensePage {
            title: "Dictionary attacks".to_string(),
            body: "Attackers first try real words, names and leaked passwords,\n\
                   often with common substitutions such as @ for a or 0 for o.\n\
                   A randomly generated password contains no words to guess,\n\
                   so a dictionary gives the attacker no shortcut."
                .to_string(),
        },
        DefensePage {
            title: "Rainbow tables".to_string(),
            body: format!(
                "Sites store a hash of your password, not the password itself.\n\
                 The SHA-256 hash of yours is:\n  {}\n\
                 Rainbow tables are precomputed hash lists for short or common\n\
                 passwords. At {} characters of random input yours is far beyond\n\
                 any table, and salted hashing defeats such tables entirely.",
                digest, length
            ),
        },
        DefensePage {
            title: "Credential stuffing and phishing".to_string(),
            body: "Leaked passwords are replayed against other sites, and fake login\n\
                   pages trick people into typing them. No password survives being\n\
                   handed over: use it on one site only, keep it in a password\n\
                   manager and turn on two-factor authentication."
                .to_string(),
        },
    ]
}

/// Pages through the explainer, asking before each subsequent page.
pub fn explain_defenses<C: Console + ?Sized>(
    console: &mut C,
    password: &SecretString,
    evaluation: &PasswordEvaluation,
) -> Result<()> {
    let pages = defense_pages(password, evaluation);
    let total = pages.len();

    for (index, page) in pages.iter().enumerate() {
        if index > 0 && !console.confirm("Continue to the next page?")? {
            break;
        }
        console.display_styled(
            Tone::Heading,
            &format!("[{}/{}] {}", index + 1, total, page.title),
        );
        console.display(&page.body);
    }
    Ok(())
}
