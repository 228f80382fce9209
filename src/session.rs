//! Interactive session - generate, evaluate, improve and explain, cycle after cycle.

use secrecy::{ExposeSecret, SecretString};

use crate::console::{Console, Tone};
use crate::defenses::explain_defenses;
use crate::error::Result;
use crate::evaluator::{PasswordEvaluation, StrengthCategory, evaluate};
use crate::generator::{MAX_PASSWORD_LENGTH, generate, parse_length};
use crate::improver::improve_until_very_strong;

fn strength_tone(strength: StrengthCategory) -> Tone {
    match strength {
        StrengthCategory::Weak => Tone::Danger,
        StrengthCategory::Moderate => Tone::Warning,
        StrengthCategory::Strong => Tone::Info,
        StrengthCategory::VeryStrong => Tone::Success,
    }
}

/// Drives the question/answer loop over a [`Console`].
pub struct Session<C: Console> {
    console: C,
}

impl<C: Console> Session<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs cycles until the user declines to generate another password.
    ///
    /// # Errors
    /// Console failures and an improver that hits its round cap end the session.
    pub fn run(&mut self) -> Result<()> {
        self.console
            .display_styled(Tone::Heading, "=== Password Genie ===");
        self.console
            .display("Generate a secure password, see how strong it is and make it stronger.");

        loop {
            self.run_cycle()?;
            if !self
                .console
                .confirm("Would you like to generate another password?")?
            {
                break;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Session finished");

        self.console
            .display_styled(Tone::Heading, "Goodbye, and stay safe out there!");
        Ok(())
    }

    /// One generate → evaluate → improve → explain cycle.
    pub fn run_cycle(&mut self) -> Result<()> {
        let length = self.prompt_length()?;

        self.console.progress("Generating password");
        let password = generate(length)?;
        self.console.display_styled(
            Tone::Success,
            &format!("Generated password: {}", password.expose_secret()),
        );

        let evaluation = evaluate(&password);
        self.report("Initial assessment", &evaluation);

        let (password, evaluation) = if evaluation.strength == StrengthCategory::VeryStrong {
            self.console
                .display_styled(Tone::Success, "This password is already Very Strong.");
            (password, evaluation)
        } else if self
            .console
            .confirm("Would you like to improve it until it is Very Strong?")?
        {
            self.improve(&password)?
        } else {
            (password, evaluation)
        };
        self.report("Final assessment", &evaluation);

        if self
            .console
            .confirm("Would you like to see how this password defends against common attacks?")?
        {
            explain_defenses(&mut self.console, &password, &evaluation)?;
        }
        Ok(())
    }

    fn prompt_length(&mut self) -> Result<usize> {
        loop {
            let input = self.console.read_line("Enter the desired password length:")?;
            match parse_length(&input) {
                Ok(length) => return Ok(length),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Rejected length input: {}", e);
                    self.console.display_styled(
                        Tone::Danger,
                        &format!(
                            "{}. Please enter a whole number from 1 to {}.",
                            e, MAX_PASSWORD_LENGTH
                        ),
                    );
                }
            }
        }
    }

    /// Improves the password and shows what changed; the caller reports the result.
    fn improve(&mut self, password: &SecretString) -> Result<(SecretString, PasswordEvaluation)> {
        self.console.progress("Improving password");
        let improvement = improve_until_very_strong(password)?;

        self.console.display_styled(
            Tone::Info,
            &format!(
                "Improvements applied in the final round ({} rounds in total):",
                improvement.rounds
            ),
        );
        for explanation in &improvement.explanations {
            self.console.display(&format!("  - {}", explanation));
        }
        self.console.display_styled(
            Tone::Success,
            &format!("Improved password: {}", improvement.password.expose_secret()),
        );

        let evaluation = evaluate(&improvement.password);
        Ok((improvement.password, evaluation))
    }

    fn report(&mut self, title: &str, evaluation: &PasswordEvaluation) {
        self.console.display_styled(Tone::Heading, &format!("--- {} ---", title));
        self.console.display_styled(
            strength_tone(evaluation.strength),
            &format!("Strength: {}", evaluation.strength),
        );
        self.console
            .display(&format!("Entropy: {} bits", evaluation.entropy));
        self.console.display(&format!(
            "Estimated time to crack: {}",
            evaluation.crack_time
        ));
    }
}
