//! Console collaborator - all user-facing input and output goes through here.

use std::thread;
use std::time::Duration;

use console::{Style, Term};
use inquire::{Confirm, Text};

use crate::error::Result;

/// How a line of output should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Heading,
    Success,
    Warning,
    Danger,
    Info,
}

/// Line-oriented interaction with the user.
pub trait Console {
    /// Asks for a line of free text.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn display(&mut self, text: &str);

    /// Asks a yes/no question, re-asking until the answer is y/yes/n/no.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    fn display_styled(&mut self, _tone: Tone, text: &str) {
        self.display(text);
    }

    /// Shows a short cosmetic progress animation.
    fn progress(&mut self, _label: &str) {}
}

/// Terminal colors, one style per [`Tone`].
#[derive(Debug, Clone)]
pub struct Palette {
    pub heading: Style,
    pub success: Style,
    pub warning: Style,
    pub danger: Style,
    pub info: Style,
}

impl Palette {
    /// No colors or attributes at all.
    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            success: Style::new(),
            warning: Style::new(),
            danger: Style::new(),
            info: Style::new(),
        }
    }

    fn style(&self, tone: Tone) -> Option<&Style> {
        match tone {
            Tone::Plain => None,
            Tone::Heading => Some(&self.heading),
            Tone::Success => Some(&self.success),
            Tone::Warning => Some(&self.warning),
            Tone::Danger => Some(&self.danger),
            Tone::Info => Some(&self.info),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            heading: Style::new().magenta().bold(),
            success: Style::new().green(),
            warning: Style::new().yellow(),
            danger: Style::new().red().bold(),
            info: Style::new().cyan(),
        }
    }
}

/// Console backed by the real terminal.
pub struct TerminalConsole {
    term: Term,
    palette: Palette,
    progress_width: usize,
    progress_duration: Duration,
}

impl TerminalConsole {
    pub fn new(palette: Palette) -> Self {
        Self {
            term: Term::stdout(),
            palette,
            progress_width: 30,
            progress_duration: Duration::from_millis(1200),
        }
    }

    fn write_line(&self, line: &str) {
        if let Err(_e) = self.term.write_line(line) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Failed to write to terminal: {}", _e);
        }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        Ok(Text::new(prompt).prompt()?)
    }

    fn display(&mut self, text: &str) {
        self.write_line(text);
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = Confirm::new(prompt)
            .with_help_message("y/yes or n/no")
            .with_error_message("Please answer y, yes, n or no")
            .prompt()?;
        Ok(answer)
    }

    fn display_styled(&mut self, tone: Tone, text: &str) {
        match self.palette.style(tone) {
            Some(style) => {
                let line = style.apply_to(text).to_string();
                self.write_line(&line);
            }
            None => self.write_line(text),
        }
    }

    fn progress(&mut self, label: &str) {
        let width = self.progress_width.max(1);
        let step = self.progress_duration / width as u32;
        for filled in 1..=width {
            let bar = format!(
                "{} [{}{}] {:>3}%",
                label,
                "#".repeat(filled),
                "-".repeat(width - filled),
                filled * 100 / width
            );
            let styled = self.palette.info.apply_to(bar).to_string();
            if self.term.clear_line().and_then(|_| self.term.write_str(&styled)).is_err() {
                break;
            }
            thread::sleep(step);
        }
        self.write_line("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        lines: Vec<String>,
    }

    impl Console for Recorder {
        fn read_line(&mut self, _prompt: &str) -> Result<String> {
            Ok(String::new())
        }

        fn display(&mut self, text: &str) {
            self.lines.push(text.to_string());
        }

        fn confirm(&mut self, _prompt: &str) -> Result<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_display_styled_defaults_to_display() {
        let mut recorder = Recorder { lines: Vec::new() };
        recorder.display_styled(Tone::Danger, "careful");
        recorder.progress("ignored");
        assert_eq!(recorder.lines, vec!["careful".to_string()]);
    }

    #[test]
    fn test_plain_palette_leaves_text_untouched() {
        let palette = Palette::plain();
        let styled = palette.style(Tone::Success).unwrap().apply_to("ok").to_string();
        assert_eq!(styled, "ok");
        assert!(palette.style(Tone::Plain).is_none());
    }
}
