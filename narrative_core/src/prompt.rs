//! Ports for talking to the player.
//!
//! Front ends implement [`Narrator`] and [`LineSource`]; the blanket
//! [`ChoicePrompter`] impl then supplies numbered menus with re-prompting.

use thiserror::Error;

/// Errors from the input side of the console.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The input stream ended; no more choices can be read.
    #[error("input closed")]
    Closed,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A menu with nothing to pick would re-prompt forever.
    #[error("no options to choose from")]
    NoOptions,
}

/// Output side of the console.
pub trait Narrator {
    /// Narrate one line.
    fn say(&mut self, text: &str);

    /// Print a block as-is, without narration effects.
    fn show(&mut self, text: &str) {
        self.say(text);
    }

    fn clear(&mut self) {}

    /// Linger before the process exits.
    fn pause(&mut self) {}
}

/// Input side of the console.
pub trait LineSource {
    fn read_line(&mut self) -> Result<String, PromptError>;
}

/// Asks the player to pick from a list or type free text.
pub trait ChoicePrompter {
    /// Returns the index of the selected option. Invalid input is re-prompted.
    fn choose(&mut self, prompt: &str, options: &[&str]) -> Result<usize, PromptError>;

    /// Returns the trimmed line typed in response to `prompt`.
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError>;
}

impl<T: Narrator + LineSource> ChoicePrompter for T {
    fn choose(&mut self, prompt: &str, options: &[&str]) -> Result<usize, PromptError> {
        if options.is_empty() {
            return Err(PromptError::NoOptions);
        }
        loop {
            self.say(prompt);
            for (i, option) in options.iter().enumerate() {
                self.say(&format!("{}. {}", i + 1, option));
            }
            let input = self.read_line()?;
            match resolve_choice(&input, options) {
                Some(index) => return Ok(index),
                None => self.say("Invalid choice. Please try again."),
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.say(prompt);
        Ok(self.read_line()?.trim().to_string())
    }
}

/// Match player input against option labels.
///
/// Accepts a 1-based index, an exact label, or a prefix that fits exactly one
/// label, all case-insensitive. Blank and ambiguous input match nothing.
pub fn resolve_choice(input: &str, options: &[&str]) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(n) = input.parse::<usize>() {
        if (1..=options.len()).contains(&n) {
            return Some(n - 1);
        }
    }

    let needle = input.to_lowercase();
    if let Some(index) = options.iter().position(|o| o.to_lowercase() == needle) {
        return Some(index);
    }
    let mut matches = options
        .iter()
        .enumerate()
        .filter(|(_, o)| o.to_lowercase().starts_with(&needle));
    match (matches.next(), matches.next()) {
        (Some((index, _)), None) => Some(index),
        _ => None,
    }
}
