//! Terminal console: typewriter narration on the writer, lines from the reader.

use narrative_core::{LineSource, Narrator, PromptError};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::config::GameConfig;

pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    text_delay: Duration,
    clear_lines: usize,
    farewell_pause: Duration,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W, config: &GameConfig) -> Self {
        Self {
            input,
            output,
            text_delay: config.text_delay(),
            clear_lines: config.clear_lines,
            farewell_pause: config.farewell_pause(),
        }
    }
}

impl<R: BufRead, W: Write> Narrator for TerminalConsole<R, W> {
    fn say(&mut self, text: &str) {
        if self.text_delay.is_zero() {
            let _ = writeln!(self.output, "{text}");
            return;
        }
        for ch in text.chars() {
            let _ = write!(self.output, "{ch}");
            let _ = self.output.flush();
            thread::sleep(self.text_delay);
        }
        let _ = writeln!(self.output);
    }

    fn show(&mut self, text: &str) {
        let _ = writeln!(self.output, "{text}");
    }

    fn clear(&mut self) {
        let _ = write!(self.output, "{}", "\n".repeat(self.clear_lines));
    }

    fn pause(&mut self) {
        let _ = self.output.flush();
        thread::sleep(self.farewell_pause);
    }
}

impl<R: BufRead, W: Write> LineSource for TerminalConsole<R, W> {
    fn read_line(&mut self) -> Result<String, PromptError> {
        write!(self.output, "> ")?;
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fail choice matching like any other typo.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(PromptError::Closed);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
