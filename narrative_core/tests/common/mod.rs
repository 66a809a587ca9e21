//! Shared fakes for driving the engine without a terminal.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use game_rules::{PlayerState, SaveData};
use narrative_core::{LineSource, LoadError, Narrator, PersistenceError, PromptError, SaveStore};

/// Console fed from a fixed script that records everything said.
pub struct ScriptedConsole {
    input: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        }
    }

    pub fn said(&self, text: &str) -> bool {
        self.output.iter().any(|line| line.contains(text))
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Narrator for ScriptedConsole {
    fn say(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}

impl LineSource for ScriptedConsole {
    fn read_line(&mut self) -> Result<String, PromptError> {
        self.input.pop_front().ok_or(PromptError::Closed)
    }
}

/// In-memory save slot.
#[derive(Default)]
pub struct MemoryStore {
    pub slot: Option<SaveData>,
    pub fail_writes: bool,
}

impl SaveStore for MemoryStore {
    fn save(&mut self, state: &PlayerState) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full").into());
        }
        self.slot = Some(SaveData::from(state));
        Ok(())
    }

    fn load(&mut self) -> Result<PlayerState, LoadError> {
        self.slot
            .clone()
            .ok_or(LoadError::NotFound)?
            .into_state()
            .map_err(|e| LoadError::Corrupt(e.to_string()))
    }
}
