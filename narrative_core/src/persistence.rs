//! Save/load port and the JSON file adapter.

use game_rules::{PlayerState, SaveData};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can arise while writing a save.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reasons a save could not be restored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("no saved game found")]
    NotFound,

    /// Unreadable, unparsable, or failing schema validation.
    #[error("save is corrupt: {0}")]
    Corrupt(String),
}

/// Where sessions are saved to and restored from.
pub trait SaveStore {
    fn save(&mut self, state: &PlayerState) -> Result<(), PersistenceError>;
    fn load(&mut self) -> Result<PlayerState, LoadError>;
}

/// Stores a single save slot as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveStore for JsonFileStore {
    fn save(&mut self, state: &PlayerState) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(&SaveData::from(state))?;
        // Write beside the target and rename so a failed write never clobbers the old slot.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        info!("saved game for {} to {}", state.name, self.path.display());
        Ok(())
    }

    fn load(&mut self) -> Result<PlayerState, LoadError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("no save at {}", self.path.display());
                return Err(LoadError::NotFound);
            }
            Err(e) => return Err(LoadError::Corrupt(e.to_string())),
        };
        let data: SaveData =
            serde_json::from_str(&content).map_err(|e| LoadError::Corrupt(e.to_string()))?;
        let state = data
            .into_state()
            .map_err(|e| LoadError::Corrupt(e.to_string()))?;
        info!("loaded game for {} from {}", state.name, self.path.display());
        Ok(state)
    }
}
