//! Front-end configuration, read from an optional TOML file.
//!
//! ```toml
//! save_file = "adventure_save.json"
//! text_delay_ms = 30
//! clear_lines = 100
//! farewell_pause_ms = 2000
//! ```
//!
//! Every key is optional. CLI flags override the file.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Single save slot.
    pub save_file: PathBuf,
    /// Typewriter delay per character.
    pub text_delay_ms: u64,
    /// Blank lines printed to clear the screen.
    pub clear_lines: usize,
    pub farewell_pause_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from("adventure_save.json"),
            text_delay_ms: 30,
            clear_lines: 100,
            farewell_pause_ms: 2000,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        Ok(config)
    }

    /// Drop all pacing: no typewriter effect, no farewell pause.
    pub fn instant(mut self) -> Self {
        self.text_delay_ms = 0;
        self.farewell_pause_ms = 0;
        self
    }

    pub fn text_delay(&self) -> Duration {
        Duration::from_millis(self.text_delay_ms)
    }

    pub fn farewell_pause(&self) -> Duration {
        Duration::from_millis(self.farewell_pause_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("adventure.toml");
        std::fs::write(&path, "text_delay_ms = 5\nsave_file = \"slot.json\"\n").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.text_delay_ms, 5);
        assert_eq!(config.save_file, PathBuf::from("slot.json"));
        assert_eq!(config.clear_lines, 100);
        assert_eq!(config.farewell_pause(), Duration::from_secs(2));
    }

    #[test]
    fn test_missing_or_bad_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(GameConfig::load(&dir.path().join("nope.toml")).is_err());

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "text_delay_ms = \"fast\"").unwrap();
        let err = GameConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_instant_removes_pacing() {
        let config = GameConfig::default().instant();
        assert!(config.text_delay().is_zero());
        assert!(config.farewell_pause().is_zero());
        assert_eq!(config.save_file, GameConfig::default().save_file);
    }
}
