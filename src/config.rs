use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::patch::PatchError;

/// Persisted record written once by setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub pizzatower: GameSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSection {
    /// Absolute path of the game installation directory
    pub path: PathBuf,
}

impl Config {
    pub fn new(game_dir: impl Into<PathBuf>) -> Self {
        Config {
            pizzatower: GameSection {
                path: game_dir.into(),
            },
        }
    }

    pub fn game_dir(&self) -> &Path {
        &self.pizzatower.path
    }

    pub fn load(path: &Path) -> Result<Config, PatchError> {
        let content = fs::read_to_string(path).map_err(|e| PatchError::ConfigError {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        serde_json::from_str(&content).map_err(|e| PatchError::ConfigError {
            reason: format!("invalid {}: {}", path.display(), e),
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), PatchError> {
        let content = serde_json::to_string_pretty(self).map_err(|e| PatchError::ConfigError {
            reason: e.to_string(),
        })?;
        fs::write(path, content + "\n").map_err(|e| PatchError::io(path.display(), e))
    }
}
