use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreErrorCode};

pub const FAVORITES_FILE: &str = "favorites.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub command: String,
    pub description: String,
    pub category: String,
    /// Seconds since the Unix epoch at the time the favorite was added.
    pub timestamp: u64,
}

/// User-created favorite commands, persisted to a JSON file. No two entries
/// share the same command string; add and remove write through immediately.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    /// A missing or unreadable favorites file starts an empty store rather
    /// than failing startup.
    pub fn load(path: &Path) -> Self {
        let entries = fs::read(path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default();

        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self, category: Option<&str>) -> Vec<&FavoriteEntry> {
        match category {
            Some(category) => self
                .entries
                .iter()
                .filter(|entry| entry.category == category)
                .collect(),
            None => self.entries.iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a favorite and persist. Returns false without saving when the
    /// same command string is already stored.
    pub fn add(
        &mut self,
        command: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<bool, CoreError> {
        let command = command.into();
        if self.entries.iter().any(|entry| entry.command == command) {
            return Ok(false);
        }

        self.entries.push(FavoriteEntry {
            command,
            description: description.into(),
            category: category.into(),
            timestamp: unix_timestamp(),
        });
        self.save()?;
        Ok(true)
    }

    /// Remove the favorite with the given command string and persist.
    /// Returns false when nothing matched.
    pub fn remove(&mut self, command: &str) -> Result<bool, CoreError> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.command != command);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    fn save(&self) -> Result<(), CoreError> {
        let json = serde_json::to_vec_pretty(&self.entries).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Parse,
                format!("failed to serialize favorites: {e}"),
            )
        })?;
        fs::write(&self.path, json).map_err(|e| {
            CoreError::new(
                CoreErrorCode::Io,
                format!("failed to write {}: {e}", self.path.display()),
            )
        })
    }
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
