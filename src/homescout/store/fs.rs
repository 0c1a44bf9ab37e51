use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::SessionStore;
use crate::error::{Result, ScoutError};
use crate::filters::FilterConfig;

const FAVORITES_FILE: &str = "favorites.json";
const FILTERS_FILE: &str = "session-filters.json";

/// File-based session storage. Favorites and filter config live as separate
/// JSON files under one root directory, so each concern can be read, written,
/// and cleared independently.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ScoutError::Io)?;
        }
        Ok(())
    }

    fn favorites_path(&self) -> PathBuf {
        self.root.join(FAVORITES_FILE)
    }

    fn filters_path(&self) -> PathBuf {
        self.root.join(FILTERS_FILE)
    }
}

impl SessionStore for FileStore {
    fn load_favorites(&self) -> Result<BTreeSet<u64>> {
        let path = self.favorites_path();
        if !path.exists() {
            return Ok(BTreeSet::new());
        }
        let content = fs::read_to_string(path).map_err(ScoutError::Io)?;
        let favorites = serde_json::from_str(&content).map_err(ScoutError::Serialization)?;
        Ok(favorites)
    }

    fn save_favorites(&mut self, favorites: &BTreeSet<u64>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(favorites).map_err(ScoutError::Serialization)?;
        fs::write(self.favorites_path(), content).map_err(ScoutError::Io)?;
        Ok(())
    }

    fn load_filters(&self) -> Result<Option<FilterConfig>> {
        let path = self.filters_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(ScoutError::Io)?;
        let config = serde_json::from_str(&content).map_err(ScoutError::Serialization)?;
        Ok(Some(config))
    }

    fn save_filters(&mut self, config: &FilterConfig) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(config).map_err(ScoutError::Serialization)?;
        fs::write(self.filters_path(), content).map_err(ScoutError::Io)?;
        Ok(())
    }

    fn clear_filters(&mut self) -> Result<()> {
        let path = self.filters_path();
        if path.exists() {
            fs::remove_file(path).map_err(ScoutError::Io)?;
        }
        Ok(())
    }
}
