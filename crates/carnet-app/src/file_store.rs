use std::fs;
use std::path::{Path, PathBuf};

use carnet_config::store::StoreConfig;
use carnet_core::{StoreError, WordStore};
use carnet_types::VocabularyRecord;

/// Word list kept as pretty JSON next to a `configured` marker file
pub struct JsonFileStore {
    words_path: PathBuf,
    marker_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            words_path: config.words_path(),
            marker_path: config.configured_marker_path(),
        }
    }
}

fn ensure_parent(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<(), StoreError> {
    if path.exists() {
        fs::remove_file(path)?;
        tracing::debug!("Deleted: {}", path.display());
    }
    Ok(())
}

impl WordStore for JsonFileStore {
    fn load_words(&self) -> Result<Vec<VocabularyRecord>, StoreError> {
        if !self.words_path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.words_path)?;
        let words: Vec<VocabularyRecord> = serde_json::from_str(&json).map_err(|e| {
            StoreError::Serialization(format!("{}: {e}", self.words_path.display()))
        })?;

        tracing::debug!(words = words.len(), "Loaded words from {}", self.words_path.display());
        Ok(words)
    }

    fn save_words(&self, words: &[VocabularyRecord]) -> Result<(), StoreError> {
        ensure_parent(&self.words_path)?;

        let json = serde_json::to_string_pretty(words)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        // Write aside, then swap in
        let tmp = self.words_path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.words_path)?;

        tracing::info!(words = words.len(), "Saved words to {}", self.words_path.display());
        Ok(())
    }

    fn is_configured(&self) -> Result<bool, StoreError> {
        Ok(self.marker_path.exists())
    }

    fn set_configured(&self) -> Result<(), StoreError> {
        ensure_parent(&self.marker_path)?;
        fs::write(&self.marker_path, "true")?;
        Ok(())
    }

    fn reset(&self) -> Result<(), StoreError> {
        remove_if_exists(&self.marker_path)?;
        remove_if_exists(&self.words_path)?;
        Ok(())
    }
}
