use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    PathBuf::from(".carnet")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the word list and the setup marker
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl StoreConfig {
    pub fn words_path(&self) -> PathBuf {
        self.data_dir.join("words.json")
    }

    pub fn configured_marker_path(&self) -> PathBuf {
        self.data_dir.join("configured")
    }
}
