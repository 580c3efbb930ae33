use std::env;

use serde::{Deserialize, Serialize};

use self::export::ExportConfig;
use self::quiz::QuizConfig;
use self::store::StoreConfig;

pub mod export;
pub mod quiz;
pub mod store;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub quiz: QuizConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Defaults overridden by `CARNET_*` environment variables
    pub fn new() -> Self {
        let mut config = Config::default();

        if let Ok(dir) = env::var("CARNET_DATA_DIR") {
            config.store.data_dir = dir.into();
        }

        if let Some(size) = env::var("CARNET_QUIZ_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config.quiz.batch_size = size;
        }

        if let Some(direction) = env::var("CARNET_QUIZ_DIRECTION")
            .ok()
            .and_then(|v| carnet_types::Direction::from_code(&v))
        {
            config.quiz.direction = direction;
        }

        if let Ok(file_name) = env::var("CARNET_EXPORT_FILE") {
            config.export.file_name = file_name;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carnet_types::Direction;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{ "quiz": { "batch_size": 5 } }"#).unwrap();

        assert_eq!(config.quiz.batch_size, 5);
        assert_eq!(config.quiz.direction, Direction::SourceToTarget);
        assert_eq!(config.export.file_name, "vocabulaire_export.csv");
        assert_eq!(config.store.data_dir, std::path::PathBuf::from(".carnet"));
    }

    #[test]
    fn test_direction_code_in_json() {
        let config: Config = serde_json::from_str(r#"{ "quiz": { "direction": "FR_EN" } }"#).unwrap();
        assert_eq!(config.quiz.direction, Direction::TargetToSource);
        assert_eq!(config.quiz.batch_size, 10);
    }
}
