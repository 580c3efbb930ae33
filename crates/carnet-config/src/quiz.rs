use carnet_types::Direction;
use serde::{Deserialize, Serialize};

fn default_batch_size() -> usize {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct QuizConfig {
    /// Number of words drawn for one self-test
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default)]
    pub direction: Direction,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            direction: Direction::default(),
        }
    }
}
