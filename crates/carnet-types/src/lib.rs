pub mod types;

pub use types::{Direction, RecordError, VocabularyRecord};
