pub mod csv;
pub mod error;
pub mod ids;
pub mod matcher;
pub mod quiz;
pub mod store;
pub mod words;

pub use csv::{Importer, export_text, import_bytes, import_text};
pub use error::{ImportError, QuizError, StoreError};
pub use ids::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidGenerator};
pub use matcher::{accepted_answers, match_answer};
pub use quiz::{Attempt, QuizSession, QuizSummary};
pub use store::{MemoryStore, WordStore};
pub use words::WordList;
