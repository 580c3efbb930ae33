//! Error types shared across the core crate.

use thiserror::Error;

/// Why an import produced no word list.
///
/// Rows that are merely incomplete never surface here, they are dropped.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input could not be decoded as text at all.
    #[error("Input is not valid UTF-8 text: {0}")]
    Structural(#[from] std::str::Utf8Error),

    /// Decoding and tokenizing worked, but no row made a usable record.
    #[error("The file seems empty or malformed: no valid word found")]
    EmptyOrMalformed,
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("No words to test")]
    NoWords,

    #[error("Test session already finished")]
    Finished,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Duplicate word id: {0}")]
    DuplicateId(String),

    #[error("Word not found: {0}")]
    NotFound(String),

    #[error("Store lock was poisoned")]
    LockPoisoned,
}
