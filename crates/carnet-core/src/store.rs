use std::sync::RwLock;

use carnet_types::VocabularyRecord;
use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::words::WordList;

/// Persistence of the whole word list.
///
/// `save_words` replaces the collection; there are no partial updates.
pub trait WordStore: Send + Sync {
    fn load_words(&self) -> Result<Vec<VocabularyRecord>, StoreError>;

    fn save_words(&self, words: &[VocabularyRecord]) -> Result<(), StoreError>;

    /// Whether initial setup (import or empty start) happened
    fn is_configured(&self) -> Result<bool, StoreError>;

    fn set_configured(&self) -> Result<(), StoreError>;

    /// Drop the setup flag, then the word list.
    ///
    /// A reset that fails halfway leaves an unconfigured store, which the
    /// next setup overwrites.
    fn reset(&self) -> Result<(), StoreError>;

    fn load_list(&self) -> Result<WordList, StoreError> {
        self.load_words().map(WordList::new)
    }
}

/// Finish setup with `words` as the whole collection.
///
/// Words are saved before the setup flag is raised. If raising the flag
/// fails the new words are kept and the store still reads as not configured,
/// so calling this again completes the setup.
pub fn complete_setup<S>(store: &S, words: &[VocabularyRecord]) -> Result<(), StoreError>
where
    S: WordStore + ?Sized,
{
    store.save_words(words)?;
    store.set_configured()?;
    tracing::info!(words = words.len(), "setup complete");
    Ok(())
}

pub fn add_word<S>(store: &S, record: VocabularyRecord) -> Result<WordList, StoreError>
where
    S: WordStore + ?Sized,
{
    let mut list = store.load_list()?;
    list.add(record)?;
    store.save_words(list.as_slice())?;
    Ok(list)
}

pub fn record_attempt<S>(
    store: &S,
    id: &str,
    correct: bool,
    at: DateTime<Utc>,
) -> Result<VocabularyRecord, StoreError>
where
    S: WordStore + ?Sized,
{
    let mut list = store.load_list()?;
    let updated = list.record_attempt(id, correct, at)?.clone();
    store.save_words(list.as_slice())?;
    Ok(updated)
}

/// Store kept in memory, mostly for tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    words: RwLock<Vec<VocabularyRecord>>,
    configured: RwLock<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(words: Vec<VocabularyRecord>) -> Self {
        Self {
            words: RwLock::new(words),
            configured: RwLock::new(true),
        }
    }
}

impl WordStore for MemoryStore {
    fn load_words(&self) -> Result<Vec<VocabularyRecord>, StoreError> {
        let words = self.words.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(words.clone())
    }

    fn save_words(&self, words: &[VocabularyRecord]) -> Result<(), StoreError> {
        let mut stored = self.words.write().map_err(|_| StoreError::LockPoisoned)?;
        *stored = words.to_vec();
        Ok(())
    }

    fn is_configured(&self) -> Result<bool, StoreError> {
        let configured = self.configured.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(*configured)
    }

    fn set_configured(&self) -> Result<(), StoreError> {
        let mut configured = self.configured.write().map_err(|_| StoreError::LockPoisoned)?;
        *configured = true;
        Ok(())
    }

    fn reset(&self) -> Result<(), StoreError> {
        *self.configured.write().map_err(|_| StoreError::LockPoisoned)? = false;
        self.words.write().map_err(|_| StoreError::LockPoisoned)?.clear();
        Ok(())
    }
}
