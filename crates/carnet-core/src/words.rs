use carnet_types::VocabularyRecord;
use chrono::{DateTime, Utc};

use crate::error::StoreError;

/// In-memory word collection, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<VocabularyRecord>,
}

impl WordList {
    pub fn new(words: Vec<VocabularyRecord>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VocabularyRecord> {
        self.words.iter()
    }

    pub fn as_slice(&self) -> &[VocabularyRecord] {
        &self.words
    }

    pub fn get(&self, id: &str) -> Option<&VocabularyRecord> {
        self.words.iter().find(|w| w.id == id)
    }

    /// Insert at the front; ids must stay unique
    pub fn add(&mut self, record: VocabularyRecord) -> Result<(), StoreError> {
        if self.get(&record.id).is_some() {
            return Err(StoreError::DuplicateId(record.id));
        }
        self.words.insert(0, record);
        Ok(())
    }

    pub fn record_attempt(
        &mut self,
        id: &str,
        correct: bool,
        at: DateTime<Utc>,
    ) -> Result<&VocabularyRecord, StoreError> {
        let word = self
            .words
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        word.record_attempt(correct, at);
        Ok(&*word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn word(id: &str, source: &str) -> VocabularyRecord {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        VocabularyRecord::new(id, source, "x", None, at).unwrap()
    }

    #[test]
    fn test_add_prepends() {
        let mut list = WordList::default();
        list.add(word("1", "first")).unwrap();
        list.add(word("2", "second")).unwrap();

        let sources: Vec<_> = list.iter().map(|w| w.source.as_str()).collect();
        assert_eq!(sources, vec!["second", "first"]);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut list = WordList::new(vec![word("1", "first")]);
        let err = list.add(word("1", "again")).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(id) if id == "1"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_record_attempt() {
        let mut list = WordList::new(vec![word("1", "a"), word("2", "b")]);
        let at = Utc.with_ymd_and_hms(2024, 2, 2, 0, 0, 0).unwrap();

        list.record_attempt("2", false, at).unwrap();

        assert_eq!(list.get("2").unwrap().error_count, 1);
        assert_eq!(list.get("2").unwrap().last_tested, Some(at));
        assert_eq!(list.get("1").unwrap().last_tested, None);
        assert!(matches!(
            list.record_attempt("missing", true, at),
            Err(StoreError::NotFound(_))
        ));
    }
}
