use carnet_types::VocabularyRecord;
use chrono::{DateTime, Utc};

use super::dialect::Dialect;
use super::tokenizer::RawRow;
use crate::ids::IdGenerator;

/// Turns tokenized rows into records.
///
/// Column order is fixed: source, target, optional example. Anything after
/// the third column is ignored.
pub struct RecordBuilder<'a> {
    ids: &'a dyn IdGenerator,
    now: DateTime<Utc>,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(ids: &'a dyn IdGenerator, now: DateTime<Utc>) -> Self {
        Self { ids, now }
    }

    pub fn build(&self, dialect: &Dialect, rows: &[RawRow]) -> Vec<VocabularyRecord> {
        let skip = usize::from(dialect.has_header);

        rows.iter()
            .enumerate()
            .skip(skip)
            .filter_map(|(index, row)| self.build_row(index, row))
            .collect()
    }

    fn build_row(&self, index: usize, row: &[String]) -> Option<VocabularyRecord> {
        let (source, target) = match row {
            [source, target, ..] if !source.trim().is_empty() && !target.trim().is_empty() => {
                (source, target)
            }
            _ => {
                tracing::trace!(row = index, fields = row.len(), "skipping incomplete row");
                return None;
            }
        };

        let example = row.get(2).map(String::as_str);

        match VocabularyRecord::new(self.ids.next_id(), source, target, example, self.now) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::trace!(row = index, "skipping row: {}", e);
                None
            }
        }
    }
}
