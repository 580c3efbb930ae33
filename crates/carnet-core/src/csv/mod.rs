//! CSV interchange for word lists.
//!
//! Import: separator sniffing on the first line, tokenizing, header
//! detection on the first row, then record building. Export renders every
//! text field quoted so the output always re-imports.

pub mod builder;
pub mod dialect;
pub mod serializer;
pub mod tokenizer;

use carnet_types::VocabularyRecord;

pub use builder::RecordBuilder;
pub use dialect::{Dialect, Separator, detect_separator, is_header};
pub use serializer::{EXPORT_HEADER, export_text};
pub use tokenizer::{RawRow, Tokenizer};

use crate::error::ImportError;
use crate::ids::{Clock, IdGenerator, SystemClock, UuidGenerator};

const BOM: char = '\u{feff}';

/// Tokenize `text` and decide its dialect.
///
/// `text` is expected without a byte-order mark.
pub fn read_rows(text: &str) -> (Dialect, Vec<RawRow>) {
    let separator = detect_separator(text);
    let rows = Tokenizer::new(separator).tokenize(text);
    let dialect = Dialect::new(separator, rows.first());

    tracing::debug!(
        separator = %separator.as_char(),
        has_header = dialect.has_header,
        rows = rows.len(),
        "detected csv dialect"
    );

    (dialect, rows)
}

/// CSV importer with injectable id and time sources
pub struct Importer<G = UuidGenerator, C = SystemClock> {
    ids: G,
    clock: C,
}

impl Importer {
    pub fn new() -> Self {
        Self {
            ids: UuidGenerator,
            clock: SystemClock,
        }
    }
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator, C: Clock> Importer<G, C> {
    pub fn with_sources(ids: G, clock: C) -> Self {
        Self { ids, clock }
    }

    /// Every valid record in `raw`; an empty list is not an error here
    pub fn parse(&self, raw: &str) -> Vec<VocabularyRecord> {
        let text = raw.strip_prefix(BOM).unwrap_or(raw);

        if text.trim().is_empty() {
            return Vec::new();
        }

        let (dialect, rows) = read_rows(text);
        let builder = RecordBuilder::new(&self.ids, self.clock.now());
        let records = builder.build(&dialect, &rows);

        let data_rows = rows.len() - usize::from(dialect.has_header);
        if records.len() < data_rows {
            tracing::debug!(
                dropped = data_rows - records.len(),
                "rows without both terms were skipped"
            );
        }

        records
    }

    pub fn import_text(&self, raw: &str) -> Result<Vec<VocabularyRecord>, ImportError> {
        let records = self.parse(raw);

        if records.is_empty() {
            tracing::warn!("import produced no words");
            return Err(ImportError::EmptyOrMalformed);
        }

        tracing::info!(records = records.len(), "imported words from csv");
        Ok(records)
    }

    pub fn import_bytes(&self, raw: &[u8]) -> Result<Vec<VocabularyRecord>, ImportError> {
        let text = std::str::from_utf8(raw)?;
        self.import_text(text)
    }
}

pub fn import_text(raw: &str) -> Result<Vec<VocabularyRecord>, ImportError> {
    Importer::new().import_text(raw)
}

pub fn import_bytes(raw: &[u8]) -> Result<Vec<VocabularyRecord>, ImportError> {
    Importer::new().import_bytes(raw)
}
