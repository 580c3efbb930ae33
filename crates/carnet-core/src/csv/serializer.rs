use carnet_types::VocabularyRecord;
use chrono::SecondsFormat;

pub const EXPORT_HEADER: &str = "English,French,Example,DateAdded,Correct,Errors";

/// Wrap in double quotes, doubling embedded quotes
pub fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

fn render_row(record: &VocabularyRecord) -> String {
    let date_added = record
        .date_added
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    [
        quote(&record.source),
        quote(&record.target),
        quote(record.example_or_empty()),
        quote(&date_added),
        record.correct_count.to_string(),
        record.error_count.to_string(),
    ]
    .join(",")
}

/// Render records as CSV text, header first, one `\n`-terminated line each
pub fn export_text(records: &[VocabularyRecord]) -> String {
    let mut out = String::with_capacity(EXPORT_HEADER.len() + 1 + records.len() * 64);
    out.push_str(EXPORT_HEADER);
    out.push('\n');

    for record in records {
        out.push_str(&render_row(record));
        out.push('\n');
    }

    tracing::debug!(records = records.len(), bytes = out.len(), "rendered csv export");
    out
}
