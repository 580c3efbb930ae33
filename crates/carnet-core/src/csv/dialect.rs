use super::tokenizer::RawRow;

/// Words that mark the first row as a column header
pub const HEADER_KEYWORDS: [&str; 8] = [
    "english",
    "anglais",
    "french",
    "francais",
    "français",
    "mot",
    "word",
    "traduction",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Comma,
    Semicolon,
}

impl Separator {
    pub fn as_char(&self) -> char {
        match self {
            Separator::Comma => ',',
            Separator::Semicolon => ';',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dialect {
    pub separator: Separator,
    /// Row 0 is a header and is not turned into a record
    pub has_header: bool,
}

/// Pick the separator from the first line of `text`.
///
/// Raw characters are counted, quoted content included. Semicolon wins
/// only on a strict majority.
pub fn detect_separator(text: &str) -> Separator {
    let first_line = text.split('\n').next().unwrap_or_default();

    let (commas, semicolons) = first_line.chars().fold((0usize, 0usize), |(c, s), ch| match ch {
        ',' => (c + 1, s),
        ';' => (c, s + 1),
        _ => (c, s),
    });

    if semicolons > commas {
        Separator::Semicolon
    } else {
        Separator::Comma
    }
}

/// Substring match of any header keyword against the lower-cased row
pub fn is_header(row: &[String]) -> bool {
    let joined = row.join(" ").to_lowercase();
    HEADER_KEYWORDS.iter().any(|k| joined.contains(k))
}

impl Dialect {
    pub fn new(separator: Separator, first_row: Option<&RawRow>) -> Self {
        Self {
            separator,
            has_header: first_row.is_some_and(|row| is_header(row)),
        }
    }
}
