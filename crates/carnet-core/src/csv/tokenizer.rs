//! Quote-aware CSV tokenizer.
//!
//! Input is arbitrary user-edited text, not assumed to be valid CSV. The
//! tokenizer never fails: every character is routed through [`transition`],
//! a two-state machine, and the resulting actions are applied to a
//! [`RowAccumulator`].

use std::iter::Peekable;
use std::mem;
use std::str::Chars;

use super::dialect::Separator;

/// Fields of one logical CSV line, already trimmed
pub type RawRow = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Unquoted,
    Quoted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Append the character to the current field
    Push(char),
    /// `""` inside quotes: append one `"` and consume the second one
    PushEscapedQuote,
    EndField,
    /// `skip_next` consumes the `\n` of a `\r\n` pair
    EndRow { skip_next: bool },
    /// Quote characters that only switch state
    Skip,
}

fn transition(state: State, ch: char, next: Option<char>, separator: char) -> (State, Action) {
    match (state, ch) {
        (State::Quoted, '"') if next == Some('"') => (State::Quoted, Action::PushEscapedQuote),
        (State::Quoted, '"') => (State::Unquoted, Action::Skip),
        (State::Quoted, c) => (State::Quoted, Action::Push(c)),

        (State::Unquoted, '"') => (State::Quoted, Action::Skip),
        (State::Unquoted, c) if c == separator => (State::Unquoted, Action::EndField),
        (State::Unquoted, '\r') => (
            State::Unquoted,
            Action::EndRow {
                skip_next: next == Some('\n'),
            },
        ),
        (State::Unquoted, '\n') => (State::Unquoted, Action::EndRow { skip_next: false }),
        (State::Unquoted, c) => (State::Unquoted, Action::Push(c)),
    }
}

#[derive(Default)]
struct RowAccumulator {
    field: String,
    row: RawRow,
    rows: Vec<RawRow>,
}

impl RowAccumulator {
    fn end_field(&mut self) {
        self.row.push(self.field.trim().to_string());
        self.field.clear();
    }

    fn end_row(&mut self) {
        self.end_field();
        let row = mem::take(&mut self.row);
        // Blank lines never become rows
        if row.iter().any(|f| !f.is_empty()) {
            self.rows.push(row);
        }
    }

    fn has_pending(&self) -> bool {
        !self.field.is_empty() || !self.row.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    separator: Separator,
}

impl Tokenizer {
    pub fn new(separator: Separator) -> Self {
        Self { separator }
    }

    pub fn tokenize(&self, text: &str) -> Vec<RawRow> {
        let separator = self.separator.as_char();
        let mut chars: Peekable<Chars<'_>> = text.chars().peekable();
        let mut state = State::Unquoted;
        let mut acc = RowAccumulator::default();

        while let Some(ch) = chars.next() {
            let (next_state, action) = transition(state, ch, chars.peek().copied(), separator);
            state = next_state;

            match action {
                Action::Push(c) => acc.field.push(c),
                Action::PushEscapedQuote => {
                    acc.field.push('"');
                    chars.next();
                }
                Action::EndField => acc.end_field(),
                Action::EndRow { skip_next } => {
                    if skip_next {
                        chars.next();
                    }
                    acc.end_row();
                }
                Action::Skip => {}
            }
        }

        if state == State::Quoted {
            // Unterminated quote: whatever was collected stays in the last field
            tracing::debug!("input ended inside a quoted field");
        }

        // Missing final newline
        if acc.has_pending() {
            acc.end_row();
        }

        acc.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comma(text: &str) -> Vec<RawRow> {
        Tokenizer::new(Separator::Comma).tokenize(text)
    }

    #[test]
    fn test_quoted_separator() {
        assert_eq!(comma("a,\"b,c\",d"), vec![vec!["a", "b,c", "d"]]);
    }

    #[test]
    fn test_escaped_quote() {
        assert_eq!(comma("a,\"b\"\"c\",d"), vec![vec!["a", "b\"c", "d"]]);
    }

    #[test]
    fn test_mixed_line_endings() {
        let rows = comma("a,b\r\nc,d\re,f\ng,h");
        assert_eq!(
            rows,
            vec![
                vec!["a", "b"],
                vec!["c", "d"],
                vec!["e", "f"],
                vec!["g", "h"],
            ]
        );
    }

    #[test]
    fn test_blank_lines_dropped() {
        let rows = comma("\n\na,b\n   \n , \n\r\nc,d\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_newline_inside_quotes() {
        let rows = comma("word,\"line one\nline two\"\nnext,row");
        assert_eq!(
            rows,
            vec![vec!["word", "line one\nline two"], vec!["next", "row"]]
        );
    }

    #[test]
    fn test_fields_trimmed_even_when_quoted() {
        assert_eq!(comma("  a  ,\"  b  \" ,c "), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_semicolon_separator_leaves_commas() {
        let rows = Tokenizer::new(Separator::Semicolon).tokenize("a,b;c");
        assert_eq!(rows, vec![vec!["a,b", "c"]]);
    }

    #[test]
    fn test_unterminated_quote_keeps_text() {
        assert_eq!(comma("a,\"b,c\nd"), vec![vec!["a", "b,c\nd"]]);
    }

    #[test]
    fn test_trailing_empty_fields_kept() {
        assert_eq!(comma("a,,\n"), vec![vec!["a", "", ""]]);
    }

    #[test]
    fn test_quotes_mid_field() {
        assert_eq!(comma("ab\"c,d\"e,f"), vec![vec!["abc,de", "f"]]);
    }

    #[test]
    fn test_empty_input() {
        assert!(comma("").is_empty());
        assert!(comma("\r\n\n").is_empty());
    }
}
