//! Answer checking for self-tests.
//!
//! A stored translation may hold several senses separated by `/`, e.g.
//! `impitoyable / sans pitié`. Any single sense is accepted, and so is the
//! whole field typed out.

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Senses joined back with a bare `/`
fn canonical(text: &str) -> String {
    text.split('/').map(str::trim).collect::<Vec<_>>().join("/")
}

/// Accepted senses of `target`, trimmed, original case
pub fn accepted_answers(target: &str) -> Vec<&str> {
    target
        .split('/')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .collect()
}

pub fn match_answer(target: &str, candidate: &str) -> bool {
    let candidate = normalize(candidate);
    let target = target.to_lowercase();

    if target.split('/').map(str::trim).any(|alt| alt == candidate) {
        return true;
    }

    if candidate == target.trim() {
        return true;
    }

    // Full answer typed with different spacing around the slashes
    canonical(&candidate) == canonical(&target)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUTHLESS: &str = "impitoyable / sans pitié";

    #[test]
    fn test_single_sense() {
        assert!(match_answer(RUTHLESS, "sans pitié"));
        assert!(match_answer(RUTHLESS, "impitoyable"));
        assert!(match_answer(RUTHLESS, "  Sans Pitié "));
        assert!(!match_answer(RUTHLESS, "pitié"));
    }

    #[test]
    fn test_whole_field() {
        assert!(match_answer(RUTHLESS, "impitoyable / sans pitié"));
        assert!(match_answer(RUTHLESS, "IMPITOYABLE / SANS PITIÉ"));
    }

    #[test]
    fn test_whole_field_without_spaces() {
        assert!(match_answer(RUTHLESS, "impitoyable/sans pitié"));
        assert!(match_answer("a/b", "a / b"));
    }

    #[test]
    fn test_plain_target() {
        assert!(match_answer("chat", "Chat"));
        assert!(!match_answer("chat", "chats"));
        assert!(!match_answer("chat", ""));
    }

    #[test]
    fn test_senses_are_not_reordered() {
        assert!(!match_answer("a / b", "b / a"));
    }

    #[test]
    fn test_accepted_answers() {
        assert_eq!(accepted_answers(RUTHLESS), vec!["impitoyable", "sans pitié"]);
        assert_eq!(accepted_answers("chat"), vec!["chat"]);
        assert_eq!(accepted_answers(" a // b "), vec!["a", "b"]);
    }
}
