//! Lexer splitting format strings into runs of identical characters.
//!
//! A format string has no escapes and no nesting; its only lexeme is a
//! maximal run of one repeated character. `"yyyy-mm-dd"` splits into
//! `["yyyy", "-", "mm", "-", "dd"]`. Splitting is total and never fails.

use crate::parser::tokens::FormatToken;

/// Splits `format` into maximal runs of a single repeated character.
///
/// An empty string yields no runs. The returned slices borrow from the
/// input and cover it exactly.
pub fn split_runs(format: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;

    for (idx, ch) in format.char_indices() {
        if let Some(p) = prev {
            if p != ch {
                runs.push(&format[start..idx]);
                start = idx;
            }
        }
        prev = Some(ch);
    }
    if prev.is_some() {
        runs.push(&format[start..]);
    }
    runs
}

/// Tokenizes a format string into field codes and literal runs.
pub fn tokenize(format: &str) -> Vec<FormatToken> {
    split_runs(format)
        .into_iter()
        .map(FormatToken::classify)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokens::FieldKind;

    #[test]
    fn test_empty_input() {
        assert!(split_runs("").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_single_run() {
        assert_eq!(split_runs("yyyy"), vec!["yyyy"]);
    }

    #[test]
    fn test_runs_are_maximal() {
        assert_eq!(
            split_runs("yyyy-mm-dd"),
            vec!["yyyy", "-", "mm", "-", "dd"]
        );
        assert_eq!(split_runs("aaaabbbbcccc"), vec!["aaaa", "bbbb", "cccc"]);
    }

    #[test]
    fn test_case_breaks_a_run() {
        // h and H are distinct characters and distinct fields
        assert_eq!(split_runs("hH"), vec!["h", "H"]);
    }

    #[test]
    fn test_tokenize_classifies_runs() {
        let tokens = tokenize("dd/mm/yyyy");
        assert_eq!(
            tokens,
            vec![
                FormatToken::Field(FieldKind::Day2),
                FormatToken::Literal("/".to_string()),
                FormatToken::Field(FieldKind::Month2),
                FormatToken::Literal("/".to_string()),
                FormatToken::Field(FieldKind::Year4),
            ]
        );
    }
}
