use tracing::debug;

use crate::Token;

/// Used when a line yields no tokens.
pub const DEFAULT_TOKENS: [&str; 6] = ["10", "2", "a5", "100", "b1", "a10"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub tokens: Vec<Token>,
    pub used_default: bool,
}

/// Splits a comma-separated line into tokens.
///
/// Fields are trimmed and blank fields dropped. An empty line, or one made
/// only of separators and whitespace, returns `defaults` instead.
pub fn parse_token_line<S: AsRef<str>>(line: &str, defaults: &[S]) -> ParsedLine {
    let tokens: Vec<Token> = line
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(Token::from)
        .collect();

    if tokens.is_empty() {
        debug!(line, "no tokens in input, using defaults");
        return ParsedLine {
            tokens: defaults.iter().map(|s| Token::from(s.as_ref())).collect(),
            used_default: true,
        };
    }

    ParsedLine {
        tokens,
        used_default: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(parsed: &ParsedLine) -> Vec<&str> {
        parsed.tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_splits_and_trims() {
        let parsed = parse_token_line(" a10 , 2,b1 ", &DEFAULT_TOKENS);
        assert_eq!(texts(&parsed), vec!["a10", "2", "b1"]);
        assert!(!parsed.used_default);
    }

    #[test]
    fn test_drops_blank_fields() {
        let parsed = parse_token_line("a1,, ,b2,", &DEFAULT_TOKENS);
        assert_eq!(texts(&parsed), vec!["a1", "b2"]);
    }

    #[test]
    fn test_empty_line_falls_back() {
        let parsed = parse_token_line("   ", &DEFAULT_TOKENS);
        assert!(parsed.used_default);
        assert_eq!(texts(&parsed), DEFAULT_TOKENS.to_vec());
    }

    #[test]
    fn test_only_separators_falls_back() {
        let parsed = parse_token_line(",,,", &["x"]);
        assert!(parsed.used_default);
        assert_eq!(texts(&parsed), vec!["x"]);
    }

    #[test]
    fn test_single_token_without_commas() {
        let parsed = parse_token_line("b001", &DEFAULT_TOKENS);
        assert_eq!(texts(&parsed), vec!["b001"]);
    }
}
