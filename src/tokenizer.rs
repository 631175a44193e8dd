//! Token normalization
//!
//! Raw text is reduced to comma-separated, uppercased, punctuation-trimmed
//! tokens. Any run of characters other than ASCII letters, apostrophes
//! (straight, curly and backtick), `&`, `.` and `-` becomes a single comma.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that separate tokens after collapsing
pub const SPLIT_CHARS: [char; 2] = [' ', ','];

/// Characters stripped from both ends of every token
pub const TRIM_CHARS: [char; 5] = ['.', '-', '&', '’', '\''];

/// Separator written between tokens in joined output
pub const JOIN: &str = ",";

static SEPARATOR_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^’'`&.a-zA-Z\-]+").expect("separator pattern is a valid regex")
});

/// Normalize a single raw piece: trim the fixed punctuation set and uppercase
pub fn normalize(piece: &str) -> String {
    piece.trim_matches(&TRIM_CHARS[..]).to_uppercase()
}

/// Collapse, split and normalize a text fragment
///
/// Empty pieces are kept so that joining the result reproduces the separator
/// layout of the input; [`split_joined`] drops them later.
pub fn tokenize_fragment(text: &str) -> Vec<String> {
    SEPARATOR_RUN
        .replace_all(text, JOIN)
        .split(&SPLIT_CHARS[..])
        .map(normalize)
        .collect()
}

/// Tokenize a fragment and join the tokens with commas
pub fn fragment_to_joined(text: &str) -> String {
    tokenize_fragment(text).join(JOIN)
}

/// Split a joined token string, discarding empty entries
pub fn split_joined(joined: &str) -> impl Iterator<Item = &str> {
    joined.split(&SPLIT_CHARS[..]).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_trims_and_uppercases() {
        assert_eq!(normalize("hello"), "HELLO");
        assert_eq!(normalize("...-end-..."), "END");
        assert_eq!(normalize("'quoted’"), "QUOTED");
        assert_eq!(normalize("&amp&"), "AMP");
        assert_eq!(normalize("don't"), "DON'T");
        assert_eq!(normalize("well-known"), "WELL-KNOWN");
    }

    #[test]
    fn test_tokenize_fragment_collapses_separators() {
        let tokens = tokenize_fragment("Hello, world!  42 times");
        let non_empty: Vec<_> = tokens.iter().filter(|t| !t.is_empty()).collect();
        assert_eq!(non_empty, vec!["HELLO", "WORLD", "TIMES"]);
    }

    #[test]
    fn test_fragment_to_joined() {
        assert_eq!(fragment_to_joined("the cat"), "THE,CAT");
        assert_eq!(fragment_to_joined("end."), "END");
        assert_eq!(fragment_to_joined("a b "), "A,B,");
    }

    #[test]
    fn test_backtick_is_kept_but_not_trimmed() {
        assert_eq!(fragment_to_joined("`tick`"), "`TICK`");
    }

    #[test]
    fn test_split_joined_skips_empty() {
        let tokens: Vec<_> = split_joined(",CAT,,DOG ,").collect();
        assert_eq!(tokens, vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_digits_are_separators() {
        assert_eq!(fragment_to_joined("abc123def"), "ABC,DEF");
    }
}
