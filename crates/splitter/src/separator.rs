//! Separator patterns and regex-based splitting.

use chunkwise_core::AppResult;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

/// A split boundary candidate: a literal string or a regular expression.
///
/// The pattern is compiled once on construction. Literals are escaped first,
/// so both kinds share the same matching path.
#[derive(Clone)]
pub struct Separator {
    pattern: String,
    is_regex: bool,
    compiled: Regex,
}

impl Separator {
    /// Build a literal separator.
    pub fn literal(pattern: impl Into<String>) -> AppResult<Self> {
        let pattern = pattern.into();
        let compiled = Regex::new(&regex::escape(&pattern))?;
        Ok(Self {
            pattern,
            is_regex: false,
            compiled,
        })
    }

    /// Build a regular-expression separator.
    pub fn regex(pattern: impl Into<String>) -> AppResult<Self> {
        let pattern = pattern.into();
        let compiled = Regex::new(&pattern)?;
        Ok(Self {
            pattern,
            is_regex: true,
            compiled,
        })
    }

    /// Build a separator, compiling `pattern` as a regex when `is_regex` is set.
    pub fn new(pattern: impl Into<String>, is_regex: bool) -> AppResult<Self> {
        if is_regex {
            Self::regex(pattern)
        } else {
            Self::literal(pattern)
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_regex(&self) -> bool {
        self.is_regex
    }

    /// Whether the separator occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.compiled.is_match(text)
    }

    /// Split `text` on every occurrence of the separator.
    ///
    /// With `keep_separator`, each matched separator is emitted as its own
    /// element right after the segment that preceded it. Empty fragments are
    /// dropped.
    pub fn split<'t>(&self, text: &'t str, keep_separator: bool) -> Vec<&'t str> {
        let mut pieces = Vec::new();
        let mut last = 0;

        for m in self.compiled.find_iter(text) {
            push_non_empty(&mut pieces, &text[last..m.start()]);
            if keep_separator {
                push_non_empty(&mut pieces, m.as_str());
            }
            last = m.end();
        }
        push_non_empty(&mut pieces, &text[last..]);

        pieces
    }
}

fn push_non_empty<'t>(pieces: &mut Vec<&'t str>, piece: &'t str) {
    if !piece.is_empty() {
        pieces.push(piece);
    }
}

impl fmt::Debug for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Separator")
            .field("pattern", &self.pattern)
            .field("is_regex", &self.is_regex)
            .finish()
    }
}

impl PartialEq for Separator {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.is_regex == other.is_regex
    }
}

impl Eq for Separator {}

impl Serialize for Separator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Separator", 2)?;
        state.serialize_field("pattern", &self.pattern)?;
        state.serialize_field("regex", &self.is_regex)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunkwise_core::AppError;

    #[test]
    fn test_literal_is_escaped() {
        let sep = Separator::literal("a.b").unwrap();
        assert!(sep.is_match("xxa.bxx"));
        assert!(!sep.is_match("xxaXbxx"));
    }

    #[test]
    fn test_split_discards_separator() {
        let sep = Separator::literal("\n\n").unwrap();
        let pieces = sep.split("one\n\ntwo\n\nthree", false);
        assert_eq!(pieces, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_split_keeps_separator() {
        let sep = Separator::literal(", ").unwrap();
        let text = "a, b, c";
        let pieces = sep.split(text, true);
        assert_eq!(pieces, vec!["a", ", ", "b", ", ", "c"]);
        assert_eq!(pieces.concat(), text);
    }

    #[test]
    fn test_split_regex_keeps_matched_text() {
        let sep = Separator::regex(r"\n#{1,6} ").unwrap();
        let text = "intro\n# One\nbody\n### Three\nmore";
        let pieces = sep.split(text, true);
        assert_eq!(pieces, vec!["intro", "\n# ", "One\nbody", "\n### ", "Three\nmore"]);
    }

    #[test]
    fn test_empty_pattern_splits_characters() {
        let sep = Separator::literal("").unwrap();
        assert!(sep.is_match("anything"));
        assert_eq!(sep.split("aé🎮", false), vec!["a", "é", "🎮"]);
    }

    #[test]
    fn test_leading_separator_drops_empty_piece() {
        let sep = Separator::literal("}\n").unwrap();
        assert_eq!(sep.split("}\n{a}\n", false), vec!["{a"]);
    }

    #[test]
    fn test_invalid_regex() {
        let result = Separator::regex("(unclosed");
        assert!(matches!(result, Err(AppError::InvalidPattern(_))));
    }

    #[test]
    fn test_new_dispatches_on_flag() {
        assert!(!Separator::new("[", false).unwrap().is_regex());
        assert!(Separator::new("[", true).is_err());
    }
}
