//! Compiled field patterns.
//!
//! Patterns compile with `regex` when they can. Patterns using look-around
//! or backreferences, e.g. `^(?=.*[A-Z])(?=.*\d).+$`, fall back to
//! `fancy_regex`.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A compiled pattern, matched as an unanchored search.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Linear-time matcher from the `regex` crate
    Standard(regex::Regex),
    /// Backtracking matcher for look-around and backreferences
    Extended(fancy_regex::Regex),
}

impl Pattern {
    /// Compiles a pattern.
    pub fn new(source: &str) -> Result<Self, fancy_regex::Error> {
        match regex::Regex::new(source) {
            Ok(regex) => Ok(Pattern::Standard(regex)),
            Err(_) => fancy_regex::Regex::new(source).map(Pattern::Extended),
        }
    }

    /// Returns the source text of the pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Standard(regex) => regex.as_str(),
            Pattern::Extended(regex) => regex.as_str(),
        }
    }

    /// Returns true if the pattern matches somewhere in `text`.
    ///
    /// A backtracking match that exceeds its limit counts as no match.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Pattern::Standard(regex) => regex.is_match(text),
            Pattern::Extended(regex) => regex.is_match(text).unwrap_or(false),
        }
    }

    /// Returns true if the pattern needed the backtracking engine.
    pub fn is_extended(&self) -> bool {
        matches!(self, Pattern::Extended(_))
    }
}

impl FromStr for Pattern {
    type Err = fancy_regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source)
            .map_err(|e| D::Error::custom(format!("invalid pattern `{source}`: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pattern_uses_standard_engine() {
        let pattern = Pattern::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
        assert!(!pattern.is_extended());
        assert!(pattern.is_match("john@example.com"));
        assert!(!pattern.is_match("john@example"));
    }

    #[test]
    fn test_lookahead_falls_back() {
        let pattern = Pattern::new(r"^(?=.*[A-Z])(?=.*\d).+$").unwrap();
        assert!(pattern.is_extended());
        assert!(pattern.is_match("Password1"));
        assert!(!pattern.is_match("password1"));
        assert!(!pattern.is_match("Password"));
        assert_eq!(pattern.as_str(), r"^(?=.*[A-Z])(?=.*\d).+$");
    }

    #[test]
    fn test_unanchored_search() {
        let pattern: Pattern = "[0-9]{3}".parse().unwrap();
        assert!(pattern.is_match("abc123def"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(Pattern::new("[unclosed").is_err());
        assert!(Pattern::new("(unclosed").is_err());
    }
}
