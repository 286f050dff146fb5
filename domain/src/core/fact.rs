//! Fact value object

use serde::{Deserialize, Serialize};

/// A fact returned by the upstream API (Value Object)
///
/// The text is opaque: it is never trimmed, escaped or validated, and the
/// empty string is a legal fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    text: String,
}

impl Fact {
    /// Create a new fact
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the fact text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume and return the inner text
    pub fn into_text(self) -> String {
        self.text
    }

    /// Length of the fact in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl std::fmt::Display for Fact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Fact {
    fn from(s: &str) -> Self {
        Fact::new(s)
    }
}

impl From<String> for Fact {
    fn from(s: String) -> Self {
        Fact::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_creation() {
        let fact = Fact::new("Cats sleep 70% of their lives.");
        assert_eq!(fact.text(), "Cats sleep 70% of their lives.");
    }

    #[test]
    fn test_fact_is_not_trimmed() {
        let fact: Fact = "  padded \n".into();
        assert_eq!(fact.text(), "  padded \n");
        assert_eq!(fact.to_string(), "  padded \n");
    }

    #[test]
    fn test_empty_fact_is_allowed() {
        let fact = Fact::new(String::new());
        assert_eq!(fact.text(), "");
        assert_eq!(fact.char_len(), 0);
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(Fact::new("猫は寝る").char_len(), 4);
    }

    #[test]
    fn test_into_text() {
        let fact = Fact::from(String::from("whiskers"));
        assert_eq!(fact.into_text(), "whiskers");
    }
}
