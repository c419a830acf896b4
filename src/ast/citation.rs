//! Citation records attached to `Cite` inlines.

use super::inline::Inline;
use super::tags::CitationMode;

/// An opaque citation counter.
///
/// Pandoc emits integers for `citationHash` and `citationNoteNum`, but the
/// codec does not interpret them; whatever scalar arrived on the wire is
/// carried back out unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum CitationScalar {
    Int(i64),
    Str(String),
}

impl Default for CitationScalar {
    fn default() -> Self {
        CitationScalar::Int(0)
    }
}

impl From<i64> for CitationScalar {
    fn from(n: i64) -> Self {
        CitationScalar::Int(n)
    }
}

impl From<&str> for CitationScalar {
    fn from(s: &str) -> Self {
        CitationScalar::Str(s.to_owned())
    }
}

impl From<String> for CitationScalar {
    fn from(s: String) -> Self {
        CitationScalar::Str(s)
    }
}

/// A single citation inside a `Cite` inline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Citation {
    /// Key into the bibliography (`@knuth1984` without the `@`).
    pub id: String,
    /// Inlines rendered before the citation.
    pub prefix: Vec<Inline>,
    /// Inlines rendered after it, typically a locator such as "p. 42".
    pub suffix: Vec<Inline>,
    pub mode: CitationMode,
    /// Footnote number assigned by pandoc, carried through untouched.
    pub note_num: CitationScalar,
    /// Internal hash assigned by pandoc, carried through untouched.
    pub hash: CitationScalar,
}

impl Citation {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: Vec<Inline>) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn with_suffix(mut self, suffix: Vec<Inline>) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn with_mode(mut self, mode: CitationMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let c = Citation::new("knuth1984");
        assert_eq!(c.id, "knuth1984");
        assert!(c.prefix.is_empty());
        assert!(c.suffix.is_empty());
        assert_eq!(c.mode, CitationMode::NormalCitation);
        assert_eq!(c.note_num, CitationScalar::Int(0));
        assert_eq!(c.hash, CitationScalar::Int(0));
    }

    #[test]
    fn test_builders() {
        let c = Citation::new("doe2021")
            .with_mode(CitationMode::SuppressAuthor)
            .with_suffix(vec![Inline::Str("p. 42".into())]);
        assert_eq!(c.mode, CitationMode::SuppressAuthor);
        assert_eq!(c.suffix.len(), 1);
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(CitationScalar::from(7), CitationScalar::Int(7));
        assert_eq!(
            CitationScalar::from("stable-id"),
            CitationScalar::Str("stable-id".into())
        );
    }
}
