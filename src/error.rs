//! Error types for AST construction and wire codec operations.

use thiserror::Error;

/// Errors that can occur while building a document tree or decoding the
/// wire format.
///
/// Every variant is raised eagerly at the point of violation and propagates
/// uncaught to the caller: a structurally invalid document cannot be
/// meaningfully repaired, so no partial output is ever produced.
#[derive(Error, Debug)]
pub enum Error {
    /// A child element carries the wrong Block/Inline capability for its
    /// container. Direct construction cannot produce this (the type system
    /// rules it out); it is reported from the decode boundary, where the
    /// untyped wire can place any tag in any position.
    #[error("{parent} must contain {expected} content but received {child}\n---\n{rendering}\n---")]
    CapabilityMismatch {
        /// Kind of the container being decoded.
        parent: &'static str,
        /// `"Block"` or `"Inline"`.
        expected: &'static str,
        /// Tag of the offending child.
        child: String,
        /// Compact JSON rendering of the offending wire value.
        rendering: String,
    },

    /// A field value lies outside its fixed set: quote type, citation mode,
    /// math mode, raw format, list numbering style/delimiter, table
    /// alignment, or a header level outside 1..=6.
    #[error("invalid {field}: {value}")]
    InvalidEnumValue {
        field: &'static str,
        value: String,
    },

    /// A field is not the required primitive type (e.g. non-string text,
    /// non-integer header level).
    #[error("{what} must be {expected}, found {found}")]
    InvalidFieldType {
        what: &'static str,
        expected: &'static str,
        /// Compact rendering of the value actually found.
        found: String,
    },

    /// A compound shape has the wrong arity or internal geometry: a
    /// malformed `{t,c}` pair, a content array of the wrong length for its
    /// kind, a table whose rows disagree with its declared column count, a
    /// malformed numbering descriptor or citation record.
    #[error("invalid structure: {0}")]
    ShapeMismatch(String),

    /// A tag outside the known element/enum universe. Fatal: the wire value
    /// cannot be interpreted and no fallback is attempted.
    #[error("unknown tag: {0}")]
    UnknownTag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
