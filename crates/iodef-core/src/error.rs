//! # Error Types: Document Model Invariants
//!
//! Errors raised when a mutation would leave a [`Node`](crate::Node) in a
//! state its descriptor forbids. All errors use `thiserror` for derive-based
//! `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every error names the node type and property involved.
//! - Grammar and timestamp failures keep the offending text verbatim.
//! - Nothing here is a validation finding: completeness problems are
//!   reported as data by the validator, not raised.

use thiserror::Error;

/// Error raised by a [`Node`](crate::Node) setter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The node type declares no property with this name.
    #[error("node type '{node_type}' declares no property '{property}'")]
    UnknownProperty {
        /// Name of the node type.
        node_type: &'static str,
        /// The undeclared property name.
        property: String,
    },

    /// The value (or accessor) does not match the declared property kind.
    #[error("property '{property}' of '{node_type}' holds {expected}, not {found}")]
    KindMismatch {
        /// Name of the node type.
        node_type: &'static str,
        /// Property name.
        property: &'static str,
        /// Declared kind.
        expected: &'static str,
        /// Kind that was supplied.
        found: &'static str,
    },

    /// An identifier-shaped property was given text outside the token grammar.
    #[error("property '{property}': {source}")]
    Grammar {
        /// Property name.
        property: &'static str,
        /// The underlying grammar failure.
        #[source]
        source: GrammarViolation,
    },

    /// An enumerated property was given a value outside its vocabulary.
    #[error("property '{property}': {value:?} is not a {vocabulary} value")]
    NotInVocabulary {
        /// Property name.
        property: &'static str,
        /// Vocabulary name.
        vocabulary: &'static str,
        /// The rejected value.
        value: String,
    },

    /// `ExtEnum::Known("ext-value")` cannot be stored without companion text.
    #[error("property '{property}' set to 'ext-value' without companion '{companion}'")]
    MissingCompanion {
        /// Primary property name.
        property: &'static str,
        /// Companion property name.
        companion: &'static str,
    },

    /// Real-valued properties hold finite numbers only.
    #[error("property '{property}' rejects non-finite number {value}")]
    NonFinite {
        /// Property name.
        property: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A date-time property was given text that is not a timestamp.
    #[error("property '{property}': {source}")]
    Timestamp {
        /// Property name.
        property: &'static str,
        /// The underlying parse failure.
        #[source]
        source: TimestampError,
    },
}

/// Text that does not match `[a-zA-Z_][a-zA-Z0-9_.-]*`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{value:?} does not match the identifier grammar [a-zA-Z_][a-zA-Z0-9_.-]*")]
pub struct GrammarViolation {
    /// The rejected text.
    pub value: String,
}

/// Error parsing a timestamp.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The text does not follow `YYYY-MM-DDThh:mm:ss[.fraction](±hh:mm|Z)`.
    #[error("{value:?} does not match YYYY-MM-DDThh:mm:ss[.fraction](+hh:mm|-hh:mm|Z)")]
    Format {
        /// The rejected text.
        value: String,
    },

    /// The text has the right shape but names an impossible instant.
    #[error("{value:?} is not a valid point in time: {reason}")]
    OutOfRange {
        /// The rejected text.
        value: String,
        /// Reason reported by the date library.
        reason: String,
    },
}
