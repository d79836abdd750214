//! # Codec Errors
//!
//! Every decode or encode failure is fatal to the call that raised it and
//! carries the JSON Pointer of the offending property, so an operator can
//! find it in the source document.

use iodef_core::{ModelError, TreePath};
use thiserror::Error;

/// Error raised by decoding or encoding.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The text is not JSON.
    #[error("malformed input: {source}")]
    MalformedInput {
        /// Parser error, with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// The text exceeds the configured size cap.
    #[error("input is {size} bytes, limit is {limit}")]
    InputTooLarge {
        /// Input size in bytes.
        size: usize,
        /// Configured limit.
        limit: usize,
    },

    /// A JSON value has the wrong structural kind for its property.
    #[error("{path}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Location of the value.
        path: TreePath,
        /// What the schema declares.
        expected: &'static str,
        /// What the document holds.
        found: &'static str,
    },

    /// A string or number does not parse as the declared scalar kind.
    #[error("{path}: cannot read {value} as {kind}: {reason}")]
    ScalarParse {
        /// Location of the value.
        path: TreePath,
        /// Declared scalar kind.
        kind: &'static str,
        /// The offending value, as it appeared.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An identifier does not match the token grammar.
    #[error("{path}: {source}")]
    GrammarViolation {
        /// Location of the value.
        path: TreePath,
        /// The grammar failure.
        #[source]
        source: iodef_core::GrammarViolation,
    },

    /// An extensible enumeration is `ext-value` but its companion is absent.
    #[error("{path}: '{property}' is 'ext-value' but '{companion}' is missing")]
    MissingCompanion {
        /// Location of the owning node.
        path: TreePath,
        /// The enumeration property.
        property: &'static str,
        /// The absent companion.
        companion: &'static str,
    },

    /// A companion accompanies a non-escape primary (strict policy only).
    #[error("{path}: '{companion}' is only allowed when '{property}' is 'ext-value'")]
    StrayCompanion {
        /// Location of the owning node.
        path: TreePath,
        /// The enumeration property.
        property: &'static str,
        /// The unexpected companion.
        companion: &'static str,
    },

    /// A type name did not resolve in the schema.
    #[error("schema {schema} has no node type '{name}'")]
    UnknownType {
        /// Schema name.
        schema: &'static str,
        /// The unresolved name.
        name: String,
    },

    /// A node built outside the codec breaks a model invariant.
    #[error("{path}: {reason}")]
    Invariant {
        /// Location of the offending value.
        path: TreePath,
        /// What is wrong.
        reason: String,
    },

    /// JSON rendering failed.
    #[error("serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl CodecError {
    /// Tree path of the failure, when it has one.
    pub fn path(&self) -> Option<&TreePath> {
        match self {
            Self::ShapeMismatch { path, .. }
            | Self::ScalarParse { path, .. }
            | Self::GrammarViolation { path, .. }
            | Self::MissingCompanion { path, .. }
            | Self::StrayCompanion { path, .. }
            | Self::Invariant { path, .. } => Some(path),
            Self::MalformedInput { .. }
            | Self::InputTooLarge { .. }
            | Self::UnknownType { .. }
            | Self::Serialize(_) => None,
        }
    }

    /// Translate a setter failure at `path` into the codec taxonomy.
    pub(crate) fn from_model(path: &TreePath, err: ModelError) -> Self {
        let path = path.clone();
        match err {
            ModelError::Grammar { source, .. } => Self::GrammarViolation { path, source },
            ModelError::Timestamp { source, .. } => {
                let value = match &source {
                    iodef_core::TimestampError::Format { value }
                    | iodef_core::TimestampError::OutOfRange { value, .. } => value.clone(),
                };
                Self::ScalarParse {
                    path,
                    kind: "date-time",
                    value: format!("{value:?}"),
                    reason: source.to_string(),
                }
            }
            ModelError::NotInVocabulary {
                vocabulary, value, ..
            } => Self::ScalarParse {
                path,
                kind: "enumeration",
                value: format!("{value:?}"),
                reason: format!("not a {vocabulary} value"),
            },
            ModelError::NonFinite { value, .. } => Self::ScalarParse {
                path,
                kind: "real",
                value: value.to_string(),
                reason: "not a finite number".to_string(),
            },
            ModelError::MissingCompanion {
                property,
                companion,
            } => Self::MissingCompanion {
                path,
                property,
                companion,
            },
            other @ (ModelError::UnknownProperty { .. } | ModelError::KindMismatch { .. }) => {
                Self::Invariant {
                    path,
                    reason: other.to_string(),
                }
            }
        }
    }
}

/// JSON kind name used in shape errors.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
