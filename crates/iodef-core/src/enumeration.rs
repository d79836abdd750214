//! # Enumerations: Fixed and Extensible Vocabularies
//!
//! IODEF enumerated attributes draw from a fixed list of values. Most lists
//! are *extensible*: they include the escape value `ext-value`, which means
//! "the real value is in the companion attribute `ext-<name>`".
//!
//! The pairing rule is the same everywhere, so it is modelled once:
//!
//! - [`Vocabulary`] is the static value list;
//! - [`ExtEnum`] is the logical value of a primary/companion pair;
//! - [`Node::set_ext_enum`](crate::Node::set_ext_enum) and
//!   [`Node::ext_enum`](crate::Node::ext_enum) keep the two properties in step.
//!
//! Invariant: the companion is present iff the primary equals [`ESCAPE_VALUE`].

use serde::{Deserialize, Serialize};

/// The reserved value meaning "see the companion property".
pub const ESCAPE_VALUE: &str = "ext-value";

/// A named, fixed list of enumeration values.
#[derive(Debug)]
pub struct Vocabulary {
    /// Name used in error messages (e.g. `"restriction"`).
    pub name: &'static str,
    /// Allowed values, in RFC order.
    pub values: &'static [&'static str],
}

impl Vocabulary {
    /// Whether `value` is one of the allowed values.
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }

    /// Whether the vocabulary includes the escape value.
    pub fn is_extensible(&self) -> bool {
        self.contains(ESCAPE_VALUE)
    }
}

/// The logical value of an extensible enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtEnum {
    /// A value from the fixed vocabulary.
    Known(String),
    /// A value outside the vocabulary, carried by the companion property.
    Extension(String),
}

impl ExtEnum {
    /// A vocabulary value.
    pub fn known(value: impl Into<String>) -> Self {
        Self::Known(value.into())
    }

    /// A free-text extension value.
    pub fn extension(value: impl Into<String>) -> Self {
        Self::Extension(value.into())
    }

    /// Rebuild the logical value from a stored primary/companion pair.
    ///
    /// Returns `None` when the primary is the escape value but no companion
    /// is available. A companion next to a non-escape primary is ignored.
    pub fn from_pair(primary: &str, companion: Option<&str>) -> Option<Self> {
        if primary == ESCAPE_VALUE {
            companion.map(|c| Self::Extension(c.to_string()))
        } else {
            Some(Self::Known(primary.to_string()))
        }
    }

    /// The text stored in the primary property.
    pub fn primary(&self) -> &str {
        match self {
            Self::Known(v) => v,
            Self::Extension(_) => ESCAPE_VALUE,
        }
    }

    /// The text stored in the companion property, if any.
    pub fn companion(&self) -> Option<&str> {
        match self {
            Self::Known(_) => None,
            Self::Extension(v) => Some(v),
        }
    }

    /// The effective value, whichever property carries it.
    pub fn value(&self) -> &str {
        match self {
            Self::Known(v) | Self::Extension(v) => v,
        }
    }
}
