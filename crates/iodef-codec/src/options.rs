//! Codec configuration.
//!
//! Options deserialize from YAML or JSON with every field optional, so a
//! config file only needs to name what it changes.

use serde::{Deserialize, Serialize};

/// How decode treats a companion next to a primary that is not `ext-value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanionPolicy {
    /// Accept the document and drop the companion at decode.
    ///
    /// The decoded node never holds the companion, so callers cannot read
    /// it back and encode has nothing to omit. Use `Strict` to surface it.
    #[default]
    Lenient,
    /// Reject the document with `CodecError::StrayCompanion`.
    Strict,
}

/// Settings shared by decode, encode, and the text layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecOptions {
    /// Handling of stray companions during decode.
    pub companion_policy: CompanionPolicy,
    /// Indent rendered JSON.
    pub pretty: bool,
    /// Reject input text longer than this many bytes.
    pub max_input_bytes: Option<usize>,
}

impl CodecOptions {
    /// Options with [`CompanionPolicy::Strict`].
    pub fn strict() -> Self {
        Self {
            companion_policy: CompanionPolicy::Strict,
            ..Self::default()
        }
    }
}
