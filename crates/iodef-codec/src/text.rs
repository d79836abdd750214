//! Text layer: JSON text to and from `serde_json::Value`.
//!
//! Objects keep insertion order (`preserve_order`), so encoded documents
//! render in canonical property order.

use iodef_core::Node;
use serde_json::Value;

use crate::encode::encode;
use crate::error::CodecError;

/// Parse UTF-8 JSON text.
///
/// # Errors
///
/// [`CodecError::MalformedInput`] when the text is not a single JSON value.
pub fn parse_text(text: &str) -> Result<Value, CodecError> {
    serde_json::from_str(text).map_err(|source| CodecError::MalformedInput { source })
}

/// Render a value as JSON text, indented when `pretty` is set.
///
/// # Errors
///
/// [`CodecError::Serialize`] if rendering fails.
pub fn to_text(value: &Value, pretty: bool) -> Result<String, CodecError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.map_err(CodecError::Serialize)
}

/// Encode a node straight to JSON text.
///
/// # Errors
///
/// As for [`encode`] and [`to_text`].
pub fn encode_string(node: &Node, pretty: bool) -> Result<String, CodecError> {
    to_text(&encode(node)?, pretty)
}
