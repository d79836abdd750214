//! # iodef-codec: JSON Codec for IODEF Documents
//!
//! Converts between JSON text, `serde_json::Value`, and the
//! [`Node`](iodef_core::Node) tree, driven entirely by a
//! [`Schema`](iodef_core::Schema)'s descriptor tables.
//!
//! ```text
//! text --parse_text--> Value --Decoder--> Node --encode--> Value --to_text--> text
//! ```
//!
//! ## Decode
//!
//! [`Decoder`] is fail-fast. Shape mismatches, unparsable scalars, grammar
//! violations, and unpaired escape values abort the call with a
//! [`CodecError`] that carries the JSON Pointer of the offending property.
//! Undeclared keys are ignored. A companion next to a non-escape primary is
//! dropped or rejected according to [`CompanionPolicy`].
//!
//! ## Encode
//!
//! [`encode`] emits present properties in schema order with canonical
//! timestamps. `encode(decode(v))` is a fixed point for any `v` that
//! decodes.
//!
//! ## Crate Policy
//!
//! - Depends only on `iodef-core` internally; concrete schemas are
//!   supplied by the caller.
//! - No I/O. Reading files and capping input size belong to the caller
//!   (`max_input_bytes` enforces the cap for [`Decoder::decode_str`]).

pub mod decode;
pub mod encode;
pub mod error;
pub mod options;
pub mod text;

pub use decode::Decoder;
pub use encode::encode;
pub use error::CodecError;
pub use options::{CodecOptions, CompanionPolicy};
pub use text::{encode_string, parse_text, to_text};
