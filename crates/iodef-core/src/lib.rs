//! # iodef-core: Document Model for IODEF Incident Reports
//!
//! This crate is the leaf of the workspace. It defines the in-memory tree
//! that the codec fills and the validator walks, without knowing anything
//! about the concrete IODEF classes: those live in `iodef-schema` as static
//! descriptors.
//!
//! ## Key Design Principles
//!
//! 1. **Descriptor-driven nodes.** A [`Node`] is a typed bag of properties
//!    whose names, kinds, and cardinalities come from a static [`NodeType`].
//!    Setters refuse undeclared properties and values of the wrong kind.
//!
//! 2. **Explicit presence.** Optional properties are either present or absent.
//!    There is no sentinel value; an empty string is a present value.
//!
//! 3. **Validated scalars.** [`Token`] enforces the identifier grammar and
//!    [`Timestamp`] parses RFC 3339 text once, keeping the original offset.
//!
//! 4. **One extensible-enum model.** Every `x` / `ext-x` pair is handled by
//!    [`ExtEnum`] and the shared pairing logic on [`Node`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `iodef-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod descriptor;
pub mod enumeration;
pub mod error;
pub mod identity;
pub mod node;
pub mod path;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use descriptor::{Cardinality, NodeType, PropertyDescriptor, PropertyKind, Rule, Schema};
pub use enumeration::{ExtEnum, Vocabulary, ESCAPE_VALUE};
pub use error::{GrammarViolation, ModelError, TimestampError};
pub use identity::Token;
pub use node::{Node, Scalar};
pub use path::TreePath;
pub use temporal::Timestamp;
