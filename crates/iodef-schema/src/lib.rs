//! # iodef-schema: IODEF v2 Schema Tables and Validator
//!
//! Declares the RFC 7970 classes as static [`NodeType`](iodef_core::NodeType)
//! descriptors keyed by their RFC 8727 JSON names, and provides the
//! structural-completeness [`Validator`].
//!
//! ## Schema (`registry`)
//!
//! [`Iodef`] implements [`Schema`](iodef_core::Schema): the root type is
//! `IODEF-Document` and every nested class resolves by name through a
//! lazily built index. [`verify`] checks the tables for dangling type
//! references, malformed companion declarations, and rules that name
//! undeclared properties.
//!
//! ## Validation (`validate`)
//!
//! [`Validator::check`] walks a tree and returns a [`ValidationReport`]
//! listing every violated rule with the path of the offending node. It
//! never fails.
//!
//! ## Crate Policy
//!
//! - Depends only on `iodef-core` internally.
//! - Property names are the RFC 8727 keys verbatim and are case-sensitive.
//! - Adding a class means adding a table and listing it in
//!   [`registry::ALL_TYPES`]; no other code changes.

mod props;

pub mod assessment;
pub mod contact;
pub mod document;
pub mod event;
pub mod indicator;
pub mod registry;
pub mod validate;
pub mod vocab;

pub use registry::{verify, Iodef, SchemaError};
pub use validate::{ValidationReport, Validator, ViolatedRule, Violation};
