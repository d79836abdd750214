//! # Decode: JSON to Document Model
//!
//! Walks a `serde_json::Value` guided by the schema's descriptor tables.
//! For each node, every declared property is looked up by its exact key;
//! undeclared keys are skipped. Values are checked for shape here, then
//! stored through the node setters, which enforce the scalar invariants
//! (token grammar, vocabularies, timestamp syntax, finiteness).
//!
//! Decoding is fail-fast: the first problem aborts the call and no partial
//! tree is returned.

use iodef_core::{
    Cardinality, Node, NodeType, PropertyDescriptor, PropertyKind, Scalar, Schema, TreePath,
    ESCAPE_VALUE,
};
use serde_json::{Map, Value};

use crate::error::{json_kind, CodecError};
use crate::options::{CodecOptions, CompanionPolicy};
use crate::text::parse_text;

/// Schema-driven decoder.
#[derive(Clone)]
pub struct Decoder<'s> {
    schema: &'s dyn Schema,
    options: CodecOptions,
}

impl<'s> Decoder<'s> {
    /// Decoder with default options.
    pub fn new(schema: &'s dyn Schema) -> Self {
        Self::with_options(schema, CodecOptions::default())
    }

    /// Decoder with explicit options.
    pub fn with_options(schema: &'s dyn Schema, options: CodecOptions) -> Self {
        Self { schema, options }
    }

    /// The options in effect.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Decode a whole document as the schema's root type.
    ///
    /// # Errors
    ///
    /// Any [`CodecError`] except `MalformedInput`, `InputTooLarge`, and
    /// `Serialize`.
    pub fn decode_document(&self, value: &Value) -> Result<Node, CodecError> {
        self.decode_as(self.schema.root(), value)
    }

    /// Decode `value` as the named node type.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownType`] if the schema lacks `type_name`, else as
    /// for [`Decoder::decode_document`].
    pub fn decode(&self, value: &Value, type_name: &str) -> Result<Node, CodecError> {
        let ty = self.resolve(type_name)?;
        self.decode_as(ty, value)
    }

    /// Parse and decode a document from text.
    ///
    /// # Errors
    ///
    /// [`CodecError::InputTooLarge`] when the text exceeds
    /// `max_input_bytes`, [`CodecError::MalformedInput`] when it is not
    /// JSON, and otherwise as for [`Decoder::decode_document`].
    pub fn decode_str(&self, text: &str) -> Result<Node, CodecError> {
        if let Some(limit) = self.options.max_input_bytes {
            if text.len() > limit {
                return Err(CodecError::InputTooLarge {
                    size: text.len(),
                    limit,
                });
            }
        }
        let value = parse_text(text)?;
        self.decode_document(&value)
    }

    fn decode_as(&self, ty: &'static NodeType, value: &Value) -> Result<Node, CodecError> {
        let mut path = TreePath::root();
        let node = self.decode_node(ty, value, &mut path)?;
        tracing::debug!(
            schema = self.schema.name(),
            node_type = ty.name,
            properties = node.present().count(),
            "decoded tree"
        );
        Ok(node)
    }

    fn resolve(&self, name: &str) -> Result<&'static NodeType, CodecError> {
        self.schema
            .node_type(name)
            .ok_or_else(|| CodecError::UnknownType {
                schema: self.schema.name(),
                name: name.to_string(),
            })
    }

    fn decode_node(
        &self,
        ty: &'static NodeType,
        value: &Value,
        path: &mut TreePath,
    ) -> Result<Node, CodecError> {
        let map = value.as_object().ok_or_else(|| CodecError::ShapeMismatch {
            path: path.clone(),
            expected: "an object",
            found: json_kind(value),
        })?;

        let mut node = Node::new(ty);
        for prop in ty.properties {
            let Some(raw) = map.get(prop.name) else {
                continue;
            };
            path.push_key(prop.name);
            self.decode_property(&mut node, prop, raw, path)?;
            path.pop();
        }

        self.pair_companions(&mut node, path)?;
        trace_ignored_keys(ty, map, path);
        Ok(node)
    }

    fn decode_property(
        &self,
        node: &mut Node,
        prop: &'static PropertyDescriptor,
        raw: &Value,
        path: &mut TreePath,
    ) -> Result<(), CodecError> {
        match (prop.kind, prop.cardinality) {
            (PropertyKind::Node(target), Cardinality::Single) => {
                let child = self.decode_node(self.resolve(target)?, raw, path)?;
                node.set_child(prop.name, child)
                    .map_err(|e| CodecError::from_model(path, e))?;
            }
            (PropertyKind::Node(target), Cardinality::Repeated) => {
                let ty = self.resolve(target)?;
                for (i, item) in expect_array(raw, path)?.iter().enumerate() {
                    path.push_index(i);
                    let child = self.decode_node(ty, item, path)?;
                    node.push_child(prop.name, child)
                        .map_err(|e| CodecError::from_model(path, e))?;
                    path.pop();
                }
            }
            (kind, Cardinality::Single) => {
                let scalar = read_scalar(kind, raw, path)?;
                node.set(prop.name, scalar)
                    .map_err(|e| CodecError::from_model(path, e))?;
            }
            (kind, Cardinality::Repeated) => {
                for (i, item) in expect_array(raw, path)?.iter().enumerate() {
                    path.push_index(i);
                    let scalar = read_scalar(kind, item, path)?;
                    node.push_value(prop.name, scalar)
                        .map_err(|e| CodecError::from_model(path, e))?;
                    path.pop();
                }
            }
        }
        Ok(())
    }

    /// Enforce the escape/companion pairing on a freshly decoded node.
    fn pair_companions(&self, node: &mut Node, path: &TreePath) -> Result<(), CodecError> {
        let ty = node.node_type();
        for prop in ty.properties {
            let PropertyKind::ExtEnum { companion, .. } = prop.kind else {
                continue;
            };
            let escaped = node.text(prop.name) == Some(ESCAPE_VALUE);
            let has_companion = node.is_set(companion);
            if escaped && !has_companion {
                return Err(CodecError::MissingCompanion {
                    path: path.clone(),
                    property: prop.name,
                    companion,
                });
            }
            if !escaped && has_companion {
                match self.options.companion_policy {
                    CompanionPolicy::Strict => {
                        return Err(CodecError::StrayCompanion {
                            path: path.clone(),
                            property: prop.name,
                            companion,
                        })
                    }
                    CompanionPolicy::Lenient => {
                        tracing::debug!(%path, companion, "dropping companion of non-escape value");
                        node.unset(companion);
                    }
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Decoder<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder")
            .field("schema", &self.schema.name())
            .field("options", &self.options)
            .finish()
    }
}

fn expect_array<'v>(raw: &'v Value, path: &TreePath) -> Result<&'v Vec<Value>, CodecError> {
    raw.as_array().ok_or_else(|| CodecError::ShapeMismatch {
        path: path.clone(),
        expected: "an array",
        found: json_kind(raw),
    })
}

/// Read one JSON scalar as the raw value for a property of `kind`.
///
/// Text-like kinds pass through as text; the node setter parses
/// timestamps, checks tokens, and checks vocabularies.
fn read_scalar(kind: PropertyKind, raw: &Value, path: &TreePath) -> Result<Scalar, CodecError> {
    let shape = |expected: &'static str| CodecError::ShapeMismatch {
        path: path.clone(),
        expected,
        found: json_kind(raw),
    };
    let unparsable = |kind: &'static str, reason: &str| CodecError::ScalarParse {
        path: path.clone(),
        kind,
        value: raw.to_string(),
        reason: reason.to_string(),
    };

    match kind {
        PropertyKind::Text
        | PropertyKind::Token
        | PropertyKind::DateTime
        | PropertyKind::Enum(_)
        | PropertyKind::ExtEnum { .. } => match raw {
            Value::String(s) => Ok(Scalar::Text(s.clone())),
            _ => Err(shape("a string")),
        },
        PropertyKind::Integer => match raw {
            Value::Number(n) => n
                .as_i64()
                .map(Scalar::Integer)
                .ok_or_else(|| unparsable("integer", "not a 64-bit integer")),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Scalar::Integer)
                .map_err(|e| unparsable("integer", &e.to_string())),
            _ => Err(shape("a number")),
        },
        PropertyKind::Real => match raw {
            Value::Number(n) => n
                .as_f64()
                .map(Scalar::Real)
                .ok_or_else(|| unparsable("real", "not representable as a double")),
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(Scalar::Real(f)),
                Ok(_) => Err(unparsable("real", "not a finite number")),
                Err(e) => Err(unparsable("real", &e.to_string())),
            },
            _ => Err(shape("a number")),
        },
        PropertyKind::Boolean => match raw {
            Value::Bool(b) => Ok(Scalar::Boolean(*b)),
            _ => Err(shape("a boolean")),
        },
        PropertyKind::Node(_) => Err(shape("an object")),
    }
}

fn trace_ignored_keys(ty: &NodeType, map: &Map<String, Value>, path: &TreePath) {
    for key in map.keys() {
        if ty.property(key).is_none() {
            tracing::trace!(%path, node_type = ty.name, key = key.as_str(), "ignoring undeclared key");
        }
    }
}
