//! # Encode: Document Model to JSON
//!
//! Emits present properties in the node type's declared order, so output
//! is canonical regardless of how the tree was built. Unset properties and
//! empty sequences are omitted, timestamps are rendered in canonical form,
//! and a companion is written only when its primary is `ext-value`.
//!
//! Encoding never mutates the tree. It fails only when a hand-built tree
//! breaks an invariant the setters normally guarantee.

use iodef_core::{Cardinality, Node, PropertyKind, Scalar, TreePath, ESCAPE_VALUE};
use serde_json::{Map, Number, Value};

use crate::error::CodecError;

/// Encode a node and everything beneath it.
///
/// # Errors
///
/// [`CodecError::MissingCompanion`] for an `ext-value` primary without its
/// companion and [`CodecError::Invariant`] for a non-finite real.
pub fn encode(node: &Node) -> Result<Value, CodecError> {
    let mut path = TreePath::root();
    let value = encode_node(node, &mut path)?;
    tracing::debug!(
        node_type = node.type_name(),
        properties = node.present().count(),
        "encoded tree"
    );
    Ok(value)
}

fn encode_node(node: &Node, path: &mut TreePath) -> Result<Value, CodecError> {
    let ty = node.node_type();
    let mut map = Map::new();
    for prop in node.present() {
        if let Some(owner) = ty.companion_owner(prop.name) {
            if node.text(owner.name) != Some(ESCAPE_VALUE) {
                continue;
            }
        }
        if let PropertyKind::ExtEnum { companion, .. } = prop.kind {
            if node.text(prop.name) == Some(ESCAPE_VALUE) && !node.is_set(companion) {
                return Err(CodecError::MissingCompanion {
                    path: path.clone(),
                    property: prop.name,
                    companion,
                });
            }
        }

        path.push_key(prop.name);
        let value = match (prop.kind.is_composite(), prop.cardinality) {
            (true, Cardinality::Single) => match node.child(prop.name) {
                Some(child) => encode_node(child, path)?,
                None => Value::Null,
            },
            (true, Cardinality::Repeated) => {
                let mut items = Vec::new();
                for (i, child) in node.children(prop.name).iter().enumerate() {
                    path.push_index(i);
                    items.push(encode_node(child, path)?);
                    path.pop();
                }
                Value::Array(items)
            }
            (false, Cardinality::Single) => match node.get(prop.name) {
                Some(scalar) => encode_scalar(scalar, path)?,
                None => Value::Null,
            },
            (false, Cardinality::Repeated) => {
                let mut items = Vec::new();
                for (i, scalar) in node.values(prop.name).iter().enumerate() {
                    path.push_index(i);
                    items.push(encode_scalar(scalar, path)?);
                    path.pop();
                }
                Value::Array(items)
            }
        };
        path.pop();
        map.insert(prop.name.to_string(), value);
    }
    Ok(Value::Object(map))
}

fn encode_scalar(scalar: &Scalar, path: &TreePath) -> Result<Value, CodecError> {
    Ok(match scalar {
        Scalar::Text(s) => Value::String(s.clone()),
        Scalar::Token(t) => Value::String(t.as_str().to_string()),
        Scalar::DateTime(ts) => Value::String(ts.to_rfc3339()),
        Scalar::Integer(i) => Value::Number((*i).into()),
        Scalar::Boolean(b) => Value::Bool(*b),
        Scalar::Real(f) => {
            Value::Number(Number::from_f64(*f).ok_or_else(|| CodecError::Invariant {
                path: path.clone(),
                reason: format!("real value {f} is not finite"),
            })?)
        }
    })
}
