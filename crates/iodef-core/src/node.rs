//! # Nodes: Presence-Tracked Composite Values
//!
//! A [`Node`] is an instance of a [`NodeType`]. It stores only the properties
//! that are present; every accessor is keyed by the property's exact name and
//! checked against the descriptor, so a node can never hold a property its
//! type does not declare or a value of the wrong kind.
//!
//! ## Accessor families
//!
//! | Shape | Query | Mutate |
//! |---|---|---|
//! | single scalar | [`Node::get`], [`Node::text`], … | [`Node::set`], [`Node::unset`] |
//! | repeated scalar | [`Node::values`] | [`Node::push_value`] |
//! | single composite | [`Node::child`] | [`Node::set_child`] |
//! | repeated composite | [`Node::children`] | [`Node::push_child`] |
//! | extensible enum pair | [`Node::ext_enum`] | [`Node::set_ext_enum`] |
//!
//! [`Node::is_set`] is the presence query for all of them. A repeated
//! property counts as present once it holds at least one element.

use std::collections::BTreeMap;
use std::fmt;

use crate::descriptor::{Cardinality, NodeType, PropertyDescriptor, PropertyKind};
use crate::enumeration::{ExtEnum, ESCAPE_VALUE};
use crate::error::ModelError;
use crate::identity::Token;
use crate::temporal::Timestamp;

/// A scalar property value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Free text, or a validated enumeration value.
    Text(String),
    /// Signed integer.
    Integer(i64),
    /// Finite real number.
    Real(f64),
    /// Boolean.
    Boolean(bool),
    /// Point in time with offset.
    DateTime(Timestamp),
    /// Identifier token.
    Token(Token),
}

impl Scalar {
    /// Short kind name used in errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Real(_) => "real",
            Self::Boolean(_) => "boolean",
            Self::DateTime(_) => "date-time",
            Self::Token(_) => "identifier",
        }
    }

    /// Text content of `Text` and `Token` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Token(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Integer content.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric content of `Real` and `Integer` values.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(f) => Some(*f),
            Self::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Boolean content.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Timestamp content.
    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            Self::DateTime(ts) => Some(ts),
            _ => None,
        }
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<Timestamp> for Scalar {
    fn from(v: Timestamp) -> Self {
        Self::DateTime(v)
    }
}

impl From<Token> for Scalar {
    fn from(v: Token) -> Self {
        Self::Token(v)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Slot {
    Scalar(Scalar),
    Scalars(Vec<Scalar>),
    Child(Box<Node>),
    Children(Vec<Node>),
}

/// Accessor shape requested by a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Scalar,
    Scalars,
    Child,
    Children,
}

impl Shape {
    fn of(desc: &PropertyDescriptor) -> Self {
        match (desc.kind.is_composite(), desc.cardinality) {
            (false, Cardinality::Single) => Self::Scalar,
            (false, Cardinality::Repeated) => Self::Scalars,
            (true, Cardinality::Single) => Self::Child,
            (true, Cardinality::Repeated) => Self::Children,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Scalar => "a single scalar",
            Self::Scalars => "a scalar sequence",
            Self::Child => "a single composite",
            Self::Children => "a composite sequence",
        }
    }
}

/// An instance of a schema-defined composite type.
#[derive(Clone)]
pub struct Node {
    ty: &'static NodeType,
    slots: BTreeMap<&'static str, Slot>,
}

impl Node {
    /// Create a node with every property unset.
    pub fn new(ty: &'static NodeType) -> Self {
        Self {
            ty,
            slots: BTreeMap::new(),
        }
    }

    /// The node's type descriptor.
    pub fn node_type(&self) -> &'static NodeType {
        self.ty
    }

    /// The node's type name.
    pub fn type_name(&self) -> &'static str {
        self.ty.name
    }

    /// Presence query.
    pub fn is_set(&self, name: &str) -> bool {
        match self.slots.get(name) {
            Some(Slot::Scalars(values)) => !values.is_empty(),
            Some(Slot::Children(children)) => !children.is_empty(),
            Some(_) => true,
            None => false,
        }
    }

    /// Whether no property is present.
    pub fn is_empty(&self) -> bool {
        !self.ty.properties.iter().any(|p| self.is_set(p.name))
    }

    /// Descriptors of the present properties, in canonical order.
    pub fn present(&self) -> impl Iterator<Item = &'static PropertyDescriptor> + '_ {
        let ty: &'static NodeType = self.ty;
        ty.properties.iter().filter(move |p| self.is_set(p.name))
    }

    // -- single scalars ---------------------------------------------------

    /// The value of a single scalar property.
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        match self.slots.get(name) {
            Some(Slot::Scalar(value)) => Some(value),
            _ => None,
        }
    }

    /// Text of a text, enumeration, or identifier property.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Scalar::as_str)
    }

    /// Value of an integer property.
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Scalar::as_i64)
    }

    /// Value of a real property.
    pub fn real(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Scalar::as_f64)
    }

    /// Value of a boolean property.
    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Scalar::as_bool)
    }

    /// Value of a date-time property.
    pub fn timestamp(&self, name: &str) -> Option<&Timestamp> {
        self.get(name).and_then(Scalar::as_timestamp)
    }

    /// Set a single scalar property.
    ///
    /// Text is accepted for date-time properties (parsed as a timestamp) and
    /// identifier properties (checked against the token grammar). Integers
    /// are accepted for real properties.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownProperty`] for an undeclared name,
    /// [`ModelError::KindMismatch`] for the wrong shape or kind, and the
    /// grammar, vocabulary, timestamp, and finiteness errors of the kind.
    pub fn set(&mut self, name: &str, value: impl Into<Scalar>) -> Result<&mut Self, ModelError> {
        let desc = self.descriptor(name, Shape::Scalar)?;
        let value = coerce(self.ty, desc, value.into())?;
        self.slots.insert(desc.name, Slot::Scalar(value));
        Ok(self)
    }

    /// Remove a property of any shape. Returns whether it was present.
    pub fn unset(&mut self, name: &str) -> bool {
        let was_set = self.is_set(name);
        self.slots.remove(name);
        was_set
    }

    // -- repeated scalars -------------------------------------------------

    /// Elements of a repeated scalar property, in insertion order.
    pub fn values(&self, name: &str) -> &[Scalar] {
        match self.slots.get(name) {
            Some(Slot::Scalars(values)) => values,
            _ => &[],
        }
    }

    /// Append to a repeated scalar property.
    ///
    /// # Errors
    ///
    /// As for [`Node::set`].
    pub fn push_value(
        &mut self,
        name: &str,
        value: impl Into<Scalar>,
    ) -> Result<&mut Self, ModelError> {
        let desc = self.descriptor(name, Shape::Scalars)?;
        let value = coerce(self.ty, desc, value.into())?;
        if let Slot::Scalars(values) = self
            .slots
            .entry(desc.name)
            .or_insert_with(|| Slot::Scalars(Vec::new()))
        {
            values.push(value);
        }
        Ok(self)
    }

    // -- single composites ------------------------------------------------

    /// The nested node of a single composite property.
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self.slots.get(name) {
            Some(Slot::Child(child)) => Some(child.as_ref()),
            _ => None,
        }
    }

    /// Mutable access to a nested node.
    pub fn child_mut(&mut self, name: &str) -> Option<&mut Node> {
        match self.slots.get_mut(name) {
            Some(Slot::Child(child)) => Some(child.as_mut()),
            _ => None,
        }
    }

    /// Set a single composite property, replacing any previous child.
    ///
    /// # Errors
    ///
    /// [`ModelError::KindMismatch`] if `child` is not of the declared type.
    pub fn set_child(&mut self, name: &str, child: Node) -> Result<&mut Self, ModelError> {
        let desc = self.descriptor(name, Shape::Child)?;
        check_child_type(self.ty, desc, &child)?;
        self.slots.insert(desc.name, Slot::Child(Box::new(child)));
        Ok(self)
    }

    // -- repeated composites ----------------------------------------------

    /// Elements of a repeated composite property, in insertion order.
    pub fn children(&self, name: &str) -> &[Node] {
        match self.slots.get(name) {
            Some(Slot::Children(children)) => children,
            _ => &[],
        }
    }

    /// Mutable access to the elements of a repeated composite property.
    pub fn children_mut(&mut self, name: &str) -> &mut [Node] {
        match self.slots.get_mut(name) {
            Some(Slot::Children(children)) => children,
            _ => &mut [],
        }
    }

    /// Append to a repeated composite property.
    ///
    /// # Errors
    ///
    /// [`ModelError::KindMismatch`] if `child` is not of the declared type.
    pub fn push_child(&mut self, name: &str, child: Node) -> Result<&mut Self, ModelError> {
        let desc = self.descriptor(name, Shape::Children)?;
        check_child_type(self.ty, desc, &child)?;
        if let Slot::Children(children) = self
            .slots
            .entry(desc.name)
            .or_insert_with(|| Slot::Children(Vec::new()))
        {
            children.push(child);
        }
        Ok(self)
    }

    // -- extensible enumerations ------------------------------------------

    /// The logical value of an extensible enumeration.
    ///
    /// Returns `None` when the primary is unset, when `name` is not an
    /// extensible enumeration, or when the primary is `ext-value` but the
    /// companion is missing (a hand-built inconsistent node).
    pub fn ext_enum(&self, name: &str) -> Option<ExtEnum> {
        let companion = match self.ty.property(name)?.kind {
            PropertyKind::ExtEnum { companion, .. } => companion,
            _ => return None,
        };
        ExtEnum::from_pair(self.text(name)?, self.text(companion))
    }

    /// Set an extensible enumeration, keeping its companion in step.
    ///
    /// `Known` values clear the companion; `Extension` values store
    /// `ext-value` in the primary and the text in the companion.
    ///
    /// # Errors
    ///
    /// [`ModelError::NotInVocabulary`] for an unknown `Known` value and
    /// [`ModelError::MissingCompanion`] for `Known("ext-value")`.
    pub fn set_ext_enum(&mut self, name: &str, value: ExtEnum) -> Result<&mut Self, ModelError> {
        let desc = self.descriptor(name, Shape::Scalar)?;
        let (vocabulary, companion) = match desc.kind {
            PropertyKind::ExtEnum {
                vocabulary,
                companion,
            } => (vocabulary, companion),
            other => {
                return Err(ModelError::KindMismatch {
                    node_type: self.ty.name,
                    property: desc.name,
                    expected: other.describe(),
                    found: "extensible enumeration",
                })
            }
        };
        let companion = self.descriptor(companion, Shape::Scalar)?;
        match value {
            ExtEnum::Known(v) if v == ESCAPE_VALUE => Err(ModelError::MissingCompanion {
                property: desc.name,
                companion: companion.name,
            }),
            ExtEnum::Known(v) => {
                if !vocabulary.contains(&v) {
                    return Err(ModelError::NotInVocabulary {
                        property: desc.name,
                        vocabulary: vocabulary.name,
                        value: v,
                    });
                }
                self.slots.insert(desc.name, Slot::Scalar(Scalar::Text(v)));
                self.slots.remove(companion.name);
                Ok(self)
            }
            ExtEnum::Extension(text) => {
                self.slots
                    .insert(desc.name, Slot::Scalar(Scalar::Text(ESCAPE_VALUE.to_string())));
                self.slots
                    .insert(companion.name, Slot::Scalar(Scalar::Text(text)));
                Ok(self)
            }
        }
    }

    fn descriptor(
        &self,
        name: &str,
        shape: Shape,
    ) -> Result<&'static PropertyDescriptor, ModelError> {
        let ty: &'static NodeType = self.ty;
        let desc = ty
            .property(name)
            .ok_or_else(|| ModelError::UnknownProperty {
                node_type: ty.name,
                property: name.to_string(),
            })?;
        let declared = Shape::of(desc);
        if declared != shape {
            return Err(ModelError::KindMismatch {
                node_type: ty.name,
                property: desc.name,
                expected: declared.describe(),
                found: shape.describe(),
            });
        }
        Ok(desc)
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ty.name == other.ty.name && self.slots == other.slots
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("type", &self.ty.name)
            .field("slots", &self.slots)
            .finish()
    }
}

fn coerce(
    ty: &'static NodeType,
    desc: &'static PropertyDescriptor,
    value: Scalar,
) -> Result<Scalar, ModelError> {
    match (desc.kind, value) {
        (PropertyKind::Text, v @ Scalar::Text(_))
        | (PropertyKind::Integer, v @ Scalar::Integer(_))
        | (PropertyKind::Boolean, v @ Scalar::Boolean(_))
        | (PropertyKind::DateTime, v @ Scalar::DateTime(_))
        | (PropertyKind::Token, v @ Scalar::Token(_)) => Ok(v),
        (PropertyKind::Real, Scalar::Real(f)) => {
            if f.is_finite() {
                Ok(Scalar::Real(f))
            } else {
                Err(ModelError::NonFinite {
                    property: desc.name,
                    value: f,
                })
            }
        }
        (PropertyKind::Real, Scalar::Integer(i)) => Ok(Scalar::Real(i as f64)),
        (PropertyKind::DateTime, Scalar::Text(s)) => Timestamp::parse(&s)
            .map(Scalar::DateTime)
            .map_err(|source| ModelError::Timestamp {
                property: desc.name,
                source,
            }),
        (PropertyKind::Token, Scalar::Text(s)) => Token::new(s)
            .map(Scalar::Token)
            .map_err(|source| ModelError::Grammar {
                property: desc.name,
                source,
            }),
        (PropertyKind::Enum(vocabulary), Scalar::Text(s))
        | (PropertyKind::ExtEnum { vocabulary, .. }, Scalar::Text(s)) => {
            if vocabulary.contains(&s) {
                Ok(Scalar::Text(s))
            } else {
                Err(ModelError::NotInVocabulary {
                    property: desc.name,
                    vocabulary: vocabulary.name,
                    value: s,
                })
            }
        }
        (kind, other) => Err(ModelError::KindMismatch {
            node_type: ty.name,
            property: desc.name,
            expected: kind.describe(),
            found: other.kind_name(),
        }),
    }
}

fn check_child_type(
    ty: &'static NodeType,
    desc: &'static PropertyDescriptor,
    child: &Node,
) -> Result<(), ModelError> {
    match desc.kind {
        PropertyKind::Node(expected) if expected == child.type_name() => Ok(()),
        PropertyKind::Node(expected) => Err(ModelError::KindMismatch {
            node_type: ty.name,
            property: desc.name,
            expected,
            found: child.type_name(),
        }),
        other => Err(ModelError::KindMismatch {
            node_type: ty.name,
            property: desc.name,
            expected: other.describe(),
            found: child.type_name(),
        }),
    }
}
