//! # Schema Descriptors
//!
//! Static tables describing node types: which properties a type has, what
//! kind of value each holds, how many, and which completeness rules apply.
//! The codec and validator interpret these generically; no per-class code
//! exists anywhere in the workspace.
//!
//! Composite properties name their nested type by string. A [`Schema`]
//! resolves those names, so descriptor tables never need to point at each
//! other (the IODEF class graph is recursive: `Contact` contains `Contact`).

use crate::enumeration::Vocabulary;

/// What a property holds.
#[derive(Debug, Clone, Copy)]
pub enum PropertyKind {
    /// Free text.
    Text,
    /// Signed integer.
    Integer,
    /// Finite real number.
    Real,
    /// `true` / `false`.
    Boolean,
    /// [`Timestamp`](crate::Timestamp).
    DateTime,
    /// [`Token`](crate::Token), checked against the identifier grammar.
    Token,
    /// Closed enumeration.
    Enum(&'static Vocabulary),
    /// Extensible enumeration whose escape value defers to `companion`.
    ExtEnum {
        /// Allowed values, including `ext-value`.
        vocabulary: &'static Vocabulary,
        /// Name of the companion free-text property on the same node type.
        companion: &'static str,
    },
    /// Nested node of the named type.
    Node(&'static str),
}

impl PropertyKind {
    /// Short human-readable kind name used in errors.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Boolean => "boolean",
            Self::DateTime => "date-time",
            Self::Token => "identifier",
            Self::Enum(_) | Self::ExtEnum { .. } => "enumeration",
            Self::Node(_) => "composite",
        }
    }

    /// Whether the property holds nested nodes rather than scalars.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Node(_))
    }
}

/// How many values a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Zero or one.
    Single,
    /// An ordered sequence; duplicates allowed.
    Repeated,
}

/// One named property of a node type.
#[derive(Debug)]
pub struct PropertyDescriptor {
    /// Property name, reused verbatim as the JSON key.
    pub name: &'static str,
    /// Value kind.
    pub kind: PropertyKind,
    /// Single or repeated.
    pub cardinality: Cardinality,
}

impl PropertyDescriptor {
    /// A zero-or-one property.
    pub const fn single(name: &'static str, kind: PropertyKind) -> Self {
        Self {
            name,
            kind,
            cardinality: Cardinality::Single,
        }
    }

    /// An ordered-sequence property.
    pub const fn repeated(name: &'static str, kind: PropertyKind) -> Self {
        Self {
            name,
            kind,
            cardinality: Cardinality::Repeated,
        }
    }

    /// Whether the property is a sequence.
    pub fn is_repeated(&self) -> bool {
        self.cardinality == Cardinality::Repeated
    }
}

/// A structural-completeness rule evaluated by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The property must be present.
    Required(&'static str),
    /// `property` must be present whenever `sibling` equals `equals`.
    RequiredWhen {
        /// Property that becomes required.
        property: &'static str,
        /// Sibling scalar whose value triggers the requirement.
        sibling: &'static str,
        /// Triggering value.
        equals: &'static str,
    },
    /// At most one of these properties may be present.
    Exclusive(&'static [&'static str]),
    /// At least one of these properties must be present.
    AnyOf(&'static [&'static str]),
}

/// A composite type: its properties in canonical order plus its rule set.
#[derive(Debug)]
pub struct NodeType {
    /// Type name (the RFC class name).
    pub name: &'static str,
    /// Properties in canonical (schema) order.
    pub properties: &'static [PropertyDescriptor],
    /// Completeness rules beyond the implicit companion rule.
    pub rules: &'static [Rule],
}

impl NodeType {
    /// Look up a property by exact (case-sensitive) name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// If `name` is the companion of an extensible enumeration on this type,
    /// return that enumeration's descriptor.
    pub fn companion_owner(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| {
            matches!(p.kind, PropertyKind::ExtEnum { companion, .. } if companion == name)
        })
    }
}

/// A registry of node types, resolvable by name.
///
/// Implementations hold immutable static tables and are shared freely
/// across threads.
pub trait Schema: Send + Sync {
    /// Schema name used in errors and logs.
    fn name(&self) -> &'static str;

    /// The document root type.
    fn root(&self) -> &'static NodeType;

    /// Resolve a node type by name.
    fn node_type(&self, name: &str) -> Option<&'static NodeType>;

    /// Every node type, in declaration order.
    fn node_types(&self) -> &'static [&'static NodeType];
}
