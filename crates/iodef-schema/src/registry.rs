//! # Schema Registry
//!
//! [`Iodef`] exposes the IODEF v2 node-type tables through the
//! [`Schema`] trait. The name index is built once on first use and is
//! immutable afterwards.
//!
//! [`verify`] checks that a schema's tables are internally consistent:
//! every nested type reference resolves, every extensible enumeration has
//! a text companion declared on the same type, and every rule names a
//! declared property.

use std::collections::{HashMap, HashSet};

use iodef_core::{Cardinality, NodeType, PropertyKind, Rule, Schema};
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::{assessment, contact, document, event, indicator};

/// Every IODEF node type, in declaration order.
pub static ALL_TYPES: &[&NodeType] = &[
    &document::IODEF_DOCUMENT,
    &document::INCIDENT,
    &document::INCIDENT_ID,
    &document::ALTERNATIVE_ID,
    &document::RELATED_ACTIVITY,
    &document::THREAT_ACTOR,
    &document::CAMPAIGN,
    &document::HISTORY,
    &document::HISTORY_ITEM,
    &contact::CONTACT,
    &contact::REGISTRY_HANDLE,
    &contact::POSTAL_ADDRESS,
    &contact::EMAIL,
    &contact::TELEPHONE,
    &assessment::DISCOVERY,
    &assessment::DETECTION_PATTERN,
    &assessment::METHOD,
    &assessment::REFERENCE,
    &assessment::ASSESSMENT,
    &assessment::SYSTEM_IMPACT,
    &assessment::BUSINESS_IMPACT,
    &assessment::INTENDED_IMPACT,
    &assessment::TIME_IMPACT,
    &assessment::MONETARY_IMPACT,
    &assessment::COUNTER,
    &assessment::CONFIDENCE,
    &event::EVENT_DATA,
    &event::EXPECTATION,
    &event::SYSTEM,
    &event::NODE,
    &event::ADDRESS,
    &event::DOMAIN_DATA,
    &event::NODE_ROLE,
    &event::SERVICE,
    &event::SERVICE_NAME,
    &event::SOFTWARE,
    &event::SOFTWARE_REFERENCE,
    &event::RECORD_DATA,
    &event::RECORD_PATTERN,
    &event::EXTENSION_TYPE,
    &event::EMAIL_DATA,
    &indicator::INDICATOR,
    &indicator::INDICATOR_ID,
    &indicator::ALTERNATIVE_INDICATOR_ID,
    &indicator::INDICATOR_REFERENCE,
    &indicator::INDICATOR_EXPRESSION,
    &indicator::OBSERVABLE,
];

static INDEX: Lazy<HashMap<&'static str, &'static NodeType>> =
    Lazy::new(|| ALL_TYPES.iter().map(|ty| (ty.name, *ty)).collect());

/// The IODEF v2 schema (RFC 7970 classes, RFC 8727 JSON keys).
#[derive(Debug, Clone, Copy, Default)]
pub struct Iodef;

impl Schema for Iodef {
    fn name(&self) -> &'static str {
        "IODEF 2.0"
    }

    fn root(&self) -> &'static NodeType {
        &document::IODEF_DOCUMENT
    }

    fn node_type(&self, name: &str) -> Option<&'static NodeType> {
        INDEX.get(name).copied()
    }

    fn node_types(&self) -> &'static [&'static NodeType] {
        ALL_TYPES
    }
}

/// Inconsistency in a schema's descriptor tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two types share a name.
    #[error("duplicate node type '{name}'")]
    DuplicateType {
        /// The repeated name.
        name: &'static str,
    },

    /// Two properties on one type share a name.
    #[error("{node_type}: duplicate property '{property}'")]
    DuplicateProperty {
        /// Owning type.
        node_type: &'static str,
        /// The repeated name.
        property: &'static str,
    },

    /// A composite property references a type the schema does not define.
    #[error("{node_type}.{property}: unresolved node type '{target}'")]
    UnresolvedType {
        /// Owning type.
        node_type: &'static str,
        /// Composite property.
        property: &'static str,
        /// Referenced type name.
        target: &'static str,
    },

    /// An extensible enumeration's companion is absent or not single text.
    #[error("{node_type}.{property}: companion '{companion}' must be a single text property")]
    BadCompanion {
        /// Owning type.
        node_type: &'static str,
        /// Extensible enumeration.
        property: &'static str,
        /// Declared companion name.
        companion: &'static str,
    },

    /// A rule names a property the type does not declare.
    #[error("{node_type}: rule references undeclared property '{property}'")]
    UnknownRuleProperty {
        /// Owning type.
        node_type: &'static str,
        /// Undeclared name.
        property: &'static str,
    },
}

/// Check a schema's tables for internal consistency.
///
/// # Errors
///
/// Returns the first [`SchemaError`] found, scanning types in declaration
/// order.
pub fn verify(schema: &dyn Schema) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for ty in schema.node_types() {
        if !seen.insert(ty.name) {
            return Err(SchemaError::DuplicateType { name: ty.name });
        }
        verify_type(schema, ty)?;
    }
    Ok(())
}

fn verify_type(schema: &dyn Schema, ty: &'static NodeType) -> Result<(), SchemaError> {
    let mut names = HashSet::new();
    for prop in ty.properties {
        if !names.insert(prop.name) {
            return Err(SchemaError::DuplicateProperty {
                node_type: ty.name,
                property: prop.name,
            });
        }
        match prop.kind {
            PropertyKind::Node(target) if schema.node_type(target).is_none() => {
                return Err(SchemaError::UnresolvedType {
                    node_type: ty.name,
                    property: prop.name,
                    target,
                });
            }
            PropertyKind::ExtEnum { companion, .. } => {
                let ok = ty.property(companion).is_some_and(|c| {
                    matches!(c.kind, PropertyKind::Text) && c.cardinality == Cardinality::Single
                });
                if !ok || prop.cardinality != Cardinality::Single {
                    return Err(SchemaError::BadCompanion {
                        node_type: ty.name,
                        property: prop.name,
                        companion,
                    });
                }
            }
            _ => {}
        }
    }

    let declared = |property: &'static str| {
        if ty.property(property).is_some() {
            Ok(())
        } else {
            Err(SchemaError::UnknownRuleProperty {
                node_type: ty.name,
                property,
            })
        }
    };
    for rule in ty.rules {
        match *rule {
            Rule::Required(p) => declared(p)?,
            Rule::RequiredWhen {
                property, sibling, ..
            } => {
                declared(property)?;
                declared(sibling)?;
            }
            Rule::Exclusive(group) | Rule::AnyOf(group) => {
                for &p in group {
                    declared(p)?;
                }
            }
        }
    }
    Ok(())
}
