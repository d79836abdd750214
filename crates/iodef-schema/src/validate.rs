//! # Structural Validation
//!
//! Checks a decoded (or hand-built) node tree against the completeness
//! rules declared on each node type.
//!
//! Unlike decoding, validation is exhaustive: the whole tree is walked and
//! every violated rule is recorded. Findings are data. [`Validator::check`]
//! never fails and never mutates its input; the caller decides what a
//! non-empty [`ValidationReport`] means.
//!
//! ## Rules
//!
//! - [`Rule::Required`]: the property must be present.
//! - [`Rule::RequiredWhen`]: the property must be present when a sibling
//!   scalar has a given value.
//! - [`Rule::Exclusive`]: at most one of a group may be present.
//! - [`Rule::AnyOf`]: at least one of a group must be present.
//! - Every extensible enumeration carries an implicit rule: when the
//!   primary is `ext-value`, its companion must be present.

use std::fmt;

use iodef_core::{Cardinality, Node, PropertyKind, Rule, Schema, TreePath, ESCAPE_VALUE};

/// The rule a node failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolatedRule {
    /// An unconditionally required property is unset.
    Required {
        /// The missing property.
        property: &'static str,
    },
    /// A conditionally required property is unset while its trigger holds.
    RequiredWhen {
        /// The missing property.
        property: &'static str,
        /// The sibling that triggered the requirement.
        sibling: &'static str,
        /// The sibling's triggering value.
        equals: &'static str,
    },
    /// More than one member of a mutually exclusive group is present.
    Exclusive {
        /// The members that are present, in schema order.
        present: Vec<&'static str>,
    },
    /// No member of a choice group is present.
    AnyOf {
        /// The group's members.
        choices: &'static [&'static str],
    },
    /// An extensible enumeration is `ext-value` but its companion is unset.
    Companion {
        /// The enumeration property.
        property: &'static str,
        /// The missing companion.
        companion: &'static str,
    },
    /// A companion is set while its enumeration is not `ext-value`.
    StrayCompanion {
        /// The enumeration property.
        property: &'static str,
        /// The unpaired companion.
        companion: &'static str,
    },
    /// The node's type is not part of the schema being checked against.
    ForeignType {
        /// Name of the schema.
        schema: &'static str,
    },
}

impl fmt::Display for ViolatedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { property } => write!(f, "missing required property '{property}'"),
            Self::RequiredWhen {
                property,
                sibling,
                equals,
            } => write!(
                f,
                "missing property '{property}', required when '{sibling}' is '{equals}'"
            ),
            Self::Exclusive { present } => write!(
                f,
                "at most one of [{}] may be present, found {}",
                present.join(", "),
                present.len()
            ),
            Self::AnyOf { choices } => {
                write!(f, "one of [{}] must be present", choices.join(", "))
            }
            Self::Companion {
                property,
                companion,
            } => write!(
                f,
                "'{property}' is '{ESCAPE_VALUE}' but companion '{companion}' is missing"
            ),
            Self::StrayCompanion {
                property,
                companion,
            } => write!(
                f,
                "companion '{companion}' is set but '{property}' is not '{ESCAPE_VALUE}'"
            ),
            Self::ForeignType { schema } => write!(f, "node type is not defined by {schema}"),
        }
    }
}

/// A single validation finding with its location in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path from the document root to the offending node.
    pub path: TreePath,
    /// Type of the offending node.
    pub node_type: &'static str,
    /// The rule that failed.
    pub rule: ViolatedRule,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {} ({}): {}", self.path, self.node_type, self.rule)
    }
}

/// Outcome of a validation walk: every violation, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// True iff no rule was violated.
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// Walks node trees checking completeness rules.
#[derive(Clone, Copy)]
pub struct Validator<'s> {
    schema: &'s dyn Schema,
}

impl<'s> Validator<'s> {
    /// Create a validator for trees built from `schema`.
    pub fn new(schema: &'s dyn Schema) -> Self {
        Self { schema }
    }

    /// Check `node` and everything beneath it.
    ///
    /// Paths in the report are relative to `node`.
    pub fn check(&self, node: &Node) -> ValidationReport {
        let mut report = ValidationReport::default();
        let mut path = TreePath::root();
        self.walk(node, &mut path, &mut report.violations);
        tracing::debug!(
            schema = self.schema.name(),
            node_type = node.type_name(),
            violations = report.len(),
            "validated tree"
        );
        report
    }

    fn walk(&self, node: &Node, path: &mut TreePath, out: &mut Vec<Violation>) {
        let ty = node.node_type();
        let mut fail = |rule: ViolatedRule| {
            out.push(Violation {
                path: path.clone(),
                node_type: ty.name,
                rule,
            })
        };

        let known = self
            .schema
            .node_type(ty.name)
            .is_some_and(|t| std::ptr::eq(t, ty));
        if !known {
            fail(ViolatedRule::ForeignType {
                schema: self.schema.name(),
            });
        }

        for rule in ty.rules {
            match *rule {
                Rule::Required(property) => {
                    if !node.is_set(property) {
                        fail(ViolatedRule::Required { property });
                    }
                }
                Rule::RequiredWhen {
                    property,
                    sibling,
                    equals,
                } => {
                    if node.text(sibling) == Some(equals) && !node.is_set(property) {
                        fail(ViolatedRule::RequiredWhen {
                            property,
                            sibling,
                            equals,
                        });
                    }
                }
                Rule::Exclusive(group) => {
                    let present: Vec<_> =
                        group.iter().copied().filter(|p| node.is_set(p)).collect();
                    if present.len() > 1 {
                        fail(ViolatedRule::Exclusive { present });
                    }
                }
                Rule::AnyOf(choices) => {
                    if !choices.iter().any(|p| node.is_set(p)) {
                        fail(ViolatedRule::AnyOf { choices });
                    }
                }
            }
        }

        for prop in ty.properties {
            if let PropertyKind::ExtEnum { companion, .. } = prop.kind {
                let escaped = node.text(prop.name) == Some(ESCAPE_VALUE);
                if escaped && !node.is_set(companion) {
                    fail(ViolatedRule::Companion {
                        property: prop.name,
                        companion,
                    });
                } else if !escaped && node.is_set(companion) {
                    fail(ViolatedRule::StrayCompanion {
                        property: prop.name,
                        companion,
                    });
                }
            }
        }

        for prop in node.present() {
            if !prop.kind.is_composite() {
                continue;
            }
            path.push_key(prop.name);
            match prop.cardinality {
                Cardinality::Single => {
                    if let Some(child) = node.child(prop.name) {
                        self.walk(child, path, out);
                    }
                }
                Cardinality::Repeated => {
                    for (i, child) in node.children(prop.name).iter().enumerate() {
                        path.push_index(i);
                        self.walk(child, path, out);
                        path.pop();
                    }
                }
            }
            path.pop();
        }
    }
}

impl fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("schema", &self.schema.name())
            .finish()
    }
}
