//! # Schema Subcommand
//!
//! Lists the IODEF node types, or describes one type's properties and
//! completeness rules.

use std::fmt::Write as _;

use anyhow::{bail, Result};
use clap::Args;
use iodef_core::{NodeType, PropertyKind, Rule, Schema};
use iodef_schema::Iodef;

/// Arguments for the `iodef schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Node type to describe; omit to list every type.
    #[arg(value_name = "TYPE")]
    pub node_type: Option<String>,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    match &args.node_type {
        None => {
            for ty in Iodef.node_types() {
                println!("{}", ty.name);
            }
        }
        Some(name) => {
            let Some(ty) = Iodef.node_type(name) else {
                bail!("{} has no node type '{name}'", Iodef.name());
            };
            print!("{}", describe(ty));
        }
    }
    Ok(0)
}

/// Human-readable summary of a node type.
pub fn describe(ty: &NodeType) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", ty.name);
    for prop in ty.properties {
        let many = if prop.is_repeated() { "[]" } else { "" };
        let kind = match prop.kind {
            PropertyKind::Node(target) => target.to_string(),
            PropertyKind::Enum(v) => format!("enum {}", v.name),
            PropertyKind::ExtEnum { vocabulary, companion } => {
                format!("enum {} (+{companion})", vocabulary.name)
            }
            other => other.describe().to_string(),
        };
        let _ = writeln!(out, "  {}: {kind}{many}", prop.name);
    }
    for rule in ty.rules {
        let line = match rule {
            Rule::Required(p) => format!("requires {p}"),
            Rule::RequiredWhen {
                property,
                sibling,
                equals,
            } => format!("requires {property} when {sibling} = {equals}"),
            Rule::Exclusive(group) => format!("at most one of {}", group.join(", ")),
            Rule::AnyOf(group) => format!("at least one of {}", group.join(", ")),
        };
        let _ = writeln!(out, "  rule: {line}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_confidence() {
        let text = describe(Iodef.node_type("Confidence").unwrap());
        assert!(text.starts_with("Confidence\n"));
        assert!(text.contains("  rating: enum rating (+ext-rating)\n"));
        assert!(text.contains("  rule: requires value when rating = numeric\n"));
    }

    #[test]
    fn test_describe_repeated_composite() {
        let text = describe(Iodef.node_type("IODEF-Document").unwrap());
        assert!(text.contains("  Incident: Incident[]\n"));
        assert!(text.contains("  AdditionalData: ExtensionType[]\n"));
    }

    #[test]
    fn test_unknown_type_is_error() {
        let args = SchemaArgs {
            node_type: Some("Incidnet".into()),
        };
        assert!(run_schema(&args).is_err());
    }
}
