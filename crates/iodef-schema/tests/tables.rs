//! # Schema Table Invariants
//!
//! Whole-schema checks over the IODEF descriptor tables: every class is
//! reachable from the document root, extensible enumerations are declared
//! with their companions, and rule sets hold up on hand-built documents.

use std::collections::{HashSet, VecDeque};

use iodef_core::{ExtEnum, Node, PropertyKind, Schema, ESCAPE_VALUE};
use iodef_schema::{verify, Iodef, Validator, ViolatedRule};

fn node(type_name: &str) -> Node {
    Node::new(Iodef.node_type(type_name).expect("type should exist"))
}

#[test]
fn test_schema_verifies() {
    verify(&Iodef).expect("IODEF tables should be consistent");
}

#[test]
fn test_every_type_reachable_from_root() {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([Iodef.root()]);
    while let Some(ty) = queue.pop_front() {
        if !seen.insert(ty.name) {
            continue;
        }
        for prop in ty.properties {
            if let PropertyKind::Node(target) = prop.kind {
                queue.push_back(Iodef.node_type(target).unwrap());
            }
        }
    }
    let all: HashSet<_> = Iodef.node_types().iter().map(|t| t.name).collect();
    assert_eq!(seen, all);
}

#[test]
fn test_companion_follows_primary() {
    for ty in Iodef.node_types() {
        for (i, prop) in ty.properties.iter().enumerate() {
            if let PropertyKind::ExtEnum {
                vocabulary,
                companion,
            } = prop.kind
            {
                assert!(
                    vocabulary.values.contains(&ESCAPE_VALUE),
                    "{}.{} uses closed vocabulary {}",
                    ty.name,
                    prop.name,
                    vocabulary.name
                );
                assert_eq!(
                    ty.properties.get(i + 1).map(|p| p.name),
                    Some(companion),
                    "{}.{} companion out of place",
                    ty.name,
                    prop.name
                );
            }
        }
    }
}

#[test]
fn test_system_requires_node_with_address_or_domain() {
    let mut system = node("System");
    system.set("category", "target").unwrap();
    system.set_child("Node", node("Node")).unwrap();

    let report = Validator::new(&Iodef).check(&system);
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations()[0].path.to_string(), "/Node");
    assert!(matches!(
        report.violations()[0].rule,
        ViolatedRule::AnyOf { .. }
    ));

    let mut address = node("Address");
    address.set("value", "192.0.2.10").unwrap();
    address
        .set_ext_enum("category", ExtEnum::known("ipv4-addr"))
        .unwrap();
    system
        .child_mut("Node")
        .unwrap()
        .push_child("Address", address)
        .unwrap();
    assert!(Validator::new(&Iodef).check(&system).passed());
}

#[test]
fn test_expectation_defined_coa() {
    let mut exp = node("Expectation");
    exp.set("action", "defined-coa").unwrap();
    let report = Validator::new(&Iodef).check(&exp);
    assert_eq!(
        report.violations()[0].rule,
        ViolatedRule::RequiredWhen {
            property: "DefinedCOA",
            sibling: "action",
            equals: "defined-coa",
        }
    );

    exp.push_value("DefinedCOA", "Isolate host").unwrap();
    assert!(Validator::new(&Iodef).check(&exp).passed());
}

#[test]
fn test_service_port_exclusive() {
    let mut svc = node("Service");
    svc.set("Port", 443_i64).unwrap();
    svc.set("Portlist", "80,443").unwrap();
    let report = Validator::new(&Iodef).check(&svc);
    assert_eq!(
        report.violations()[0].rule,
        ViolatedRule::Exclusive {
            present: vec!["Port", "Portlist"],
        }
    );
}

#[test]
fn test_closed_vocabulary_rejects_extension() {
    let mut assessment = node("Assessment");
    assert!(assessment.set("occurrence", ESCAPE_VALUE).is_err());
    assert!(assessment.set("occurrence", "potential").is_ok());
}
