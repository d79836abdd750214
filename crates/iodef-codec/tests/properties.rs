//! # Codec and Validator Properties
//!
//! Error taxonomy, extensible-enum pairing, identifier grammar, validator
//! completeness, and case-sensitive key lookup, exercised through the
//! public API with the IODEF schema.

use iodef_codec::{encode, parse_text, CodecError, CodecOptions, Decoder};
use iodef_core::{
    ExtEnum, Node, NodeType, PropertyDescriptor, PropertyKind, Schema, ESCAPE_VALUE,
};
use iodef_schema::{Iodef, Validator, ViolatedRule};
use proptest::prelude::*;
use serde_json::{json, Value};

const MINIMAL: &str = include_str!("fixtures/minimal.json");

fn minimal() -> Value {
    serde_json::from_str(MINIMAL).unwrap()
}

fn decode(value: &Value) -> Result<Node, CodecError> {
    Decoder::new(&Iodef).decode_document(value)
}

// -- empty and malformed input ----------------------------------------------

#[test]
fn test_empty_document_round_trip() {
    let doc = decode(&json!({})).unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.type_name(), "IODEF-Document");
    assert_eq!(encode(&doc).unwrap(), json!({}));
}

#[test]
fn test_truncated_json_is_malformed() {
    let truncated = &MINIMAL[..MINIMAL.len() / 2];
    let err = Decoder::new(&Iodef).decode_str(truncated).unwrap_err();
    assert!(matches!(err, CodecError::MalformedInput { .. }));
    assert!(err.path().is_none());
    assert!(matches!(
        parse_text("{\"version\": ").unwrap_err(),
        CodecError::MalformedInput { .. }
    ));
}

// -- fail-fast decode errors ------------------------------------------------

#[test]
fn test_shape_mismatch_has_path() {
    let mut doc = minimal();
    doc["Incident"][0]["Contact"] = json!({"role": "creator", "type": "person"});
    let err = decode(&doc).unwrap_err();
    assert!(matches!(err, CodecError::ShapeMismatch { expected: "an array", .. }));
    assert_eq!(err.path().unwrap().to_string(), "/Incident/0/Contact");
}

#[test]
fn test_bad_timestamp_is_scalar_parse() {
    let mut doc = minimal();
    doc["Incident"][0]["GenerationTime"] = json!("2015-07-01 00:00:00");
    let err = decode(&doc).unwrap_err();
    assert!(matches!(err, CodecError::ScalarParse { kind: "date-time", .. }));
    assert_eq!(err.path().unwrap().to_string(), "/Incident/0/GenerationTime");
}

#[test]
fn test_identifier_grammar() {
    let mut doc = minimal();
    doc["Incident"][0]["observable-id"] = json!("a.b-c_1");
    let node = decode(&doc).unwrap();
    assert_eq!(
        node.children("Incident")[0].text("observable-id"),
        Some("a.b-c_1")
    );

    doc["Incident"][0]["observable-id"] = json!("1abc");
    let err = decode(&doc).unwrap_err();
    match &err {
        CodecError::GrammarViolation { path, source } => {
            assert_eq!(path.to_string(), "/Incident/0/observable-id");
            assert_eq!(source.value, "1abc");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_escape_without_companion_rejected() {
    let mut doc = minimal();
    doc["Incident"][0]["Contact"][0]["role"] = json!("ext-value");
    let err = decode(&doc).unwrap_err();
    match err {
        CodecError::MissingCompanion {
            path,
            property,
            companion,
        } => {
            assert_eq!(path.to_string(), "/Incident/0/Contact/0");
            assert_eq!(property, "role");
            assert_eq!(companion, "ext-role");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_stray_companion_by_policy() {
    let mut doc = minimal();
    doc["Incident"][0]["ext-purpose"] = json!("leftover");

    let lenient = decode(&doc).unwrap();
    assert!(!lenient.children("Incident")[0].is_set("ext-purpose"));

    let err = Decoder::with_options(&Iodef, CodecOptions::strict())
        .decode_document(&doc)
        .unwrap_err();
    assert!(matches!(
        err,
        CodecError::StrayCompanion {
            property: "purpose",
            ..
        }
    ));
}

#[test]
fn test_vocabulary_miss() {
    let mut doc = minimal();
    doc["Incident"][0]["purpose"] = json!("Reporting");
    assert!(matches!(
        decode(&doc).unwrap_err(),
        CodecError::ScalarParse { kind: "enumeration", .. }
    ));
}

// -- extensible enumerations ------------------------------------------------

#[test]
fn test_ext_enum_pairing_invariant() {
    let mut contact = Node::new(Iodef.node_type("Contact").unwrap());
    contact.set("type", "person").unwrap();

    contact
        .set_ext_enum("role", ExtEnum::extension("auditor"))
        .unwrap();
    assert_eq!(contact.text("role"), Some(ESCAPE_VALUE));
    assert_eq!(contact.text("ext-role"), Some("auditor"));
    assert_eq!(
        encode(&contact).unwrap(),
        json!({"role": "ext-value", "ext-role": "auditor", "type": "person"})
    );

    contact.set_ext_enum("role", ExtEnum::known("tech")).unwrap();
    assert!(!contact.is_set("ext-role"));
    assert_eq!(
        encode(&contact).unwrap(),
        json!({"role": "tech", "type": "person"})
    );
}

// -- validator completeness -------------------------------------------------

#[test]
fn test_single_violation_at_depth_three() {
    let mut doc = minimal();
    doc["Incident"][0]["Contact"][0]["RegistryHandle"][0]
        .as_object_mut()
        .unwrap()
        .remove("registry");
    let node = decode(&doc).unwrap();

    let report = Validator::new(&Iodef).check(&node);
    assert!(!report.passed());
    assert_eq!(report.len(), 1);
    let v = &report.violations()[0];
    assert_eq!(v.path.to_string(), "/Incident/0/Contact/0/RegistryHandle/0");
    assert_eq!(v.node_type, "RegistryHandle");
    assert_eq!(
        v.rule,
        ViolatedRule::Required {
            property: "registry"
        }
    );
}

#[test]
fn test_two_independent_violations() {
    let mut doc = minimal();
    doc["Incident"][0]["Contact"][0]["RegistryHandle"][0]
        .as_object_mut()
        .unwrap()
        .remove("registry");
    doc["Incident"][0]["IncidentID"]
        .as_object_mut()
        .unwrap()
        .remove("name");
    let node = decode(&doc).unwrap();

    let report = Validator::new(&Iodef).check(&node);
    assert!(!report.passed());
    assert_eq!(report.len(), 2);
    let paths: Vec<_> = report
        .violations()
        .iter()
        .map(|v| v.path.to_string())
        .collect();
    assert_eq!(
        paths,
        ["/Incident/0/IncidentID", "/Incident/0/Contact/0/RegistryHandle/0"]
    );
}

#[test]
fn test_validator_does_not_stop_decode() {
    // Completeness is not the decoder's concern.
    let node = decode(&json!({"Incident": [{"purpose": "other"}]})).unwrap();
    let report = Validator::new(&Iodef).check(&node);
    let missing: Vec<_> = report
        .violations()
        .iter()
        .filter_map(|v| match v.rule {
            ViolatedRule::Required { property } => Some(property),
            _ => None,
        })
        .collect();
    assert_eq!(
        missing,
        ["version", "IncidentID", "GenerationTime", "Contact"]
    );
}

// -- case sensitivity -------------------------------------------------------

static LABEL: NodeType = NodeType {
    name: "Label",
    properties: &[PropertyDescriptor::single("text", PropertyKind::Text)],
    rules: &[],
};

static ITEM: NodeType = NodeType {
    name: "Item",
    properties: &[
        PropertyDescriptor::single("label", PropertyKind::Text),
        PropertyDescriptor::single("Label", PropertyKind::Node("Label")),
    ],
    rules: &[],
};

static ITEM_TYPES: &[&NodeType] = &[&ITEM, &LABEL];

struct Items;

impl Schema for Items {
    fn name(&self) -> &'static str {
        "items"
    }

    fn root(&self) -> &'static NodeType {
        &ITEM
    }

    fn node_type(&self, name: &str) -> Option<&'static NodeType> {
        ITEM_TYPES.iter().copied().find(|t| t.name == name)
    }

    fn node_types(&self) -> &'static [&'static NodeType] {
        ITEM_TYPES
    }
}

#[test]
fn test_keys_differing_only_in_case() {
    let value = json!({"label": "scalar", "Label": {"text": "composite"}});
    let node = Decoder::new(&Items).decode_document(&value).unwrap();
    assert_eq!(node.text("label"), Some("scalar"));
    assert_eq!(node.child("Label").unwrap().text("text"), Some("composite"));
    assert_eq!(encode(&node).unwrap(), value);

    let only_scalar = Decoder::new(&Items)
        .decode_document(&json!({"label": "x"}))
        .unwrap();
    assert!(only_scalar.child("Label").is_none());
}

// -- generated documents ----------------------------------------------------

proptest! {
    #[test]
    fn prop_contact_round_trip(
        names in prop::collection::vec("[ -~]{0,24}", 0..4),
        role in "[a-z][a-z-]{0,12}",
        handle in "[A-Z][A-Z0-9-]{0,10}",
    ) {
        let mut contact = json!({"role": "ext-value", "ext-role": role, "type": "person"});
        if !names.is_empty() {
            contact["ContactName"] = json!(names);
        }
        contact["RegistryHandle"] = json!([{"handle": handle, "registry": "local"}]);
        let node = Decoder::new(&Iodef).decode(&contact, "Contact").unwrap();
        prop_assert_eq!(encode(&node).unwrap(), contact);
        prop_assert!(Validator::new(&Iodef).check(&node).passed());
    }

    #[test]
    fn prop_tokens_follow_grammar(id in "[a-zA-Z0-9_.-]{1,16}") {
        let mut doc = minimal();
        doc["Incident"][0]["observable-id"] = json!(id.clone());
        let valid = id.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        match decode(&doc) {
            Ok(_) => prop_assert!(valid),
            Err(CodecError::GrammarViolation { .. }) => prop_assert!(!valid),
            Err(other) => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}
