//! # Round-Trip Tests Against IODEF Documents
//!
//! Decodes real incident reports with the IODEF schema, re-encodes them,
//! and checks that nothing is gained, lost, or reordered:
//!
//! 1. **Stability**: `encode(decode(v)) == v` for canonical input, and the
//!    rendered text is a fixed point of decode-then-encode.
//! 2. **Presence**: absent properties stay absent.
//! 3. **Order**: repeated elements keep document order.

use iodef_codec::{encode, encode_string, Decoder};
use iodef_core::{ExtEnum, Node};
use iodef_schema::{Iodef, Validator};
use serde_json::Value;

const MINIMAL: &str = include_str!("fixtures/minimal.json");
const CAMPAIGN: &str = include_str!("fixtures/campaign.json");
const LATERAL: &str = include_str!("fixtures/lateral-movement.json");

fn fixtures() -> [(&'static str, &'static str); 3] {
    [
        ("minimal", MINIMAL),
        ("campaign", CAMPAIGN),
        ("lateral-movement", LATERAL),
    ]
}

fn decode(text: &str) -> Node {
    Decoder::new(&Iodef)
        .decode_str(text)
        .expect("fixture should decode")
}

#[test]
fn test_fixtures_decode_and_validate() {
    for (name, text) in fixtures() {
        let doc = decode(text);
        let report = Validator::new(&Iodef).check(&doc);
        assert!(report.passed(), "{name} failed validation:\n{report}");
    }
}

#[test]
fn test_encode_reproduces_input() {
    for (name, text) in fixtures() {
        let original: Value = serde_json::from_str(text).unwrap();
        let encoded = encode(&decode(text)).unwrap();
        assert_eq!(encoded, original, "{name} changed on round trip");
    }
}

#[test]
fn test_text_is_fixed_point() {
    for (name, text) in fixtures() {
        let once = encode_string(&decode(text), true).unwrap();
        let twice = encode_string(&decode(&once), true).unwrap();
        assert_eq!(once, twice, "{name} is not stable");
        assert_eq!(decode(&once), decode(text));
    }
}

#[test]
fn test_presence_fidelity() {
    let doc = decode(MINIMAL);
    let incident = &doc.children("Incident")[0];
    for unset in ["status", "ext-purpose", "DetectTime", "History", "Indicator"] {
        assert!(!incident.is_set(unset), "{unset} appeared from nowhere");
    }
    let encoded = encode(&doc).unwrap();
    let inc = &encoded["Incident"][0];
    assert!(inc.get("status").is_none());
    assert!(inc.get("Indicator").is_none());
    assert_eq!(inc["restriction"], "private");
}

#[test]
fn test_empty_text_is_present() {
    let text = r#"{"version": "2.0", "lang": "", "Incident": []}"#;
    let doc = decode(text);
    assert!(doc.is_set("lang"));
    assert_eq!(doc.text("lang"), Some(""));
    // An empty sequence is the same as an absent one.
    assert!(!doc.is_set("Incident"));
    assert_eq!(
        encode(&doc).unwrap(),
        serde_json::json!({"version": "2.0", "lang": ""})
    );
}

#[test]
fn test_repeated_order_preserved() {
    let doc = decode(CAMPAIGN);
    let incident = &doc.children("Incident")[0];
    let ids: Vec<_> = incident
        .children("Indicator")
        .iter()
        .map(|i| i.child("IndicatorID").unwrap().text("id").unwrap())
        .collect();
    assert_eq!(ids, ["G90823490", "G90823491", "G90823492"]);

    let expr = incident.children("Indicator")[1]
        .child("IndicatorExpression")
        .unwrap();
    let addrs: Vec<_> = expr
        .children("Observable")
        .iter()
        .map(|o| o.child("Address").unwrap().text("value").unwrap())
        .collect();
    assert_eq!(addrs, ["192.0.2.1", "198.51.100.1"]);

    let lateral = decode(LATERAL);
    let history = lateral.children("Incident")[0].child("History").unwrap();
    let actions: Vec<_> = history
        .children("HistoryItem")
        .iter()
        .map(|h| h.text("action").unwrap())
        .collect();
    assert_eq!(actions, ["investigate", "block-host"]);
}

#[test]
fn test_canonical_key_order() {
    // Keys out of schema order in the source come back in schema order.
    let text = r#"{"Incident": [], "lang": "en", "version": "2.0"}"#;
    assert_eq!(
        encode_string(&decode(text), false).unwrap(),
        r#"{"version":"2.0","lang":"en"}"#
    );
}

#[test]
fn test_extension_values_survive() {
    let doc = decode(LATERAL);
    let incident = &doc.children("Incident")[0];
    assert_eq!(
        incident.ext_enum("purpose"),
        Some(ExtEnum::extension("exercise"))
    );
    assert_eq!(
        incident.ext_enum("restriction"),
        Some(ExtEnum::known("need-to-know"))
    );
    let nested = &incident.children("Contact")[0].children("Contact")[0];
    assert_eq!(nested.ext_enum("role").unwrap().value(), "duty-officer");

    let encoded = encode(&doc).unwrap();
    assert_eq!(encoded["Incident"][0]["purpose"], "ext-value");
    assert_eq!(encoded["Incident"][0]["ext-purpose"], "exercise");
    assert!(encoded["Incident"][0].get("ext-restriction").is_none());
}

#[test]
fn test_timestamps_keep_offset() {
    let doc = decode(LATERAL);
    let detect = doc.children("Incident")[0].timestamp("DetectTime").unwrap();
    assert_eq!(detect.offset_seconds(), 2 * 3600);
    assert_eq!(detect.to_rfc3339(), "2015-10-15T08:30:12.250000000+02:00");
}

#[test]
fn test_timestamps_normalized() {
    let text = r#"{"version": "2.0", "Incident": [{"GenerationTime": "2015-07-01T05:00:00Z", "StartTime": "2015-07-01T05:00:00.1-05:00"}]}"#;
    let encoded = encode(&decode(text)).unwrap();
    assert_eq!(
        encoded["Incident"][0]["GenerationTime"],
        "2015-07-01T05:00:00.000000000+00:00"
    );
    assert_eq!(
        encoded["Incident"][0]["StartTime"],
        "2015-07-01T05:00:00.100000000-05:00"
    );
}

#[test]
fn test_mutation_then_encode() {
    let mut doc = decode(MINIMAL);
    let incident = &mut doc.children_mut("Incident")[0];
    incident
        .set_ext_enum("status", ExtEnum::extension("escalated"))
        .unwrap();
    incident.set("DetectTime", "2015-07-01T04:00:00Z").unwrap();

    let encoded = encode(&doc).unwrap();
    let inc = encoded["Incident"][0].as_object().unwrap();
    let keys: Vec<_> = inc.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [
            "purpose",
            "status",
            "ext-status",
            "restriction",
            "IncidentID",
            "DetectTime",
            "GenerationTime",
            "Contact",
        ]
    );
    assert!(Validator::new(&Iodef).check(&doc).passed());
}
