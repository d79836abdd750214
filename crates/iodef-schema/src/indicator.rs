//! # Indicator Classes
//!
//! RFC 7970 §3.20–3.29: indicators of compromise and the observables or
//! expressions that define them.

use iodef_core::{NodeType, Rule};

use crate::props::*;
use crate::vocab::{OPERATOR, RESTRICTION};

/// Exactly one of these defines an indicator.
const INDICATOR_BODY: &[&str] = &[
    "Observable",
    "uid-ref",
    "IndicatorExpression",
    "IndicatorReference",
];

const OBSERVABLE_CHOICE: &[&str] = &[
    "System",
    "Address",
    "DomainData",
    "EmailData",
    "Service",
    "RegistryHandle",
    "RecordData",
    "EventData",
    "Incident",
    "Expectation",
    "Reference",
    "Assessment",
    "DetectionPattern",
    "HistoryItem",
];

pub static INDICATOR: NodeType = NodeType {
    name: "Indicator",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        one("IndicatorID", "IndicatorID"),
        many("AlternativeIndicatorID", "AlternativeIndicatorID"),
        texts("Description"),
        datetime("StartTime"),
        datetime("EndTime"),
        one("Confidence", "Confidence"),
        many("Contact", "Contact"),
        one("Observable", "Observable"),
        token("uid-ref"),
        one("IndicatorExpression", "IndicatorExpression"),
        one("IndicatorReference", "IndicatorReference"),
        many("NodeRole", "NodeRole"),
        many("Reference", "Reference"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[
        Rule::Required("IndicatorID"),
        Rule::Exclusive(INDICATOR_BODY),
        Rule::AnyOf(INDICATOR_BODY),
    ],
};

pub static INDICATOR_ID: NodeType = NodeType {
    name: "IndicatorID",
    properties: &[text("id"), text("name"), text("version")],
    rules: &[
        Rule::Required("id"),
        Rule::Required("name"),
        Rule::Required("version"),
    ],
};

pub static ALTERNATIVE_INDICATOR_ID: NodeType = NodeType {
    name: "AlternativeIndicatorID",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        many("IndicatorReference", "IndicatorReference"),
    ],
    rules: &[Rule::Required("IndicatorReference")],
};

pub static INDICATOR_REFERENCE: NodeType = NodeType {
    name: "IndicatorReference",
    properties: &[token("uid-ref"), text("euid-ref"), text("version")],
    rules: &[
        Rule::Exclusive(&["uid-ref", "euid-ref"]),
        Rule::AnyOf(&["uid-ref", "euid-ref"]),
    ],
};

pub static INDICATOR_EXPRESSION: NodeType = NodeType {
    name: "IndicatorExpression",
    properties: &[
        closed("operator", &OPERATOR),
        many("IndicatorExpression", "IndicatorExpression"),
        many("Observable", "Observable"),
        tokens("uid-ref"),
        many("IndicatorReference", "IndicatorReference"),
        one("Confidence", "Confidence"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[Rule::AnyOf(&[
        "IndicatorExpression",
        "Observable",
        "uid-ref",
        "IndicatorReference",
    ])],
};

pub static OBSERVABLE: NodeType = NodeType {
    name: "Observable",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        one("System", "System"),
        one("Address", "Address"),
        one("DomainData", "DomainData"),
        one("EmailData", "EmailData"),
        one("Service", "Service"),
        one("RegistryHandle", "RegistryHandle"),
        one("RecordData", "RecordData"),
        one("EventData", "EventData"),
        one("Incident", "Incident"),
        one("Expectation", "Expectation"),
        one("Reference", "Reference"),
        one("Assessment", "Assessment"),
        one("DetectionPattern", "DetectionPattern"),
        one("HistoryItem", "HistoryItem"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[
        Rule::Exclusive(OBSERVABLE_CHOICE),
        Rule::AnyOf(OBSERVABLE_CHOICE),
    ],
};
