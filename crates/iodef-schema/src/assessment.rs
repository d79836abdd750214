//! # Discovery, Method, and Assessment Classes
//!
//! RFC 7970 §3.10–3.12: how an incident was found, the techniques used,
//! and its technical and non-technical impact.

use iodef_core::{NodeType, Rule};

use crate::props::*;
use crate::vocab::{
    BUSINESS_IMPACT_TYPE, BUSINESS_SEVERITY, COMPLETION, CONFIDENCE_RATING, COUNTER_TYPE,
    COUNTER_UNIT, DISCOVERY_SOURCE, DURATION, OCCURRENCE, RESTRICTION, SEVERITY,
    SYSTEM_IMPACT_TYPE, TIME_METRIC,
};

pub static DISCOVERY: NodeType = NodeType {
    name: "Discovery",
    properties: &[
        ext("source", "ext-source", &DISCOVERY_SOURCE),
        text("ext-source"),
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        texts("Description"),
        many("Contact", "Contact"),
        many("DetectionPattern", "DetectionPattern"),
    ],
    rules: &[],
};

pub static DETECTION_PATTERN: NodeType = NodeType {
    name: "DetectionPattern",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        token("observable-id"),
        one("Application", "Software"),
        texts("Description"),
        texts("DetectionConfiguration"),
    ],
    rules: &[
        Rule::Required("Application"),
        Rule::AnyOf(&["Description", "DetectionConfiguration"]),
    ],
};

pub static METHOD: NodeType = NodeType {
    name: "Method",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        many("Reference", "Reference"),
        texts("Description"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[Rule::AnyOf(&["Reference", "Description"])],
};

pub static REFERENCE: NodeType = NodeType {
    name: "Reference",
    properties: &[
        token("observable-id"),
        text("ReferenceName"),
        texts("URL"),
        texts("Description"),
    ],
    rules: &[Rule::AnyOf(&["ReferenceName", "URL", "Description"])],
};

pub static ASSESSMENT: NodeType = NodeType {
    name: "Assessment",
    properties: &[
        closed("occurrence", &OCCURRENCE),
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        token("observable-id"),
        texts("IncidentCategory"),
        many("SystemImpact", "SystemImpact"),
        many("BusinessImpact", "BusinessImpact"),
        many("TimeImpact", "TimeImpact"),
        many("MonetaryImpact", "MonetaryImpact"),
        many("IntendedImpact", "IntendedImpact"),
        many("Counter", "Counter"),
        texts("MitigatingFactor"),
        texts("Cause"),
        one("Confidence", "Confidence"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[Rule::AnyOf(&[
        "SystemImpact",
        "BusinessImpact",
        "TimeImpact",
        "MonetaryImpact",
        "IntendedImpact",
    ])],
};

pub static SYSTEM_IMPACT: NodeType = NodeType {
    name: "SystemImpact",
    properties: &[
        closed("severity", &SEVERITY),
        closed("completion", &COMPLETION),
        ext("type", "ext-type", &SYSTEM_IMPACT_TYPE),
        text("ext-type"),
        texts("Description"),
    ],
    rules: &[Rule::Required("type")],
};

pub static BUSINESS_IMPACT: NodeType = NodeType {
    name: "BusinessImpact",
    properties: &[
        ext("severity", "ext-severity", &BUSINESS_SEVERITY),
        text("ext-severity"),
        ext("type", "ext-type", &BUSINESS_IMPACT_TYPE),
        text("ext-type"),
        texts("Description"),
    ],
    rules: &[Rule::Required("type")],
};

// Same shape as BusinessImpact, describing what the attacker intended.
pub static INTENDED_IMPACT: NodeType = NodeType {
    name: "IntendedImpact",
    properties: &[
        ext("severity", "ext-severity", &BUSINESS_SEVERITY),
        text("ext-severity"),
        ext("type", "ext-type", &BUSINESS_IMPACT_TYPE),
        text("ext-type"),
        texts("Description"),
    ],
    rules: &[Rule::Required("type")],
};

pub static TIME_IMPACT: NodeType = NodeType {
    name: "TimeImpact",
    properties: &[
        real("value"),
        closed("severity", &SEVERITY),
        ext("metric", "ext-metric", &TIME_METRIC),
        text("ext-metric"),
        ext("duration", "ext-duration", &DURATION),
        text("ext-duration"),
    ],
    rules: &[Rule::Required("value"), Rule::Required("metric")],
};

pub static MONETARY_IMPACT: NodeType = NodeType {
    name: "MonetaryImpact",
    properties: &[
        real("value"),
        closed("severity", &SEVERITY),
        text("currency"),
    ],
    rules: &[Rule::Required("value")],
};

pub static COUNTER: NodeType = NodeType {
    name: "Counter",
    properties: &[
        real("value"),
        ext("type", "ext-type", &COUNTER_TYPE),
        text("ext-type"),
        ext("unit", "ext-unit", &COUNTER_UNIT),
        text("ext-unit"),
        text("meaning"),
        ext("duration", "ext-duration", &DURATION),
        text("ext-duration"),
    ],
    rules: &[
        Rule::Required("value"),
        Rule::Required("type"),
        Rule::Required("unit"),
    ],
};

pub static CONFIDENCE: NodeType = NodeType {
    name: "Confidence",
    properties: &[
        ext("rating", "ext-rating", &CONFIDENCE_RATING),
        text("ext-rating"),
        real("value"),
    ],
    rules: &[
        Rule::Required("rating"),
        Rule::RequiredWhen {
            property: "value",
            sibling: "rating",
            equals: "numeric",
        },
    ],
};
