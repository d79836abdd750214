//! # Document and Incident Classes
//!
//! RFC 7970 §3.1–3.7 and §3.13: the document root, the incident, and the
//! classes that identify and relate incidents to each other.

use iodef_core::{NodeType, Rule};

use crate::props::*;
use crate::vocab::{ACTION, INCIDENT_STATUS, PURPOSE, RESTRICTION};

pub static IODEF_DOCUMENT: NodeType = NodeType {
    name: "IODEF-Document",
    properties: &[
        text("version"),
        text("lang"),
        text("format-id"),
        text("private-enum-name"),
        text("private-enum-id"),
        many("Incident", "Incident"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[Rule::Required("version"), Rule::Required("Incident")],
};

pub static INCIDENT: NodeType = NodeType {
    name: "Incident",
    properties: &[
        ext("purpose", "ext-purpose", &PURPOSE),
        text("ext-purpose"),
        ext("status", "ext-status", &INCIDENT_STATUS),
        text("ext-status"),
        text("lang"),
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        token("observable-id"),
        one("IncidentID", "IncidentID"),
        one("AlternativeID", "AlternativeID"),
        many("RelatedActivity", "RelatedActivity"),
        datetime("DetectTime"),
        datetime("StartTime"),
        datetime("EndTime"),
        datetime("RecoveryTime"),
        datetime("ReportTime"),
        datetime("GenerationTime"),
        texts("Description"),
        many("Discovery", "Discovery"),
        many("Assessment", "Assessment"),
        many("Method", "Method"),
        many("Contact", "Contact"),
        many("EventData", "EventData"),
        many("Indicator", "Indicator"),
        one("History", "History"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[
        Rule::Required("purpose"),
        Rule::Required("IncidentID"),
        Rule::Required("GenerationTime"),
        Rule::Required("Contact"),
    ],
};

pub static INCIDENT_ID: NodeType = NodeType {
    name: "IncidentID",
    properties: &[
        text("id"),
        text("name"),
        text("instance"),
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
    ],
    rules: &[Rule::Required("id"), Rule::Required("name")],
};

pub static ALTERNATIVE_ID: NodeType = NodeType {
    name: "AlternativeID",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        many("IncidentID", "IncidentID"),
    ],
    rules: &[Rule::Required("IncidentID")],
};

pub static RELATED_ACTIVITY: NodeType = NodeType {
    name: "RelatedActivity",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        many("IncidentID", "IncidentID"),
        texts("URL"),
        many("ThreatActor", "ThreatActor"),
        many("Campaign", "Campaign"),
        many("IndicatorID", "IndicatorID"),
        one("Confidence", "Confidence"),
        texts("Description"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[Rule::AnyOf(&[
        "IncidentID",
        "URL",
        "ThreatActor",
        "Campaign",
        "IndicatorID",
    ])],
};

pub static THREAT_ACTOR: NodeType = NodeType {
    name: "ThreatActor",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        texts("ThreatActorID"),
        texts("URL"),
        texts("Description"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[Rule::AnyOf(&["ThreatActorID", "URL", "Description"])],
};

pub static CAMPAIGN: NodeType = NodeType {
    name: "Campaign",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        texts("CampaignID"),
        texts("URL"),
        texts("Description"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[Rule::AnyOf(&["CampaignID", "URL", "Description"])],
};

pub static HISTORY: NodeType = NodeType {
    name: "History",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        many("HistoryItem", "HistoryItem"),
    ],
    rules: &[Rule::Required("HistoryItem")],
};

pub static HISTORY_ITEM: NodeType = NodeType {
    name: "HistoryItem",
    properties: &[
        ext("action", "ext-action", &ACTION),
        text("ext-action"),
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        token("observable-id"),
        datetime("DateTime"),
        one("IncidentID", "IncidentID"),
        one("Contact", "Contact"),
        texts("Description"),
        texts("DefinedCOA"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[
        Rule::Required("action"),
        Rule::Required("DateTime"),
        Rule::RequiredWhen {
            property: "DefinedCOA",
            sibling: "action",
            equals: "defined-coa",
        },
    ],
};
