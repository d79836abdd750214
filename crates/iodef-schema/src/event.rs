//! # Event, System, and Record Classes
//!
//! RFC 7970 §3.14–3.19: the systems and services involved in an event,
//! the expected response, and supporting log data.

use iodef_core::{NodeType, Rule};

use crate::props::*;
use crate::vocab::{
    ACTION, ADDRESS_CATEGORY, DOMAIN_STATUS, DTYPE, NODE_ROLE_CATEGORY, OFFSET_UNIT, OWNERSHIP,
    RECORD_PATTERN_TYPE, RESTRICTION, SEVERITY, SPEC_NAME, SYSTEM_CATEGORY, SYSTEM_STATUS,
    YES_NO_UNKNOWN,
};

pub static EVENT_DATA: NodeType = NodeType {
    name: "EventData",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        token("observable-id"),
        texts("Description"),
        datetime("DetectTime"),
        datetime("StartTime"),
        datetime("EndTime"),
        datetime("RecoveryTime"),
        datetime("ReportTime"),
        many("Contact", "Contact"),
        many("Discovery", "Discovery"),
        one("Assessment", "Assessment"),
        many("Method", "Method"),
        many("System", "System"),
        many("Expectation", "Expectation"),
        many("RecordData", "RecordData"),
        many("EventData", "EventData"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[],
};

pub static EXPECTATION: NodeType = NodeType {
    name: "Expectation",
    properties: &[
        ext("action", "ext-action", &ACTION),
        text("ext-action"),
        closed("severity", &SEVERITY),
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        token("observable-id"),
        texts("Description"),
        texts("DefinedCOA"),
        datetime("StartTime"),
        datetime("EndTime"),
        one("Contact", "Contact"),
    ],
    rules: &[Rule::RequiredWhen {
        property: "DefinedCOA",
        sibling: "action",
        equals: "defined-coa",
    }],
};

pub static SYSTEM: NodeType = NodeType {
    name: "System",
    properties: &[
        ext("category", "ext-category", &SYSTEM_CATEGORY),
        text("ext-category"),
        text("interface"),
        closed("spoofed", &YES_NO_UNKNOWN),
        closed("virtual", &YES_NO_UNKNOWN),
        ext("ownership", "ext-ownership", &OWNERSHIP),
        text("ext-ownership"),
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        token("observable-id"),
        one("Node", "Node"),
        many("NodeRole", "NodeRole"),
        many("Service", "Service"),
        many("OperatingSystem", "Software"),
        many("Counter", "Counter"),
        texts("AssetID"),
        texts("Description"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[Rule::Required("Node")],
};

pub static NODE: NodeType = NodeType {
    name: "Node",
    properties: &[
        many("DomainData", "DomainData"),
        many("Address", "Address"),
        one("PostalAddress", "PostalAddress"),
        texts("Location"),
        many("Counter", "Counter"),
    ],
    rules: &[Rule::AnyOf(&["DomainData", "Address"])],
};

pub static ADDRESS: NodeType = NodeType {
    name: "Address",
    properties: &[
        text("value"),
        ext("category", "ext-category", &ADDRESS_CATEGORY),
        text("ext-category"),
        text("vlan-name"),
        integer("vlan-num"),
        token("observable-id"),
    ],
    rules: &[Rule::Required("value")],
};

pub static DOMAIN_DATA: NodeType = NodeType {
    name: "DomainData",
    properties: &[
        ext("system-status", "ext-system-status", &SYSTEM_STATUS),
        text("ext-system-status"),
        ext("domain-status", "ext-domain-status", &DOMAIN_STATUS),
        text("ext-domain-status"),
        token("observable-id"),
        text("Name"),
        datetime("DateDomainWasChecked"),
        datetime("RegistrationDate"),
        datetime("ExpirationDate"),
        many("Contact", "Contact"),
    ],
    rules: &[
        Rule::Required("system-status"),
        Rule::Required("domain-status"),
        Rule::Required("Name"),
    ],
};

pub static NODE_ROLE: NodeType = NodeType {
    name: "NodeRole",
    properties: &[
        ext("category", "ext-category", &NODE_ROLE_CATEGORY),
        text("ext-category"),
        texts("Description"),
    ],
    rules: &[Rule::Required("category")],
};

pub static SERVICE: NodeType = NodeType {
    name: "Service",
    properties: &[
        integer("ip-protocol"),
        token("observable-id"),
        one("ServiceName", "ServiceName"),
        integer("Port"),
        text("Portlist"),
        integer("ProtoCode"),
        integer("ProtoType"),
        integer("ProtoField"),
        one("EmailData", "EmailData"),
        one("Application", "Software"),
    ],
    rules: &[Rule::Exclusive(&["Port", "Portlist"])],
};

pub static SERVICE_NAME: NodeType = NodeType {
    name: "ServiceName",
    properties: &[text("IANAService"), texts("URL"), texts("Description")],
    rules: &[Rule::AnyOf(&["IANAService", "URL", "Description"])],
};

/// Shared by `Application` and `OperatingSystem`.
pub static SOFTWARE: NodeType = NodeType {
    name: "Software",
    properties: &[
        one("SoftwareReference", "SoftwareReference"),
        texts("URL"),
        texts("Description"),
    ],
    rules: &[Rule::AnyOf(&["SoftwareReference", "URL", "Description"])],
};

pub static SOFTWARE_REFERENCE: NodeType = NodeType {
    name: "SoftwareReference",
    properties: &[
        ext("spec-name", "ext-specname", &SPEC_NAME),
        text("ext-specname"),
        ext("dtype", "ext-dtype", &DTYPE),
        text("ext-dtype"),
        text("value"),
    ],
    rules: &[Rule::Required("spec-name")],
};

pub static RECORD_DATA: NodeType = NodeType {
    name: "RecordData",
    properties: &[
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        token("observable-id"),
        datetime("DateTime"),
        texts("Description"),
        one("Application", "Software"),
        many("RecordPattern", "RecordPattern"),
        many("RecordItem", "ExtensionType"),
        texts("URL"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[],
};

pub static RECORD_PATTERN: NodeType = NodeType {
    name: "RecordPattern",
    properties: &[
        text("value"),
        ext("type", "ext-type", &RECORD_PATTERN_TYPE),
        text("ext-type"),
        integer("offset"),
        ext("offsetunit", "ext-offsetunit", &OFFSET_UNIT),
        text("ext-offsetunit"),
        integer("instance"),
    ],
    rules: &[Rule::Required("value"), Rule::Required("type")],
};

/// Shared by `AdditionalData` and `RecordItem`.
pub static EXTENSION_TYPE: NodeType = NodeType {
    name: "ExtensionType",
    properties: &[
        text("value"),
        ext("dtype", "ext-dtype", &DTYPE),
        text("ext-dtype"),
        text("meaning"),
        text("formatid"),
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        token("observable-id"),
    ],
    rules: &[Rule::Required("dtype")],
};

pub static EMAIL_DATA: NodeType = NodeType {
    name: "EmailData",
    properties: &[
        token("observable-id"),
        texts("EmailTo"),
        text("EmailFrom"),
        text("EmailSubject"),
        text("EmailX-Mailer"),
        texts("EmailHeader"),
        text("EmailBody"),
    ],
    rules: &[],
};
