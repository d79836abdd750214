//! # Contact Classes
//!
//! RFC 7970 §3.9: contact information for people and organizations.

use iodef_core::{NodeType, Rule};

use crate::props::*;
use crate::vocab::{
    CONTACT_ROLE, CONTACT_TYPE, EMAIL_TYPE, POSTAL_TYPE, REGISTRY, RESTRICTION, TELEPHONE_TYPE,
};

pub static CONTACT: NodeType = NodeType {
    name: "Contact",
    properties: &[
        ext("role", "ext-role", &CONTACT_ROLE),
        text("ext-role"),
        ext("type", "ext-type", &CONTACT_TYPE),
        text("ext-type"),
        ext("restriction", "ext-restriction", &RESTRICTION),
        text("ext-restriction"),
        texts("ContactName"),
        texts("ContactTitle"),
        texts("Description"),
        many("RegistryHandle", "RegistryHandle"),
        many("PostalAddress", "PostalAddress"),
        many("Email", "Email"),
        many("Telephone", "Telephone"),
        text("Timezone"),
        many("Contact", "Contact"),
        many("AdditionalData", "ExtensionType"),
    ],
    rules: &[Rule::Required("role"), Rule::Required("type")],
};

pub static REGISTRY_HANDLE: NodeType = NodeType {
    name: "RegistryHandle",
    properties: &[
        text("handle"),
        ext("registry", "ext-registry", &REGISTRY),
        text("ext-registry"),
    ],
    rules: &[Rule::Required("handle"), Rule::Required("registry")],
};

pub static POSTAL_ADDRESS: NodeType = NodeType {
    name: "PostalAddress",
    properties: &[
        ext("type", "ext-type", &POSTAL_TYPE),
        text("ext-type"),
        text("PAddress"),
        texts("Description"),
    ],
    rules: &[Rule::Required("PAddress")],
};

pub static EMAIL: NodeType = NodeType {
    name: "Email",
    properties: &[
        ext("type", "ext-type", &EMAIL_TYPE),
        text("ext-type"),
        text("EmailTo"),
        texts("Description"),
    ],
    rules: &[Rule::Required("EmailTo")],
};

pub static TELEPHONE: NodeType = NodeType {
    name: "Telephone",
    properties: &[
        ext("type", "ext-type", &TELEPHONE_TYPE),
        text("ext-type"),
        text("TelephoneNumber"),
        texts("Description"),
    ],
    rules: &[Rule::Required("TelephoneNumber")],
};
