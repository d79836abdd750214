//! # IODEF Vocabularies
//!
//! Enumerated attribute values from RFC 7970 §3. Lists that end in
//! `ext-value` are extensible and pair with an `ext-<name>` companion.

use iodef_core::{Vocabulary, ESCAPE_VALUE};

pub static RESTRICTION: Vocabulary = Vocabulary {
    name: "restriction",
    values: &[
        "public",
        "partner",
        "need-to-know",
        "private",
        "default",
        "white",
        "green",
        "amber",
        "red",
        ESCAPE_VALUE,
    ],
};

pub static PURPOSE: Vocabulary = Vocabulary {
    name: "purpose",
    values: &["traceback", "mitigation", "reporting", "watch", "other", ESCAPE_VALUE],
};

pub static INCIDENT_STATUS: Vocabulary = Vocabulary {
    name: "status",
    values: &["new", "in-progress", "forwarded", "resolved", "future", ESCAPE_VALUE],
};

pub static CONTACT_ROLE: Vocabulary = Vocabulary {
    name: "role",
    values: &[
        "creator",
        "reporter",
        "admin",
        "tech",
        "provider",
        "user",
        "billing",
        "legal",
        "irt",
        "abuse",
        "cc",
        "cc-irt",
        "leo",
        "vendor",
        "vendor-support",
        "victim",
        "victim-notified",
        ESCAPE_VALUE,
    ],
};

pub static CONTACT_TYPE: Vocabulary = Vocabulary {
    name: "type",
    values: &["person", "organization", ESCAPE_VALUE],
};

pub static REGISTRY: Vocabulary = Vocabulary {
    name: "registry",
    values: &["internic", "apnic", "arin", "lacnic", "ripe", "afrinic", "local", ESCAPE_VALUE],
};

pub static POSTAL_TYPE: Vocabulary = Vocabulary {
    name: "type",
    values: &["street", "mailing", ESCAPE_VALUE],
};

pub static EMAIL_TYPE: Vocabulary = Vocabulary {
    name: "type",
    values: &["direct", "hotline", ESCAPE_VALUE],
};

pub static TELEPHONE_TYPE: Vocabulary = Vocabulary {
    name: "type",
    values: &["wired", "mobile", "fax", "hotline", ESCAPE_VALUE],
};

pub static DISCOVERY_SOURCE: Vocabulary = Vocabulary {
    name: "source",
    values: &[
        "nidps",
        "hips",
        "siem",
        "av",
        "third-party-monitoring",
        "incident",
        "os-log",
        "application-log",
        "device-log",
        "network-flow",
        "passive-dns",
        "investigation",
        "audit",
        "internal-notification",
        "external-notification",
        "leo",
        "partner",
        "actor",
        "unknown",
        ESCAPE_VALUE,
    ],
};

pub static OCCURRENCE: Vocabulary = Vocabulary {
    name: "occurrence",
    values: &["actual", "potential"],
};

pub static SEVERITY: Vocabulary = Vocabulary {
    name: "severity",
    values: &["low", "medium", "high"],
};

pub static COMPLETION: Vocabulary = Vocabulary {
    name: "completion",
    values: &["failed", "succeeded"],
};

pub static SYSTEM_IMPACT_TYPE: Vocabulary = Vocabulary {
    name: "type",
    values: &[
        "takeover-account",
        "takeover-service",
        "takeover-system",
        "cps-manipulation",
        "cps-damage",
        "availability-data",
        "availability-account",
        "availability-service",
        "availability-system",
        "damaged-system",
        "damaged-data",
        "breach-proprietary",
        "breach-privacy",
        "breach-credential",
        "breach-configuration",
        "integrity-data",
        "integrity-configuration",
        "integrity-hardware",
        "traffic-redirection",
        "monitoring-traffic",
        "monitoring-host",
        "policy",
        "unknown",
        ESCAPE_VALUE,
    ],
};

pub static BUSINESS_SEVERITY: Vocabulary = Vocabulary {
    name: "severity",
    values: &["none", "low", "medium", "high", "unknown", ESCAPE_VALUE],
};

pub static BUSINESS_IMPACT_TYPE: Vocabulary = Vocabulary {
    name: "type",
    values: &[
        "breach-proprietary",
        "breach-privacy",
        "breach-credential",
        "loss-of-integrity",
        "loss-of-service",
        "theft-financial",
        "theft-service",
        "degraded-reputation",
        "asset-damage",
        "asset-manipulation",
        "legal",
        "extortion",
        "unknown",
        ESCAPE_VALUE,
    ],
};

pub static TIME_METRIC: Vocabulary = Vocabulary {
    name: "metric",
    values: &["labor", "elapsed", "downtime", ESCAPE_VALUE],
};

pub static DURATION: Vocabulary = Vocabulary {
    name: "duration",
    values: &["second", "minute", "hour", "day", "month", "quarter", "year", ESCAPE_VALUE],
};

pub static COUNTER_TYPE: Vocabulary = Vocabulary {
    name: "type",
    values: &["count", "peak", "average", ESCAPE_VALUE],
};

pub static COUNTER_UNIT: Vocabulary = Vocabulary {
    name: "unit",
    values: &[
        "byte",
        "mbit",
        "packet",
        "flow",
        "session",
        "alert",
        "message",
        "event",
        "host",
        "site",
        "organization",
        ESCAPE_VALUE,
    ],
};

pub static CONFIDENCE_RATING: Vocabulary = Vocabulary {
    name: "rating",
    values: &["low", "medium", "high", "numeric", "unknown", ESCAPE_VALUE],
};

pub static ACTION: Vocabulary = Vocabulary {
    name: "action",
    values: &[
        "nothing",
        "contact-source-site",
        "contact-target-site",
        "contact-sender",
        "investigate",
        "block-host",
        "block-network",
        "block-port",
        "rate-limit-host",
        "rate-limit-network",
        "rate-limit-port",
        "redirect-traffic",
        "honeypot",
        "upgrade-software",
        "rebuild-asset",
        "harden-asset",
        "remediate-other",
        "status-triage",
        "status-new-info",
        "watch-and-report",
        "training",
        "defined-coa",
        "other",
        ESCAPE_VALUE,
    ],
};

pub static SYSTEM_CATEGORY: Vocabulary = Vocabulary {
    name: "category",
    values: &["source", "target", "intermediate", "sensor", "infrastructure", ESCAPE_VALUE],
};

pub static YES_NO_UNKNOWN: Vocabulary = Vocabulary {
    name: "yes/no/unknown",
    values: &["yes", "no", "unknown"],
};

pub static OWNERSHIP: Vocabulary = Vocabulary {
    name: "ownership",
    values: &[
        "organization",
        "personal",
        "partner",
        "customer",
        "no-relationship",
        "unknown",
        ESCAPE_VALUE,
    ],
};

pub static ADDRESS_CATEGORY: Vocabulary = Vocabulary {
    name: "category",
    values: &[
        "asn",
        "atm",
        "e-mail",
        "ipv4-addr",
        "ipv4-net",
        "ipv4-net-masked",
        "ipv4-net-mask",
        "ipv6-addr",
        "ipv6-net",
        "ipv6-net-masked",
        "mac",
        "site-uri",
        ESCAPE_VALUE,
    ],
};

pub static SYSTEM_STATUS: Vocabulary = Vocabulary {
    name: "system-status",
    values: &[
        "spoofed",
        "fraudulent",
        "innocent-hacked",
        "innocent-hijacked",
        "unknown",
        ESCAPE_VALUE,
    ],
};

pub static DOMAIN_STATUS: Vocabulary = Vocabulary {
    name: "domain-status",
    values: &[
        "reservedDelegation",
        "assignedAndActive",
        "assignedAndInactive",
        "assignedAndOnHold",
        "revoked",
        "transferPending",
        "registryLock",
        "registrarLock",
        "other",
        "unknown",
        ESCAPE_VALUE,
    ],
};

pub static NODE_ROLE_CATEGORY: Vocabulary = Vocabulary {
    name: "category",
    values: &[
        "client",
        "client-enterprise",
        "client-partner",
        "client-remote",
        "client-kiosk",
        "client-mobile",
        "server-internal",
        "server-public",
        "www",
        "mail",
        "webmail",
        "messaging",
        "streaming",
        "voice",
        "file",
        "ftp",
        "p2p",
        "name",
        "directory",
        "credential",
        "print",
        "application",
        "database",
        "backup",
        "dhcp",
        "assessment",
        "source-control",
        "config-management",
        "monitoring",
        "infra",
        "infra-firewall",
        "infra-router",
        "infra-switch",
        "camera",
        "proxy",
        "remote-access",
        "log",
        "virtualization",
        "pos",
        "scada",
        "scada-supervisory",
        "sinkhole",
        "honeypot",
        "anomyzation",
        "c2-server",
        "malware-distribution",
        "drop-server",
        "hop-point",
        "reflector",
        "phishing-site",
        "spear-phishing-site",
        "recruiting-site",
        "fraudulent-site",
        ESCAPE_VALUE,
    ],
};

pub static SPEC_NAME: Vocabulary = Vocabulary {
    name: "spec-name",
    values: &["custom", "cpe", "swid", ESCAPE_VALUE],
};

pub static RECORD_PATTERN_TYPE: Vocabulary = Vocabulary {
    name: "type",
    values: &["regex", "binary", "xpath", ESCAPE_VALUE],
};

pub static OFFSET_UNIT: Vocabulary = Vocabulary {
    name: "offsetunit",
    values: &["line", "byte", ESCAPE_VALUE],
};

pub static DTYPE: Vocabulary = Vocabulary {
    name: "dtype",
    values: &[
        "boolean",
        "byte",
        "bytes",
        "character",
        "date-time",
        "ntpstamp",
        "integer",
        "portlist",
        "real",
        "string",
        "file",
        "path",
        "frame",
        "packet",
        "ipv4-packet",
        "ipv6-packet",
        "url",
        "csv",
        "winreg",
        "xml",
        ESCAPE_VALUE,
    ],
};

pub static OPERATOR: Vocabulary = Vocabulary {
    name: "operator",
    values: &["not", "and", "or", "xor"],
};
