//! # Identifier Tokens
//!
//! IODEF identifier attributes (`observable-id`, `uid-ref`, …) are XML-ID
//! shaped. [`Token`] wraps such a string and guarantees at construction that
//! it matches `[a-zA-Z_][a-zA-Z0-9_.-]*`.
//!
//! Tokens are informational only: the model never checks that a `uid-ref`
//! actually names an `observable-id` elsewhere in the tree.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::GrammarViolation;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_.-]*$").expect("token regex"));

/// An identifier that satisfies the token grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Token(String);

impl Token {
    /// Create a token, validating the grammar.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarViolation`] if `value` is empty, starts with a digit,
    /// `.` or `-`, or contains anything other than ASCII letters, digits,
    /// `_`, `.`, and `-`.
    pub fn new(value: impl Into<String>) -> Result<Self, GrammarViolation> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(GrammarViolation { value })
        }
    }

    /// Whether `value` matches the grammar.
    pub fn is_valid(value: &str) -> bool {
        TOKEN_RE.is_match(value)
    }

    /// Borrow the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the token, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Token {
    type Err = GrammarViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
