//! # iodef-cli: IODEF Document Command-Line Interface
//!
//! Thin front end over `iodef-codec` and `iodef-schema`.
//!
//! ## Subcommands
//!
//! - `check`: decode documents and report every completeness violation
//! - `fmt`: rewrite a document in canonical form
//! - `schema`: list node types or describe one
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers; handlers return an exit
//!   code (0 success, 1 failure) or an error for operational problems.
//! - All codec behavior lives in the library crates.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

pub mod check;
pub mod config;
pub mod fmt;
pub mod schema;

/// Read a whole input file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
