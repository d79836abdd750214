//! # Check Subcommand
//!
//! Decodes each document and runs the completeness validator over it.
//! A decode failure stops that document only; the remaining files are
//! still checked and the summary counts it as failed.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use iodef_codec::{CodecOptions, Decoder};
use iodef_schema::{Iodef, Validator};

use crate::read_input;

/// Arguments for the `iodef check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Documents to check (`-` reads stdin).
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Reject companions next to non-escape values.
    #[arg(long)]
    pub strict: bool,
}

/// Outcome for one document.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Decoded and complete.
    Passed,
    /// Decoded, with this many violations.
    Incomplete(usize),
    /// Could not be decoded.
    Unreadable,
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 when every document passes, 1 otherwise.
pub fn run_check(args: &CheckArgs, options: &CodecOptions) -> Result<u8> {
    let decoder = Decoder::with_options(&Iodef, options.clone());
    let mut passed = 0;
    for file in &args.files {
        let text = read_input(file)?;
        let verdict = check_text(&decoder, &text, &file.display().to_string());
        if verdict == Verdict::Passed {
            passed += 1;
        }
    }

    println!("Documents: {passed}/{} passed", args.files.len());
    Ok(if passed == args.files.len() { 0 } else { 1 })
}

/// Check one document's text, printing the result under `label`.
pub fn check_text(decoder: &Decoder<'_>, text: &str, label: &str) -> Verdict {
    let doc = match decoder.decode_str(text) {
        Ok(doc) => doc,
        Err(e) => {
            println!("FAIL: {label}: {e}");
            return Verdict::Unreadable;
        }
    };

    let report = Validator::new(&Iodef).check(&doc);
    if report.passed() {
        println!("OK: {label}");
        Verdict::Passed
    } else {
        println!("FAIL: {label}: {} violation(s)", report.len());
        println!("{report}");
        Verdict::Incomplete(report.len())
    }
}
