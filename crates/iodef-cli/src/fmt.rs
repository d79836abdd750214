//! # Fmt Subcommand
//!
//! Rewrites a document in canonical form: schema property order, canonical
//! timestamps, undeclared keys and unpaired companions dropped.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use iodef_codec::{encode_string, CodecOptions, Decoder};
use iodef_schema::Iodef;

use crate::read_input;

/// Arguments for the `iodef fmt` subcommand.
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Document to format (`-` reads stdin).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write here instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Indent the output.
    #[arg(long)]
    pub pretty: bool,

    /// Write nothing; exit 1 if the input is not already canonical.
    #[arg(long, conflicts_with = "output")]
    pub check: bool,
}

/// Execute the fmt subcommand.
///
/// Returns exit code: 0 on success, 1 when `--check` finds a difference.
pub fn run_fmt(args: &FmtArgs, options: &CodecOptions) -> Result<u8> {
    let text = read_input(&args.file)?;
    let formatted = format_text(&text, options)
        .with_context(|| format!("failed to format {}", args.file.display()))?;

    if args.check {
        let canonical = text.trim_end() == formatted.trim_end();
        if !canonical {
            println!("{} is not canonical", args.file.display());
        }
        return Ok(if canonical { 0 } else { 1 });
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{formatted}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(output = %path.display(), bytes = formatted.len(), "wrote document");
        }
        None => println!("{formatted}"),
    }
    Ok(0)
}

/// Decode and re-encode a document.
pub fn format_text(text: &str, options: &CodecOptions) -> Result<String> {
    let doc = Decoder::with_options(&Iodef, options.clone()).decode_str(text)?;
    Ok(encode_string(&doc, options.pretty)?)
}
