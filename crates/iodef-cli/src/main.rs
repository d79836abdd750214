//! # iodef CLI entry point
//!
//! Parses command-line arguments, loads codec options, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use iodef_cli::check::{run_check, CheckArgs};
use iodef_cli::config::{load_options, Overrides};
use iodef_cli::fmt::{run_fmt, FmtArgs};
use iodef_cli::schema::{run_schema, SchemaArgs};

/// IODEF document codec and validator.
///
/// Checks incident documents against the IODEF 2.0 schema, rewrites them
/// in canonical JSON, and prints the schema tables.
#[derive(Parser, Debug)]
#[command(name = "iodef", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a codec options file (YAML, or JSON by extension).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject input documents larger than this many bytes.
    #[arg(long, global = true, value_name = "BYTES")]
    max_input_bytes: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode documents and report every completeness violation.
    Check(CheckArgs),

    /// Rewrite a document in canonical form.
    Fmt(FmtArgs),

    /// List node types or describe one.
    Schema(SchemaArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "iodef CLI starting");

    let result = load_options(cli.config.as_deref()).and_then(|base| {
        let overrides = Overrides {
            strict: matches!(&cli.command, Commands::Check(args) if args.strict),
            pretty: matches!(&cli.command, Commands::Fmt(args) if args.pretty),
            max_input_bytes: cli.max_input_bytes,
        };
        let options = overrides.apply(base);
        tracing::debug!(?options, "resolved codec options");

        match &cli.command {
            Commands::Check(args) => run_check(args, &options),
            Commands::Fmt(args) => run_fmt(args, &options),
            Commands::Schema(args) => run_schema(args),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_check_multiple_files() {
        let cli = Cli::try_parse_from(["iodef", "check", "a.json", "b.json", "--strict"]).unwrap();
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.files.len(), 2);
            assert!(args.strict);
        } else {
            panic!("expected check");
        }
    }

    #[test]
    fn cli_parse_check_requires_file() {
        assert!(Cli::try_parse_from(["iodef", "check"]).is_err());
    }

    #[test]
    fn cli_parse_fmt_options() {
        let cli = Cli::try_parse_from(["iodef", "fmt", "doc.json", "--pretty", "-o", "out.json"])
            .unwrap();
        if let Commands::Fmt(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("doc.json"));
            assert_eq!(args.output, Some(PathBuf::from("out.json")));
            assert!(args.pretty);
            assert!(!args.check);
        } else {
            panic!("expected fmt");
        }
    }

    #[test]
    fn cli_parse_fmt_check_conflicts_with_output() {
        assert!(Cli::try_parse_from(["iodef", "fmt", "d.json", "--check", "-o", "x"]).is_err());
    }

    #[test]
    fn cli_parse_schema_optional_type() {
        let cli = Cli::try_parse_from(["iodef", "schema"]).unwrap();
        assert!(matches!(cli.command, Commands::Schema(SchemaArgs { node_type: None })));
        let cli = Cli::try_parse_from(["iodef", "schema", "Contact"]).unwrap();
        if let Commands::Schema(args) = cli.command {
            assert_eq!(args.node_type.as_deref(), Some("Contact"));
        }
    }

    #[test]
    fn cli_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "iodef",
            "schema",
            "-vv",
            "--config",
            "codec.yaml",
            "--max-input-bytes",
            "4096",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("codec.yaml")));
        assert_eq!(cli.max_input_bytes, Some(4096));
    }
}
