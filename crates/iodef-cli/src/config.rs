//! # Configuration
//!
//! Codec options come from an optional `--config` file and are then
//! overridden by command-line flags. Files ending in `.json` are read as
//! JSON; anything else is read as YAML:
//!
//! ```yaml
//! companion_policy: strict
//! pretty: true
//! max_input_bytes: 1048576
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use iodef_codec::{CodecOptions, CompanionPolicy};

/// Load options from `path`, or defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<CodecOptions> {
    let Some(path) = path else {
        return Ok(CodecOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let options = if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&text)
            .with_context(|| format!("invalid JSON config {}", path.display()))?
    } else {
        serde_yaml::from_str(&text)
            .with_context(|| format!("invalid YAML config {}", path.display()))?
    };
    tracing::debug!(config = %path.display(), ?options, "loaded codec options");
    Ok(options)
}

/// Command-line overrides applied on top of file options.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    /// `--strict`
    pub strict: bool,
    /// `--pretty`
    pub pretty: bool,
    /// `--max-input-bytes`
    pub max_input_bytes: Option<usize>,
}

impl Overrides {
    /// Apply to `options`. Flags only ever tighten or enable.
    pub fn apply(self, mut options: CodecOptions) -> CodecOptions {
        if self.strict {
            options.companion_policy = CompanionPolicy::Strict;
        }
        if self.pretty {
            options.pretty = true;
        }
        if self.max_input_bytes.is_some() {
            options.max_input_bytes = self.max_input_bytes;
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_config_is_default() {
        assert_eq!(load_options(None).unwrap(), CodecOptions::default());
    }

    #[test]
    fn test_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iodef.yaml");
        std::fs::write(&path, "companion_policy: strict\nmax_input_bytes: 4096\n").unwrap();
        let opts = load_options(Some(&path)).unwrap();
        assert_eq!(opts.companion_policy, CompanionPolicy::Strict);
        assert_eq!(opts.max_input_bytes, Some(4096));
        assert!(!opts.pretty);
    }

    #[test]
    fn test_json_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("iodef.json");
        std::fs::write(&path, r#"{"pretty": true}"#).unwrap();
        let opts = load_options(Some(&path)).unwrap();
        assert!(opts.pretty);
        assert_eq!(opts.companion_policy, CompanionPolicy::Lenient);
    }

    #[test]
    fn test_bad_config_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "companion_policy: sometimes\n").unwrap();
        let err = load_options(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("bad.yaml"));
    }

    #[test]
    fn test_overrides() {
        let base = CodecOptions {
            max_input_bytes: Some(10),
            ..CodecOptions::default()
        };
        let opts = Overrides {
            strict: true,
            pretty: false,
            max_input_bytes: None,
        }
        .apply(base);
        assert_eq!(opts.companion_policy, CompanionPolicy::Strict);
        assert_eq!(opts.max_input_bytes, Some(10));
    }
}
