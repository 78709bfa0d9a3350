//! Run configuration for `nobg`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── classifier # [classifier]
//! ├── types/         # Utility types
//! │   └── error      # ConfigError
//! └── mod.rs         # NobgConfig (this file)
//! ```
//!
//! # Precedence
//!
//! CLI positional paths override `nobg.toml`, which overrides the built-in
//! constants. Without a config file every value is the built-in default.
//! Paths set in the file are relative to its directory; unset paths keep the
//! working-directory defaults.
//!
//! ```toml
//! input = "icon.png"         # Relative to this file's directory
//! output = "icon.nobg.png"
//!
//! [classifier]
//! threshold = 30
//! ```

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::ClassifierConfig;
pub use types::ConfigError;

use crate::{DEFAULT_CONFIG, DEFAULT_INPUT, DEFAULT_OUTPUT, cli::Cli, log};
use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing nobg.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NobgConfig {
    /// Absolute path to the config file, if one was loaded (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Image to read, `icon.png` in cwd when unset
    input: Option<PathBuf>,

    /// Where to write the image with its background removed,
    /// `icon.nobg.png` in cwd when unset
    output: Option<PathBuf>,

    /// Background classifier settings
    pub classifier: ClassifierConfig,
}

impl NobgConfig {
    pub fn input(&self) -> &Path {
        self.input.as_deref().unwrap_or(Path::new(DEFAULT_INPUT))
    }

    pub fn output(&self) -> &Path {
        self.output.as_deref().unwrap_or(Path::new(DEFAULT_OUTPUT))
    }

    /// Load configuration from CLI arguments.
    ///
    /// An explicit `--config` must exist. Otherwise `nobg.toml` is searched
    /// upward from cwd and the defaults are used when none is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match Self::resolve_config_path(cli) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                if let Some(root) = path.parent() {
                    config.normalize_paths(root);
                }
                config.config_path = Some(path);
                config
            }
            None => Self::default(),
        };

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config file to read, if any.
    fn resolve_config_path(cli: &Cli) -> Option<PathBuf> {
        match &cli.config {
            Some(path) => Some(path.clone()),
            None => find_config_file(Path::new(DEFAULT_CONFIG)),
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Resolve the paths the file sets against its directory.
    fn normalize_paths(&mut self, root: &Path) {
        for path in [&mut self.input, &mut self.output].into_iter().flatten() {
            *path = root.join(&*path);
        }
    }

    /// Apply CLI overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(input) = &cli.input {
            self.input = Some(input.clone());
        }
        if let Some(output) = &cli.output {
            self.output = Some(output.clone());
        }
    }

    /// Validate the merged configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.classifier.validate()
    }
}

/// Parse a config snippet, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> NobgConfig {
    let (parsed, ignored) = NobgConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
