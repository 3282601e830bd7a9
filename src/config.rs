//! Generator configuration, optionally read from a JSON file beside the book.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::editions::Edition;

/// File name looked up by [`GeneratorConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "scriptgen.config.json";

/// Output written when nothing else is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "composer.json";

/// Where the manifest goes and which edition it describes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Manifest path. Relative paths resolve against the book root.
    pub output_path: PathBuf,
    /// Edition whose fragments make up the `pdf` script.
    pub edition: Edition,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            edition: Edition::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from `root_dir`, falling back to defaults when the
    /// file is missing or malformed.
    pub fn discover(root_dir: &Path) -> Self {
        let candidate = root_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::load(path).ok().flatten()
    }

    /// Read configuration from `path`, returning `None` when the file does not
    /// exist and an error when it exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        let config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Some(config))
    }

    /// Absolute or `root_dir`-relative location of the manifest.
    pub fn output_file(&self, root_dir: &Path) -> PathBuf {
        if self.output_path.is_absolute() {
            self.output_path.clone()
        } else {
            root_dir.join(&self.output_path)
        }
    }
}
