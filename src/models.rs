//! Data structures serialised into `composer.json`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Command composer runs for `composer updateme`.
pub const UPDATE_SCRIPT: &str = "php updateComposerJson.php";

/// PSR-4 namespace prefix of the book's PHP helpers.
pub const NAMESPACE_PREFIX: &str = "Mattsmithdev\\";

/// Directory the namespace prefix resolves to.
pub const SOURCE_DIR: &str = "src";

/// Top-level manifest. Field order is the serialised key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposerManifest {
  /// Named shell commands exposed through `composer run-script`.
  pub scripts: ComposerScripts,
  /// Class autoloading declaration.
  pub autoload: ComposerAutoload,
}

/// The `scripts` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposerScripts {
  /// Regenerates this manifest.
  pub updateme: String,
  /// Pandoc conversion command producing the book PDF.
  pub pdf: String,
}

/// The `autoload` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComposerAutoload {
  /// Namespace prefix to directory mapping.
  #[serde(rename = "psr-4")]
  pub psr4: BTreeMap<String, String>,
}

impl ComposerManifest {
  /// Build the manifest whose `pdf` script joins `fragments` in order.
  pub fn for_fragments(fragments: &[&str]) -> Self {
    Self {
      scripts: ComposerScripts {
        updateme: UPDATE_SCRIPT.to_string(),
        pdf: conversion_command(fragments),
      },
      autoload: ComposerAutoload {
        psr4: BTreeMap::from([(NAMESPACE_PREFIX.to_string(), SOURCE_DIR.to_string())]),
      },
    }
  }
}

/// Join fragments with single spaces. Fragments are taken as-is, whitespace included.
pub fn conversion_command(fragments: &[&str]) -> String {
  fragments.join(" ")
}
