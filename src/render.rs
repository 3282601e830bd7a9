//! Serialise the manifest to the JSON text written to disk.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::models::ComposerManifest;

const INDENT: &[u8] = b"    ";

/// Pretty-print `manifest` with four-space indentation and no trailing newline.
pub fn render_manifest(manifest: &ComposerManifest) -> Result<String> {
  let mut buffer = Vec::new();
  let formatter = PrettyFormatter::with_indent(INDENT);
  let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
  manifest
    .serialize(&mut serializer)
    .context("failed to serialise composer manifest")?;
  let json = String::from_utf8(buffer).context("composer manifest is not valid UTF-8")?;
  Ok(unescape_slashes(&json))
}

/// Replace escaped forward slashes (`\/`) with plain ones.
///
/// Only an odd run of backslashes before `/` is an escape; an even run is a literal
/// backslash in the data and is left alone.
pub fn unescape_slashes(json: &str) -> String {
  let mut unescaped = String::with_capacity(json.len());
  let mut backslashes = 0usize;
  for ch in json.chars() {
    if ch == '/' && backslashes % 2 == 1 {
      unescaped.pop();
    }
    backslashes = if ch == '\\' { backslashes + 1 } else { 0 };
    unescaped.push(ch);
  }
  unescaped
}
