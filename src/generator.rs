//! Assemble `composer.json`, echo it and write it over the configured output file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::GeneratorConfig;
use crate::models::ComposerManifest;
use crate::render::render_manifest;

/// Single-shot generator for the book's composer manifest.
pub struct ManifestGenerator<'a> {
  output_file: PathBuf,
  fragments: &'a [&'a str],
}

impl ManifestGenerator<'static> {
  /// Generator for the configured edition, writing below `root_dir`.
  pub fn new(config: &GeneratorConfig, root_dir: &Path) -> Self {
    Self::with_fragments(config.output_file(root_dir), config.edition.fragments())
  }
}

impl<'a> ManifestGenerator<'a> {
  /// Generator for an explicit fragment list.
  pub fn with_fragments(output_file: impl Into<PathBuf>, fragments: &'a [&'a str]) -> Self {
    Self {
      output_file: output_file.into(),
      fragments,
    }
  }

  /// File the manifest is written to.
  pub fn output_file(&self) -> &Path {
    &self.output_file
  }

  /// Render the manifest text without touching the console or disk.
  pub fn render(&self) -> Result<String> {
    render_manifest(&ComposerManifest::for_fragments(self.fragments))
  }

  /// Render, print to stdout and write the manifest.
  pub fn generate(&self) -> Result<String> {
    let stdout = io::stdout();
    let mut console = stdout.lock();
    self.generate_to(&mut console)
  }

  /// Render, echo to `console` and write the manifest, replacing any previous file.
  pub fn generate_to<W: Write>(&self, console: &mut W) -> Result<String> {
    let json = self.render()?;
    writeln!(console, "{json}").context("failed to echo composer manifest")?;
    fs::write(&self.output_file, &json)
      .with_context(|| format!("failed to write {}", self.output_file.display()))?;
    Ok(json)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::editions::{CURRENT_DRAFT, Edition};
  use crate::models::conversion_command;
  use tempfile::tempdir;

  #[test]
  fn writes_and_echoes_identical_text() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("composer.json");
    let generator = ManifestGenerator::with_fragments(&output, CURRENT_DRAFT);

    let mut console: Vec<u8> = Vec::new();
    let json = generator.generate_to(&mut console).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), json);
    assert_eq!(String::from_utf8(console).unwrap(), format!("{json}\n"));
  }

  #[test]
  fn pdf_script_matches_joined_fragments() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("composer.json");
    let generator = ManifestGenerator::with_fragments(output, CURRENT_DRAFT);
    let json = generator.generate_to(&mut io::sink()).unwrap();

    let manifest: ComposerManifest = serde_json::from_str(&json).unwrap();
    assert_eq!(manifest.scripts.pdf, conversion_command(CURRENT_DRAFT));
    assert!(
      manifest
        .scripts
        .pdf
        .contains("references.bib  01_front_material/1_title.md")
    );
    assert!(
      manifest
        .scripts
        .pdf
        .contains("chapter15.md  00_content/part08_security/chapter16_userFixtures.md")
    );
    assert!(
      manifest
        .scripts
        .pdf
        .ends_with("05_references/references.md -o _OUTPUT_PDF/_BOOK_current_draft.pdf")
    );
  }

  #[test]
  fn overwrites_existing_manifest() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("composer.json");
    fs::write(&output, "x".repeat(64 * 1024)).unwrap();

    let json = ManifestGenerator::with_fragments(&output, &["pandoc", "-o out.pdf"])
      .generate_to(&mut io::sink())
      .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), json);
  }

  #[test]
  fn repeated_runs_are_byte_identical() {
    let dir = tempdir().unwrap();
    let config = GeneratorConfig::default();
    let generator = ManifestGenerator::new(&config, dir.path());

    generator.generate_to(&mut io::sink()).unwrap();
    let first = fs::read(generator.output_file()).unwrap();
    generator.generate_to(&mut io::sink()).unwrap();
    let second = fs::read(generator.output_file()).unwrap();

    assert_eq!(first, second);
  }

  #[test]
  fn missing_output_directory_is_an_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("missing").join("composer.json");
    let generator = ManifestGenerator::with_fragments(&output, CURRENT_DRAFT);

    let err = generator.generate_to(&mut io::sink()).unwrap_err();

    assert!(err.to_string().contains("failed to write"));
    assert!(err.to_string().contains("composer.json"));
    assert!(!output.exists());
  }

  #[cfg(unix)]
  #[test]
  fn read_only_output_directory_is_an_error() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let locked = dir.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users ignore directory permissions.
    let canary = locked.join("canary");
    if fs::write(&canary, "").is_ok() {
      fs::remove_file(&canary).unwrap();
      fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
      return;
    }

    let output = locked.join("composer.json");
    let result =
      ManifestGenerator::with_fragments(&output, CURRENT_DRAFT).generate_to(&mut io::sink());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("failed to write"));
    assert!(!output.exists());
  }

  #[test]
  fn new_uses_configured_edition_and_output() {
    let dir = tempdir().unwrap();
    let config = GeneratorConfig {
      output_path: PathBuf::from("crud.json"),
      edition: Edition::CrudQuickstart,
    };
    let generator = ManifestGenerator::new(&config, dir.path());
    assert_eq!(generator.output_file(), dir.path().join("crud.json"));

    let json = generator.render().unwrap();
    assert!(json.contains("-o _OUTPUT_PDF/__CRUD_quickstart.pdf"));
    assert!(!dir.path().join("crud.json").exists());
  }
}
