//! Command-line entry point regenerating the book's `composer.json`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use composer_scriptgen::config::DEFAULT_CONFIG_FILE;
use composer_scriptgen::{Edition, GeneratorConfig, ManifestGenerator};

/// Regenerate composer.json with the pandoc script for the book.
#[derive(Debug, Parser)]
#[command(name = "scriptgen", version, about)]
struct Cli {
  /// Book root holding scriptgen.config.json; relative outputs resolve here.
  #[arg(long, default_value = ".")]
  root: PathBuf,
  /// Manifest path, overriding the configured one.
  #[arg(long)]
  output: Option<PathBuf>,
  /// Edition to assemble, overriding the configured one.
  #[arg(long, value_enum)]
  edition: Option<Edition>,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let config_path = cli.root.join(DEFAULT_CONFIG_FILE);
  let mut config = match GeneratorConfig::load(&config_path) {
    Ok(config) => config.unwrap_or_default(),
    Err(err) => {
      eprintln!("warning: {err:#}; using defaults");
      GeneratorConfig::default()
    }
  };
  if let Some(output) = cli.output {
    config.output_path = output;
  }
  if let Some(edition) = cli.edition {
    config.edition = edition;
  }

  let generator = ManifestGenerator::new(&config, &cli.root);
  generator.generate()?;
  match config.edition.output_pdf() {
    Some(pdf) => eprintln!(
      "wrote {} (composer pdf builds {pdf})",
      generator.output_file().display()
    ),
    None => eprintln!("wrote {}", generator.output_file().display()),
  }
  Ok(())
}
