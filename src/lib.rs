#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod editions;
pub mod generator;
pub mod models;
pub mod render;

pub use config::GeneratorConfig;
pub use editions::Edition;
pub use generator::ManifestGenerator;
pub use models::{ComposerManifest, conversion_command};
pub use render::render_manifest;
