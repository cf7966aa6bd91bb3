//! Subcommand implementations.
//!
//! Each command owns its clap arguments and an `execute` entry point.

mod check;
mod eval;
mod names;

pub use check::Check;
pub use eval::Eval;
pub use names::Names;

use std::path::Path;

use anyhow::{Context, Result};
use ant_features::FeatureExtractor;

pub(crate) fn load(path: &Path) -> Result<FeatureExtractor> {
    ant_features::load_extractor(path)
        .with_context(|| format!("Failed to load extractor from {}", path.display()))
}
