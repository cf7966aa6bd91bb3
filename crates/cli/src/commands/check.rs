use std::path::PathBuf;

use anyhow::{Context, Result};
use ant_features::{ExtractorConfig, FeatureExtractor};
use clap::Parser;

use crate::config::CliConfig;

/// Verify that a descriptor survives an encode/decode round trip
#[derive(Parser)]
pub struct Check {
    /// Extractor descriptor (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Check {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let extractor = super::load(config.config_path(self.config.as_deref())?)?;
        let canonical = extractor.to_config().to_json_string_pretty()?;
        let reparsed = ExtractorConfig::from_json_str(&canonical)
            .context("Canonical descriptor failed to parse")?;
        let decoded = FeatureExtractor::from_config(&reparsed)
            .context("Canonical descriptor failed to decode")?;

        if decoded.feature_names() != extractor.feature_names() {
            anyhow::bail!(
                "Round trip changed the feature names ({} before, {} after)",
                extractor.num_features(),
                decoded.num_features()
            );
        }

        tracing::info!(features = extractor.num_features(), "round trip ok");
        println!("{canonical}");
        Ok(())
    }
}
