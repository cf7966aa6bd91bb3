use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::CliConfig;

/// Print the index and name of every feature
#[derive(Parser)]
pub struct Names {
    /// Extractor descriptor (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

impl Names {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let extractor = super::load(config.config_path(self.config.as_deref())?)?;
        println!("# {extractor}: {} features", extractor.num_features());
        for (index, name) in extractor.feature_names().iter().enumerate() {
            println!("{index}\t{name}");
        }
        Ok(())
    }
}
