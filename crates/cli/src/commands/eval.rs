//! Evaluate one decision cycle over a world snapshot.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ant_core::{Direction, FeatureEnv, Position, WorldSnapshot};
use ant_features::{EvaluationContext, FeatureExtractor};
use clap::Parser;

use crate::config::CliConfig;

/// Evaluate one decision cycle over a world snapshot
#[derive(Parser)]
pub struct Eval {
    /// Extractor descriptor (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// World snapshot (JSON)
    #[arg(short, long, value_name = "FILE")]
    world: Option<PathBuf>,

    /// Only evaluate the ant at this cell (e.g. 3,4)
    #[arg(short, long, value_name = "X,Y", value_parser = parse_position)]
    ant: Option<Position>,

    /// Path searches allowed in the cycle (defaults to ANTFEAT_PATH_BUDGET or 60)
    #[arg(short, long, value_name = "N")]
    budget: Option<u32>,
}

impl Eval {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let extractor = super::load(config.config_path(self.config.as_deref())?)?;
        let world = load_world(config.world_path(self.world.as_deref())?)?;

        let ants = match self.ant {
            Some(ant) => vec![ant],
            None => world.my_ants.clone(),
        };
        if ants.is_empty() {
            tracing::warn!("world snapshot has no ants to evaluate");
        }

        let env = FeatureEnv::uniform(&world);
        let mut ctx = EvaluationContext::from_rules(&config.rules(self.budget));
        for ant in ants {
            println!("ant {ant}");
            for action in Direction::ALL {
                let values = extractor.evaluate(&env, &mut ctx, ant, action);
                let label: &str = action.as_ref();
                println!("  {label:<5} {}", render(&extractor, &values));
            }
        }

        let stats = ctx.finish_cycle();
        tracing::info!(
            searches = stats.searches,
            failed = stats.failed_searches,
            refused = stats.refused_searches,
            cache_hits = stats.cache_hits,
            "cycle finished"
        );
        Ok(())
    }
}

fn load_world(path: &Path) -> Result<WorldSnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read world snapshot: {}", path.display()))?;
    let world: WorldSnapshot = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse world snapshot: {}", path.display()))?;
    world
        .validate()
        .with_context(|| format!("Invalid world snapshot: {}", path.display()))?;
    Ok(world)
}

/// `0101... [name, name]` with the active feature names.
fn render(extractor: &FeatureExtractor, values: &[bool]) -> String {
    let bits: String = values.iter().map(|&v| if v { '1' } else { '0' }).collect();
    let active: Vec<&str> = extractor
        .feature_names()
        .iter()
        .zip(values)
        .filter(|(_, v)| **v)
        .map(|(name, _)| name.as_str())
        .collect();
    format!("{bits} [{}]", active.join(", "))
}

fn parse_position(raw: &str) -> Result<Position, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got `{raw}`"))?;
    let coordinate = |part: &str| {
        part.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate `{part}`: {e}"))
    };
    Ok(Position::new(coordinate(x)?, coordinate(y)?))
}
