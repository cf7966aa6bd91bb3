//! Runtime configuration read from the process environment.
use std::env;
use std::path::{Path, PathBuf};

use ant_core::FeatureRules;

/// Defaults that command-line arguments may override.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub config_path: Option<PathBuf>,
    pub world_path: Option<PathBuf>,
    pub path_search_budget: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            world_path: None,
            path_search_budget: FeatureRules::DEFAULT_PATH_SEARCH_BUDGET,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ANTFEAT_CONFIG` - Extractor descriptor file
    /// - `ANTFEAT_WORLD` - World snapshot file
    /// - `ANTFEAT_PATH_BUDGET` - Path searches per decision cycle (default: 60)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.config_path = env::var_os("ANTFEAT_CONFIG").map(PathBuf::from);
        config.world_path = env::var_os("ANTFEAT_WORLD").map(PathBuf::from);

        if let Some(budget) = read_env::<u32>("ANTFEAT_PATH_BUDGET") {
            config.path_search_budget = budget;
        }

        config
    }

    /// Picks the argument when given, otherwise the environment default.
    pub fn config_path<'a>(&'a self, arg: Option<&'a Path>) -> anyhow::Result<&'a Path> {
        arg.or(self.config_path.as_deref()).ok_or_else(|| {
            anyhow::anyhow!("no extractor descriptor given (use --config or ANTFEAT_CONFIG)")
        })
    }

    pub fn world_path<'a>(&'a self, arg: Option<&'a Path>) -> anyhow::Result<&'a Path> {
        arg.or(self.world_path.as_deref()).ok_or_else(|| {
            anyhow::anyhow!("no world snapshot given (use --world or ANTFEAT_WORLD)")
        })
    }

    pub fn rules(&self, budget: Option<u32>) -> FeatureRules {
        FeatureRules::with_path_search_budget(budget.unwrap_or(self.path_search_budget))
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_take_precedence() {
        let config = CliConfig {
            config_path: Some(PathBuf::from("env.json")),
            ..CliConfig::default()
        };
        let arg = PathBuf::from("arg.json");
        assert_eq!(config.config_path(Some(arg.as_path())).unwrap(), arg.as_path());
        assert_eq!(config.config_path(None).unwrap(), Path::new("env.json"));
        assert!(config.world_path(None).is_err());
    }

    #[test]
    fn budget_falls_back_to_environment_default() {
        let config = CliConfig {
            path_search_budget: 7,
            ..CliConfig::default()
        };
        assert_eq!(config.rules(None).path_search_budget, 7);
        assert_eq!(config.rules(Some(2)).path_search_budget, 2);
    }
}
