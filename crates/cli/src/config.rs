//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::Args;
use script_content::ContentFactory;
use script_core::env::{QuestVarSnapshot, WorldSnapshot};

use crate::dirs;

/// Where to find world content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    /// World file, relative to `data_dir` unless absolute.
    pub world: PathBuf,
    /// Quest-variable file, relative to `data_dir` unless absolute. Optional on disk.
    pub qvars: PathBuf,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir(),
            world: PathBuf::from("world.ron"),
            qvars: PathBuf::from("qvars.toml"),
        }
    }
}

/// Path flags shared by every subcommand. Each one overrides its environment
/// variable.
#[derive(Args, Clone, Debug, Default)]
pub struct PathArgs {
    /// Directory holding world and quest-variable files
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// World file (RON)
    #[arg(long, global = true, value_name = "FILE")]
    pub world: Option<PathBuf>,

    /// Quest-variable file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub qvars: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCRIPT_DATA_DIR` - Data directory (default: platform-specific)
    /// - `SCRIPT_WORLD` - World file (default: `world.ron`)
    /// - `SCRIPT_QVARS` - Quest-variable file (default: `qvars.toml`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env(&lookup, "SCRIPT_DATA_DIR") {
            config.data_dir = dir;
        }
        if let Some(world) = read_env(&lookup, "SCRIPT_WORLD") {
            config.world = world;
        }
        if let Some(qvars) = read_env(&lookup, "SCRIPT_QVARS") {
            config.qvars = qvars;
        }

        config
    }

    pub fn with_overrides(mut self, args: &PathArgs) -> Self {
        if let Some(dir) = &args.data_dir {
            self.data_dir = dir.clone();
        }
        if let Some(world) = &args.world {
            self.world = world.clone();
        }
        if let Some(qvars) = &args.qvars {
            self.qvars = qvars.clone();
        }
        self
    }

    pub fn factory(&self) -> ContentFactory {
        ContentFactory::new(&self.data_dir)
    }

    pub fn load_world(&self) -> Result<WorldSnapshot> {
        self.factory().load_world(&self.world)
    }

    /// A missing quest-variable file is an empty table.
    pub fn load_qvars(&self) -> Result<QuestVarSnapshot> {
        self.factory().load_qvars_or_default(&self.qvars)
    }
}

fn read_env<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key).filter(|value| !value.is_empty())?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_overrides_defaults() {
        let config = CliConfig::from_lookup(|key| match key {
            "SCRIPT_DATA_DIR" => Some("/srv/mission".to_owned()),
            "SCRIPT_QVARS" => Some(String::new()),
            _ => None,
        });

        assert_eq!(config.data_dir, PathBuf::from("/srv/mission"));
        assert_eq!(config.world, PathBuf::from("world.ron"));
        // Empty values are ignored.
        assert_eq!(config.qvars, PathBuf::from("qvars.toml"));
    }

    #[test]
    fn flags_override_environment() {
        let config = CliConfig::from_lookup(|key| {
            (key == "SCRIPT_WORLD").then(|| "env.ron".to_owned())
        })
        .with_overrides(&PathArgs {
            world: Some(PathBuf::from("flag.ron")),
            ..PathArgs::default()
        });

        assert_eq!(config.world, PathBuf::from("flag.ron"));
    }

    #[test]
    fn loads_from_data_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("world.ron"), "()").expect("write world");

        let config = CliConfig {
            data_dir: dir.path().to_path_buf(),
            ..CliConfig::default()
        };

        assert!(config.load_world().expect("world loads").is_empty());
        assert_eq!(config.load_qvars().expect("qvars optional"), QuestVarSnapshot::new());
    }
}
