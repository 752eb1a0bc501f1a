//! Resolve a destination string against the loaded world.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};

use script_core::env::{QuestVarSnapshot, WorldSnapshot};
use script_core::{ObjectId, ScriptEnv, Selector, TargetContext, describe_object, resolve};

use super::lookup_object;
use crate::config::CliConfig;

/// Resolve a destination string to objects
#[derive(Parser)]
pub struct Resolve {
    /// Destination string (e.g. `[me]`, `*Chest`, `5.0<@Chest`, `&ControlDevice`)
    #[arg(value_name = "DEST")]
    dest: String,

    /// Object handling the event, by name or id
    #[arg(long, value_name = "OBJECT")]
    me: Option<String>,

    /// Object that caused the event, by name or id (defaults to --me)
    #[arg(long, value_name = "OBJECT")]
    source: Option<String>,

    /// Print targets as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TargetJson {
    id: ObjectId,
    label: String,
}

impl Resolve {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let world = config.load_world()?;
        let qvars = config.load_qvars()?;
        let targets = self.targets(&world, &qvars)?;

        if targets.is_empty() {
            info!("'{}' matched no objects", self.dest);
        }

        if self.json {
            let json: Vec<_> = targets
                .iter()
                .map(|&id| TargetJson {
                    id,
                    label: describe_object(&world, id),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        } else {
            for &id in &targets {
                println!("{}", describe_object(&world, id));
            }
        }

        Ok(())
    }

    fn targets(&self, world: &WorldSnapshot, qvars: &QuestVarSnapshot) -> Result<Vec<ObjectId>> {
        let me = match &self.me {
            Some(name) => lookup_object(world, name)?,
            None => ObjectId::NONE,
        };
        let source = match &self.source {
            Some(name) => lookup_object(world, name)?,
            None => me,
        };

        let selector = Selector::parse(&self.dest);
        debug!("Parsed '{}' as {:?}", self.dest, selector);

        let env = ScriptEnv::from_snapshots(world, qvars);
        Ok(resolve(&selector, TargetContext::new(me, source), &env)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    fn run(args: &[&str]) -> Result<Vec<ObjectId>> {
        let cmd = Resolve::try_parse_from(std::iter::once("resolve").chain(args.iter().copied()))?;
        cmd.targets(&fixtures::world(), &fixtures::qvars())
    }

    #[test]
    fn resolves_relative_to_me() {
        assert_eq!(run(&["5<Chest", "--me", "Lever"]).unwrap(), [ObjectId(2)]);
        assert_eq!(run(&["&ControlDevice", "--me", "1"]).unwrap(), [ObjectId(3)]);
        assert_eq!(run(&["[source]", "--me", "Lever", "--source", "3"]).unwrap(), [ObjectId(3)]);
    }

    #[test]
    fn source_defaults_to_me() {
        assert_eq!(run(&["[source]", "--me", "Lever"]).unwrap(), [ObjectId(1)]);
    }

    #[test]
    fn unknown_context_object_is_an_error() {
        let error = run(&["[me]", "--me", "Nobody"]).unwrap_err();
        assert!(error.to_string().contains("Nobody"));
    }

    #[test]
    fn radius_without_me_matches_nothing() {
        assert!(run(&["100<Chest"]).unwrap().is_empty());
    }
}
