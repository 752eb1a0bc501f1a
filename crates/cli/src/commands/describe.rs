//! Describe one object: label, archetype chain and position.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use script_core::env::WorldSnapshot;
use script_core::{ObjectDirectory, ObjectId, SpatialOracle, describe_object};

use super::lookup_object;
use crate::config::CliConfig;

/// Describe an object
#[derive(Parser)]
pub struct Describe {
    /// Object name or id
    #[arg(value_name = "OBJECT", allow_negative_numbers = true)]
    object: String,

    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ObjectReport {
    id: ObjectId,
    label: String,
    /// Nearest first.
    archetypes: Vec<String>,
    position: Option<[f32; 3]>,
}

impl Describe {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let world = config.load_world()?;
        let report = self.report(&world)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("{}", report.label);
        if !report.archetypes.is_empty() {
            println!("  archetypes: {}", report.archetypes.join(" > "));
        }
        if let Some([x, y, z]) = report.position {
            println!("  position:   ({}, {}, {})", x, y, z);
        }
        Ok(())
    }

    fn report(&self, world: &WorldSnapshot) -> Result<ObjectReport> {
        let id = lookup_object(world, &self.object)?;

        // Bounded by the world size in case the hierarchy loops.
        let archetypes = std::iter::successors(world.archetype_of(id), |&parent| {
            world.archetype_of(parent)
        })
        .take(world.len())
        .map(|archetype| describe_object(world, archetype))
        .collect();

        Ok(ObjectReport {
            id,
            label: describe_object(world, id),
            archetypes,
            position: world.position(id).map(|p| [p.x, p.y, p.z]),
        })
    }
}
