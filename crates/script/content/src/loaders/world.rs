//! World data loader.
//!
//! Loads the archetype hierarchy, placed objects and links from a RON file:
//!
//! ```ron
//! (
//!     archetypes: [
//!         (id: -1, name: "Object"),
//!         (id: -10, name: "Chest", parent: Some(-1)),
//!     ],
//!     objects: [
//!         (id: 1, name: Some("Lever"), archetype: -1, position: Some((0.0, 0.0, 0.0))),
//!         (id: 2, archetype: -10, position: Some((3.0, 4.0, 0.0))),
//!     ],
//!     links: [
//!         (flavor: "ControlDevice", from: 1, to: 2),
//!     ],
//! )
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use script_core::env::{LinkRecord, ObjectRecord, WorldSnapshot};
use script_core::{ObjectId, Vec3};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WorldDataRon {
    #[serde(default)]
    archetypes: Vec<ArchetypeRon>,
    #[serde(default)]
    objects: Vec<ObjectRon>,
    #[serde(default)]
    links: Vec<LinkRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArchetypeRon {
    id: i32,
    name: String,
    #[serde(default)]
    parent: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ObjectRon {
    id: i32,
    #[serde(default)]
    name: Option<String>,
    archetype: i32,
    #[serde(default)]
    position: Option<(f32, f32, f32)>,
}

/// Loader for world snapshots from RON files.
pub struct WorldLoader;

impl WorldLoader {
    /// Load a world from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the world data
    pub fn load(path: &Path) -> LoadResult<WorldSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid world file {}: {}", path.display(), e))
    }

    /// Parse world data from RON text.
    ///
    /// Archetype ids must be negative, object ids positive, and every id unique.
    /// Every parent must be a defined archetype and the archetype hierarchy
    /// may not loop.
    pub fn parse(content: &str) -> LoadResult<WorldSnapshot> {
        let data: WorldDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse world RON: {}", e))?;

        let mut seen = BTreeSet::new();
        let mut records = Vec::with_capacity(data.archetypes.len() + data.objects.len());
        let parents: BTreeMap<i32, Option<i32>> = data
            .archetypes
            .iter()
            .map(|archetype| (archetype.id, archetype.parent))
            .collect();

        for archetype in data.archetypes {
            anyhow::ensure!(
                ObjectId(archetype.id).is_archetype(),
                "archetype '{}' has non-negative id {}",
                archetype.name,
                archetype.id
            );
            anyhow::ensure!(seen.insert(archetype.id), "duplicate id {}", archetype.id);
            if let Some(parent) = archetype.parent {
                anyhow::ensure!(
                    parents.contains_key(&parent),
                    "archetype '{}' has parent {} which is not an archetype",
                    archetype.name,
                    parent
                );
            }
            records.push(ObjectRecord::archetype(
                archetype.id,
                &archetype.name,
                archetype.parent,
            ));
        }

        for object in data.objects {
            anyhow::ensure!(
                ObjectId(object.id).is_concrete(),
                "object {} must have a positive id",
                object.id
            );
            anyhow::ensure!(seen.insert(object.id), "duplicate id {}", object.id);
            anyhow::ensure!(
                parents.contains_key(&object.archetype),
                "object {} has archetype {} which is not defined",
                object.id,
                object.archetype
            );
            records.push(ObjectRecord {
                id: ObjectId(object.id),
                name: object.name,
                parent: Some(ObjectId(object.archetype)),
                position: object.position.map(Vec3::from),
            });
        }

        check_acyclic(&parents)?;

        Ok(WorldSnapshot::new(records, data.links))
    }
}

/// Walks up from every archetype and fails if a chain revisits a node.
fn check_acyclic(parents: &BTreeMap<i32, Option<i32>>) -> LoadResult<()> {
    let mut rooted = BTreeSet::new();

    for &start in parents.keys() {
        let mut chain = BTreeSet::new();
        let mut node = Some(start);
        while let Some(id) = node {
            if rooted.contains(&id) {
                break;
            }
            anyhow::ensure!(chain.insert(id), "archetype hierarchy loops through {}", id);
            node = parents.get(&id).copied().flatten();
        }
        rooted.extend(chain);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use script_core::{Descent, LinkOracle, ObjectDirectory, SpatialOracle};

    use super::*;

    const WORLD: &str = r#"(
        archetypes: [
            (id: -1, name: "Object"),
            (id: -10, name: "Chest", parent: Some(-1)),
        ],
        objects: [
            (id: 1, name: Some("Lever"), archetype: -1, position: Some((0.0, 0.0, 0.0))),
            (id: 2, archetype: -10, position: Some((3.0, 4.0, 0.0))),
            (id: 3, archetype: -10),
        ],
        links: [
            (flavor: "ControlDevice", from: 1, to: 2),
        ],
    )"#;

    #[test]
    fn parses_hierarchy_positions_and_links() {
        let world = WorldLoader::parse(WORLD).expect("valid world");

        assert_eq!(world.len(), 5);
        assert_eq!(world.find_by_name("Chest"), Some(ObjectId(-10)));
        assert_eq!(
            world.descendants(ObjectId(-10), Descent::Children),
            vec![ObjectId(2), ObjectId(3)]
        );
        assert_eq!(world.position(ObjectId(2)), Some(Vec3::new(3.0, 4.0, 0.0)));
        assert_eq!(world.position(ObjectId(3)), None);
        assert_eq!(world.linked(ObjectId(1), "ControlDevice"), vec![ObjectId(2)]);
    }

    #[test]
    fn empty_world_is_valid() {
        assert!(WorldLoader::parse("()").expect("valid world").is_empty());
    }

    #[test]
    fn rejects_misplaced_ids() {
        let positive_archetype = r#"(archetypes: [(id: 4, name: "Chest")])"#;
        assert!(WorldLoader::parse(positive_archetype).is_err());

        let negative_object = r#"(objects: [(id: -4, archetype: -1)])"#;
        assert!(WorldLoader::parse(negative_object).is_err());

        let duplicate = r#"(
            archetypes: [(id: -1, name: "Object")],
            objects: [(id: 4, archetype: -1), (id: 4, archetype: -1)],
        )"#;
        let error = WorldLoader::parse(duplicate).expect_err("duplicate id");
        assert!(error.to_string().contains("duplicate id 4"));
    }

    #[test]
    fn rejects_looping_hierarchy() {
        let looping = r#"(archetypes: [
            (id: -1, name: "A", parent: Some(-2)),
            (id: -2, name: "B", parent: Some(-1)),
        ])"#;
        let error = WorldLoader::parse(looping).expect_err("looping hierarchy");
        assert!(error.to_string().contains("loops"));

        let own_parent = r#"(archetypes: [(id: -1, name: "A", parent: Some(-1))])"#;
        assert!(WorldLoader::parse(own_parent).is_err());
    }

    #[test]
    fn rejects_unknown_or_concrete_parents() {
        let dangling = r#"(archetypes: [(id: -10, name: "Chest", parent: Some(-1))])"#;
        let error = WorldLoader::parse(dangling).expect_err("dangling parent");
        assert!(error.to_string().contains("not an archetype"));

        let concrete_parent = r#"(
            archetypes: [(id: -1, name: "Object"), (id: -10, name: "Chest", parent: Some(1))],
            objects: [(id: 1, archetype: -1)],
        )"#;
        assert!(WorldLoader::parse(concrete_parent).is_err());

        let unknown_archetype = r#"(
            archetypes: [(id: -1, name: "Object")],
            objects: [(id: 1, archetype: -5)],
        )"#;
        let error = WorldLoader::parse(unknown_archetype).expect_err("undefined archetype");
        assert!(error.to_string().contains("not defined"));
    }

    #[test]
    fn reports_file_path_on_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("world.ron");
        std::fs::write(&path, "(objects: [").expect("write world");

        let error = WorldLoader::load(&path).expect_err("truncated file");
        assert!(error.to_string().contains("world.ron"));
    }
}
