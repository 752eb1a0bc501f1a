//! In-memory oracle implementations backed by plain data.
//!
//! Snapshots capture the parts of a world the resolvers read: the object
//! hierarchy, positions, links, and quest variables. Content loaders build them
//! from data files; tests build them directly.
//!
//! # Traversal order
//!
//! [`WorldSnapshot::descendants`] walks breadth-first, visiting siblings in
//! ascending id order. Real hosts are free to use a different order.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use super::{Descent, LinkOracle, ObjectDirectory, QuestVarStore, SpatialOracle};
use crate::object::{ObjectId, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One node of the object hierarchy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectRecord {
    pub id: ObjectId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Archetype this node inherits from. `None` for hierarchy roots.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parent: Option<ObjectId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub position: Option<Vec3>,
}

impl ObjectRecord {
    /// Abstract archetype node.
    pub fn archetype(id: i32, name: &str, parent: Option<i32>) -> Self {
        Self {
            id: ObjectId(id),
            name: Some(name.to_owned()),
            parent: parent.map(ObjectId),
            position: None,
        }
    }

    /// Concrete object placed in the world.
    pub fn concrete(id: i32, name: Option<&str>, parent: i32, position: Vec3) -> Self {
        Self {
            id: ObjectId(id),
            name: name.map(str::to_owned),
            parent: Some(ObjectId(parent)),
            position: Some(position),
        }
    }
}

/// Directed link of a named flavor between two objects.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkRecord {
    pub flavor: String,
    pub from: ObjectId,
    pub to: ObjectId,
}

/// Snapshot of the object hierarchy, positions and links.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldSnapshot {
    objects: BTreeMap<ObjectId, ObjectRecord>,
    /// Parent -> children, kept in step with `objects`.
    children: BTreeMap<ObjectId, BTreeSet<ObjectId>>,
    links: Vec<LinkRecord>,
}

impl WorldSnapshot {
    pub fn new(objects: impl IntoIterator<Item = ObjectRecord>, links: Vec<LinkRecord>) -> Self {
        let mut world = Self {
            links,
            ..Self::default()
        };
        for record in objects {
            world.insert(record);
        }
        world
    }

    /// Adds or replaces an object record.
    pub fn insert(&mut self, record: ObjectRecord) {
        let id = record.id;
        if let Some(parent) = record.parent {
            self.children.entry(parent).or_default().insert(id);
        }
        let new_parent = record.parent;
        let old_parent = self.objects.insert(id, record).and_then(|old| old.parent);

        if let Some(old_parent) = old_parent.filter(|old| Some(*old) != new_parent) {
            if let Some(siblings) = self.children.get_mut(&old_parent) {
                siblings.remove(&id);
                if siblings.is_empty() {
                    self.children.remove(&old_parent);
                }
            }
        }
    }

    /// Adds a link of `flavor` from `from` to `to`, after any existing ones.
    pub fn link(&mut self, flavor: &str, from: ObjectId, to: ObjectId) {
        self.links.push(LinkRecord {
            flavor: flavor.to_owned(),
            from,
            to,
        });
    }

    pub fn record(&self, id: ObjectId) -> Option<&ObjectRecord> {
        self.objects.get(&id)
    }

    pub fn objects(&self) -> impl Iterator<Item = &ObjectRecord> {
        self.objects.values()
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn children(&self, parent: ObjectId) -> impl Iterator<Item = ObjectId> + '_ {
        self.children.get(&parent).into_iter().flatten().copied()
    }
}

impl ObjectDirectory for WorldSnapshot {
    fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        if let Some(record) = self.objects.values().find(|record| {
            record
                .name
                .as_deref()
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
        }) {
            return Some(record.id);
        }

        let id = ObjectId(name.trim().parse().ok()?);
        self.objects.contains_key(&id).then_some(id)
    }

    fn name_of(&self, object: ObjectId) -> Option<String> {
        self.objects.get(&object)?.name.clone()
    }

    fn archetype_of(&self, object: ObjectId) -> Option<ObjectId> {
        self.objects.get(&object)?.parent
    }

    fn descendants(&self, archetype: ObjectId, descent: Descent) -> Vec<ObjectId> {
        let mut found = Vec::new();
        // Each node is visited once, so a looping hierarchy still terminates.
        let mut visited = BTreeSet::from([archetype]);
        let mut queue = VecDeque::from([archetype]);

        while let Some(node) = queue.pop_front() {
            for child in self.children(node) {
                if !visited.insert(child) {
                    continue;
                }
                found.push(child);
                if descent.is_transitive() {
                    queue.push_back(child);
                }
            }
        }

        found
    }
}

impl SpatialOracle for WorldSnapshot {
    fn position(&self, object: ObjectId) -> Option<Vec3> {
        self.objects.get(&object)?.position
    }
}

impl LinkOracle for WorldSnapshot {
    fn linked(&self, from: ObjectId, flavor: &str) -> Vec<ObjectId> {
        self.links
            .iter()
            .filter(|link| link.from == from && link.flavor.eq_ignore_ascii_case(flavor))
            .map(|link| link.to)
            .collect()
    }
}

/// Quest-variable table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QuestVarSnapshot {
    vars: BTreeMap<String, i32>,
}

impl QuestVarSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: i32) {
        self.vars.insert(name.to_owned(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<i32> {
        self.vars.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for QuestVarSnapshot {
    fn from_iter<T: IntoIterator<Item = (S, i32)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl QuestVarStore for QuestVarSnapshot {
    fn exists(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    fn get(&self, name: &str) -> i32 {
        self.vars.get(name).copied().unwrap_or_default()
    }
}
