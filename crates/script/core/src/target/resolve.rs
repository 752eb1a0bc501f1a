//! Expansion of selectors into concrete object lists.

use tracing::{debug, warn};

use super::selector::{ArchetypeQuery, Comparison, Selector};
use crate::env::{ObjectDirectory, OracleError, ScriptEnv, SpatialOracle};
use crate::object::{ObjectId, TargetContext};

/// Expands `selector` into the objects it currently names.
///
/// Results keep oracle traversal order and may contain duplicates. An empty
/// list is a normal outcome: unknown names, names that denote the wrong kind
/// of object, and objects without positions all contribute nothing.
///
/// # Errors
///
/// Returns an [`OracleError`] only when the selector needs a collaborator the
/// environment does not provide (e.g. a radius search without a spatial oracle).
pub fn resolve(
    selector: &Selector<'_>,
    ctx: TargetContext,
    env: &ScriptEnv<'_>,
) -> Result<Vec<ObjectId>, OracleError> {
    let matches = match *selector {
        Selector::Me => vec![ctx.current],
        Selector::Source => vec![ctx.source],
        Selector::Named(name) => named(env.directory()?, name).into_iter().collect(),
        Selector::Linked(flavor) => env
            .links()?
            .linked(ctx.current, flavor)
            .into_iter()
            .filter(|obj| obj.is_concrete())
            .collect(),
        Selector::Archetype(query) => archetype_members(env.directory()?, query),
        Selector::Radius {
            query,
            radius,
            comparison,
        } => within_radius(
            env.directory()?,
            env.spatial()?,
            query,
            ctx.current,
            radius,
            comparison,
        ),
    };

    debug!(
        "resolved '{}' from {} to {} object(s)",
        selector,
        ctx.current,
        matches.len()
    );
    Ok(matches)
}

/// Parses and resolves `dest` in one step.
///
/// A missing collaborator is logged and treated as "no matches", so a single
/// misconfigured behavior cannot halt event processing.
pub fn get_target_objects(dest: &str, ctx: TargetContext, env: &ScriptEnv<'_>) -> Vec<ObjectId> {
    let selector = Selector::parse(dest);
    match resolve(&selector, ctx, env) {
        Ok(matches) => matches,
        Err(error) => {
            warn!("cannot resolve destination '{}': {}", dest, error);
            Vec::new()
        }
    }
}

fn named(directory: &dyn ObjectDirectory, name: &str) -> Option<ObjectId> {
    let obj = directory.find_by_name(name)?;
    if obj.is_concrete() {
        Some(obj)
    } else {
        debug!("'{}' names {} which is not a concrete object", name, obj);
        None
    }
}

fn archetype_members(directory: &dyn ObjectDirectory, query: ArchetypeQuery<'_>) -> Vec<ObjectId> {
    let Some(archetype) = directory.find_by_name(query.name) else {
        debug!("archetype '{}' not found", query.name);
        return Vec::new();
    };

    // Expansion only applies to abstract archetypes; a concrete object of
    // that name matches nothing.
    if !archetype.is_archetype() {
        debug!("'{}' is not an archetype ({})", query.name, archetype);
        return Vec::new();
    }

    directory
        .descendants(archetype, query.descent)
        .into_iter()
        .filter(|obj| obj.is_concrete())
        .collect()
}

fn within_radius(
    directory: &dyn ObjectDirectory,
    spatial: &dyn SpatialOracle,
    query: ArchetypeQuery<'_>,
    origin: ObjectId,
    radius: f32,
    comparison: Comparison,
) -> Vec<ObjectId> {
    let Some(from) = spatial.position(origin) else {
        debug!("radius search origin {} has no position", origin);
        return Vec::new();
    };

    archetype_members(directory, query)
        .into_iter()
        .filter(|&candidate| {
            spatial
                .position(candidate)
                .is_some_and(|to| comparison.admits(from.distance(to), radius))
        })
        .collect()
}
