//! Data-driven world and quest-variable content.
//!
//! This crate loads the data files that stand in for a live host:
//! - Object hierarchy, positions and links (RON)
//! - Quest-variable tables (TOML)
//!
//! Loaded content becomes the snapshot oracles from `script_core::env`, which
//! the resolvers read exactly as they would a running world.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, LoadResult, QuestVarLoader, WorldLoader};
