//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use script_core::env::{QuestVarSnapshot, WorldSnapshot};
use tracing::debug;

use crate::loaders::{LoadResult, QuestVarLoader, WorldLoader};

/// Content factory that loads world content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── world.ron
/// ├── qvars.toml
/// └── worlds/
///     └── mission2.ron
/// ```
///
/// File names are relative to `data_dir`; absolute paths are used as given.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Load a world snapshot.
    pub fn load_world(&self, file: impl AsRef<Path>) -> LoadResult<WorldSnapshot> {
        let path = self.resolve(file.as_ref());
        debug!("loading world from {}", path.display());
        WorldLoader::load(&path)
    }

    /// Load a quest-variable table.
    pub fn load_qvars(&self, file: impl AsRef<Path>) -> LoadResult<QuestVarSnapshot> {
        let path = self.resolve(file.as_ref());
        debug!("loading quest variables from {}", path.display());
        QuestVarLoader::load(&path)
    }

    /// Like [`load_qvars`](Self::load_qvars), but a missing file yields an
    /// empty table.
    pub fn load_qvars_or_default(&self, file: impl AsRef<Path>) -> LoadResult<QuestVarSnapshot> {
        let path = self.resolve(file.as_ref());
        if !path.exists() {
            debug!("no quest variables at {}, starting empty", path.display());
            return Ok(QuestVarSnapshot::new());
        }
        QuestVarLoader::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use script_core::{ObjectDirectory, ObjectId, QuestVarStore};

    use super::*;

    #[test]
    fn loads_relative_to_data_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::create_dir(dir.path().join("worlds")).expect("create worlds dir");
        std::fs::write(
            dir.path().join("worlds/test.ron"),
            r#"(archetypes: [(id: -1, name: "Object")])"#,
        )
        .expect("write world");
        std::fs::write(dir.path().join("qvars.toml"), "spd = 55").expect("write qvars");

        let factory = ContentFactory::new(dir.path());
        let world = factory.load_world("worlds/test.ron").expect("world loads");
        let qvars = factory.load_qvars("qvars.toml").expect("qvars load");

        assert_eq!(world.find_by_name("Object"), Some(ObjectId(-1)));
        assert_eq!(qvars.lookup("spd"), Some(55));
    }

    #[test]
    fn missing_qvars_file_is_optional() {
        let dir = tempfile::tempdir().expect("temp dir");
        let factory = ContentFactory::new(dir.path());

        assert!(factory.load_qvars("qvars.toml").is_err());
        let qvars = factory.load_qvars_or_default("qvars.toml").expect("empty table");
        assert_eq!(qvars, QuestVarSnapshot::new());
    }

    #[test]
    fn missing_world_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = ContentFactory::new(dir.path())
            .load_world("world.ron")
            .expect_err("no world file");
        assert!(error.to_string().contains("Failed to read file"));
    }
}
