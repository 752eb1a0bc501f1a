//! Traits describing the host services the resolvers read from.
//!
//! Oracles expose the object directory, object positions, links, and the
//! quest-variable store. The [`Env`] aggregate bundles them so the selector
//! resolver and the expression evaluator stay pure functions of their inputs
//! and can be driven by snapshot fakes in tests and tools.
mod directory;
mod error;
mod links;
mod quest;
mod spatial;
mod snapshot;

pub use directory::{Descent, ObjectDirectory};
pub use error::OracleError;
pub use links::LinkOracle;
pub use quest::{QuestVarStore, qvar_value};
pub use snapshot::{LinkRecord, ObjectRecord, QuestVarSnapshot, WorldSnapshot};
pub use spatial::SpatialOracle;

/// Aggregates the read-only oracles required by target resolution and
/// parameter evaluation.
pub struct Env<'a, D, S, L, Q>
where
    D: ObjectDirectory + ?Sized,
    S: SpatialOracle + ?Sized,
    L: LinkOracle + ?Sized,
    Q: QuestVarStore + ?Sized,
{
    directory: Option<&'a D>,
    spatial: Option<&'a S>,
    links: Option<&'a L>,
    quest: Option<&'a Q>,
}

impl<D, S, L, Q> Clone for Env<'_, D, S, L, Q>
where
    D: ObjectDirectory + ?Sized,
    S: SpatialOracle + ?Sized,
    L: LinkOracle + ?Sized,
    Q: QuestVarStore + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

// Derive would demand `D: Copy` etc., which trait objects never satisfy.
impl<D, S, L, Q> Copy for Env<'_, D, S, L, Q>
where
    D: ObjectDirectory + ?Sized,
    S: SpatialOracle + ?Sized,
    L: LinkOracle + ?Sized,
    Q: QuestVarStore + ?Sized,
{
}

pub type ScriptEnv<'a> = Env<
    'a,
    dyn ObjectDirectory + 'a,
    dyn SpatialOracle + 'a,
    dyn LinkOracle + 'a,
    dyn QuestVarStore + 'a,
>;

impl<'a, D, S, L, Q> Env<'a, D, S, L, Q>
where
    D: ObjectDirectory + ?Sized,
    S: SpatialOracle + ?Sized,
    L: LinkOracle + ?Sized,
    Q: QuestVarStore + ?Sized,
{
    pub fn new(
        directory: Option<&'a D>,
        spatial: Option<&'a S>,
        links: Option<&'a L>,
        quest: Option<&'a Q>,
    ) -> Self {
        Self {
            directory,
            spatial,
            links,
            quest,
        }
    }

    pub fn with_all(directory: &'a D, spatial: &'a S, links: &'a L, quest: &'a Q) -> Self {
        Self::new(Some(directory), Some(spatial), Some(links), Some(quest))
    }

    pub fn empty() -> Self {
        Self {
            directory: None,
            spatial: None,
            links: None,
            quest: None,
        }
    }

    /// Returns the ObjectDirectory, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::DirectoryNotAvailable` if no directory was provided.
    pub fn directory(&self) -> Result<&'a D, OracleError> {
        self.directory.ok_or(OracleError::DirectoryNotAvailable)
    }

    /// Returns the SpatialOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SpatialNotAvailable` if no spatial oracle was provided.
    pub fn spatial(&self) -> Result<&'a S, OracleError> {
        self.spatial.ok_or(OracleError::SpatialNotAvailable)
    }

    /// Returns the LinkOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::LinksNotAvailable` if no link oracle was provided.
    pub fn links(&self) -> Result<&'a L, OracleError> {
        self.links.ok_or(OracleError::LinksNotAvailable)
    }

    /// Returns the QuestVarStore, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::QuestVarsNotAvailable` if no store was provided.
    pub fn quest(&self) -> Result<&'a Q, OracleError> {
        self.quest.ok_or(OracleError::QuestVarsNotAvailable)
    }
}

impl<'a, D, S, L, Q> Env<'a, D, S, L, Q>
where
    D: ObjectDirectory + 'a,
    S: SpatialOracle + 'a,
    L: LinkOracle + 'a,
    Q: QuestVarStore + 'a,
{
    /// Converts this environment into a trait-object based `ScriptEnv`.
    pub fn as_script_env(&self) -> ScriptEnv<'a> {
        let directory: Option<&'a dyn ObjectDirectory> = self.directory.map(|d| d as _);
        let spatial: Option<&'a dyn SpatialOracle> = self.spatial.map(|s| s as _);
        let links: Option<&'a dyn LinkOracle> = self.links.map(|l| l as _);
        let quest: Option<&'a dyn QuestVarStore> = self.quest.map(|q| q as _);
        Env::new(directory, spatial, links, quest)
    }
}

impl<'a> ScriptEnv<'a> {
    /// Environment backed by one world snapshot (directory, positions, links)
    /// and one quest-variable table.
    pub fn from_snapshots(world: &'a WorldSnapshot, qvars: &'a QuestVarSnapshot) -> Self {
        Env::new(
            Some(world as &dyn ObjectDirectory),
            Some(world as &dyn SpatialOracle),
            Some(world as &dyn LinkOracle),
            Some(qvars as &dyn QuestVarStore),
        )
    }
}
