//! Oracle access errors.

use crate::error::{ErrorSeverity, ScriptError};

/// A resolver needed a collaborator that was not supplied to the [`Env`](super::Env).
///
/// Missing data (unknown names, objects without positions) is never reported
/// here; it degrades to an empty contribution instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// ObjectDirectory is not available in the environment.
    #[error("ObjectDirectory not available")]
    DirectoryNotAvailable,

    /// SpatialOracle is not available in the environment.
    #[error("SpatialOracle not available")]
    SpatialNotAvailable,

    /// LinkOracle is not available in the environment.
    #[error("LinkOracle not available")]
    LinksNotAvailable,

    /// QuestVarStore is not available in the environment.
    #[error("QuestVarStore not available")]
    QuestVarsNotAvailable,
}

impl ScriptError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            DirectoryNotAvailable => "ORACLE_DIRECTORY_NOT_AVAILABLE",
            SpatialNotAvailable => "ORACLE_SPATIAL_NOT_AVAILABLE",
            LinksNotAvailable => "ORACLE_LINKS_NOT_AVAILABLE",
            QuestVarsNotAvailable => "ORACLE_QUEST_VARS_NOT_AVAILABLE",
        }
    }
}
