//! Common error infrastructure for script-core.
//!
//! Domain-specific errors (e.g. [`ExprError`](crate::qvar::ExprError),
//! [`OracleError`](crate::env::OracleError)) live next to the code that
//! produces them. This module holds the shared classification they all report.
//!
//! # Design Principles
//!
//! - **Degrade, don't halt**: unmatched selectors and unresolvable parameters
//!   are values (empty lists, defaults), never errors
//! - **Severity Classification**: the few real errors are categorized so callers
//!   can decide whether to log and continue or treat them as a wiring bug

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the world may change so the same input succeeds later
/// - **Validation**: malformed designer input that will not succeed unchanged
/// - **Internal**: unexpected inconsistency inside the core
/// - **Fatal**: the caller wired the core up incorrectly (missing collaborator)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - may succeed once the world state changes.
    ///
    /// Examples: quest variable not yet set
    Recoverable,

    /// Validation error - invalid designer input, retrying will not help.
    ///
    /// Examples: malformed expression operand, unterminated quote in a design note
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - a required collaborator is missing.
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug in the caller or the core.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all script-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ScriptError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Validation.is_internal());
    }

    #[test]
    fn severity_display_is_snake_case() {
        assert_eq!(ErrorSeverity::Recoverable.to_string(), "recoverable");
        assert_eq!(ErrorSeverity::Fatal.as_ref(), "fatal");
    }
}
