//! Expression errors.

use crate::error::{ErrorSeverity, ScriptError};

/// Failure to parse or evaluate a quest-variable expression.
///
/// Parameter readers never surface these: they substitute the caller's
/// default. They exist so tools and tests can tell the cases apart.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    /// The expression was empty or whitespace.
    #[error("empty expression")]
    Empty,

    /// An operand was neither a number nor `$name`.
    #[error("malformed operand '{0}'")]
    MalformedOperand(String),

    /// A referenced quest variable does not exist.
    #[error("quest variable '{0}' does not exist")]
    MissingVariable(String),

    /// The right-hand side of `/` evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl ExprError {
    /// True for syntax problems, as opposed to problems with the live values.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Empty | Self::MalformedOperand(_))
    }
}

impl ScriptError for ExprError {
    fn severity(&self) -> ErrorSeverity {
        use ExprError::*;
        match self {
            Empty | MalformedOperand(_) => ErrorSeverity::Validation,
            MissingVariable(_) | DivisionByZero => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use ExprError::*;
        match self {
            Empty => "EXPR_EMPTY",
            MalformedOperand(_) => "EXPR_MALFORMED_OPERAND",
            MissingVariable(_) => "EXPR_MISSING_VARIABLE",
            DivisionByZero => "EXPR_DIVISION_BY_ZERO",
        }
    }
}
