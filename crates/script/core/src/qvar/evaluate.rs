//! Expression evaluation against a live quest-variable store.

use tracing::{debug, warn};

use super::error::ExprError;
use super::expr::{Expression, Operand, Operator};
use crate::env::QuestVarStore;

/// Evaluates `expr`, reading any `$name` operands from `store`.
///
/// # Errors
///
/// - `MissingVariable` if a referenced quest variable is not set
/// - `DivisionByZero` if the right-hand side of `/` is zero
pub fn evaluate<S>(expr: &Expression<'_>, store: &S) -> Result<f32, ExprError>
where
    S: QuestVarStore + ?Sized,
{
    match expr {
        Expression::Literal(value) => Ok(*value),
        Expression::Var(name) => read_var(store, name),
        Expression::Binary(left, op, right) => {
            let lhs = operand(left, store)?;
            let rhs = operand(right, store)?;
            match op {
                Operator::Multiply => Ok(lhs * rhs),
                Operator::Divide if rhs == 0.0 => Err(ExprError::DivisionByZero),
                Operator::Divide => Ok(lhs / rhs),
            }
        }
    }
}

/// Evaluates `expr`, substituting `default` for any failure.
///
/// A missing variable anywhere in the expression yields `default` as-is; the
/// arithmetic is not applied to it.
pub fn evaluate_or<S>(expr: &Expression<'_>, store: &S, default: f32) -> f32
where
    S: QuestVarStore + ?Sized,
{
    match evaluate(expr, store) {
        Ok(value) => value,
        Err(ExprError::DivisionByZero) => {
            warn!("'{}' divides by zero, using default {}", expr, default);
            default
        }
        Err(error) => {
            debug!("'{}' unavailable ({}), using default {}", expr, error, default);
            default
        }
    }
}

fn operand<S>(side: &Operand<'_>, store: &S) -> Result<f32, ExprError>
where
    S: QuestVarStore + ?Sized,
{
    match side {
        Operand::Literal(value) => Ok(*value),
        Operand::Var(name) => read_var(store, name),
    }
}

fn read_var<S>(store: &S, name: &str) -> Result<f32, ExprError>
where
    S: QuestVarStore + ?Sized,
{
    store
        .lookup(name)
        .map(|value| value as f32)
        .ok_or_else(|| ExprError::MissingVariable(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::QuestVarSnapshot;

    fn store() -> QuestVarSnapshot {
        [("spd", 55), ("two", 2), ("zero", 0)].into_iter().collect()
    }

    fn eval(text: &str) -> Result<f32, ExprError> {
        evaluate(&Expression::parse(text)?, &store())
    }

    #[test]
    fn literal_ignores_store() {
        let expr = Expression::Literal(42.0);
        assert_eq!(evaluate(&expr, &store()), Ok(42.0));
        assert_eq!(evaluate(&expr, &QuestVarSnapshot::new()), Ok(42.0));
    }

    #[test]
    fn variable_arithmetic() {
        assert_eq!(eval("$spd"), Ok(55.0));
        assert_eq!(eval("$spd/10"), Ok(5.5));
        assert_eq!(eval("$spd*$two"), Ok(110.0));
        assert_eq!(eval("10/$two"), Ok(5.0));
        assert_eq!(eval("1.5*4"), Ok(6.0));
    }

    #[test]
    fn missing_variable_is_reported() {
        assert_eq!(
            eval("$missing/10"),
            Err(ExprError::MissingVariable("missing".into()))
        );
        assert_eq!(
            eval("10*$missing"),
            Err(ExprError::MissingVariable("missing".into()))
        );
    }

    #[test]
    fn missing_variable_defaults_without_arithmetic() {
        let expr = Expression::parse("$missing/10").unwrap();
        assert_eq!(evaluate_or(&expr, &store(), 2.0), 2.0);

        let expr = Expression::parse("$spd*$missing").unwrap();
        assert_eq!(evaluate_or(&expr, &store(), 7.0), 7.0);
    }

    #[test]
    fn division_by_zero_uses_default() {
        assert_eq!(eval("$spd/$zero"), Err(ExprError::DivisionByZero));
        assert_eq!(eval("3/0"), Err(ExprError::DivisionByZero));

        let expr = Expression::parse("$spd/$zero").unwrap();
        assert_eq!(evaluate_or(&expr, &store(), 1.25), 1.25);

        // Zero on the left is fine.
        assert_eq!(eval("$zero/4"), Ok(0.0));
    }
}
