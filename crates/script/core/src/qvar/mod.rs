//! Quest-variable expressions for numeric parameters.
//!
//! A numeric parameter may be a plain number, a quest variable (`$name`), or a
//! single multiplication or division between two of those:
//!
//! ```ignore
//! // speed taken from a quest variable, scaled down by ten
//! let expr = Expression::parse("$spd/10")?;
//! let speed = evaluate_or(&expr, &qvars, 0.0);
//! ```
//!
//! Missing variables never turn into zero; the caller's default is used
//! instead (see [`evaluate_or`]).

mod error;
mod evaluate;
mod expr;

pub use error::ExprError;
pub use evaluate::{evaluate, evaluate_or};
pub use expr::{Expression, Operand, Operator};
