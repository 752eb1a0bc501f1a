//! Expression grammar.
//!
//! ```text
//! expression := operand | operand op operand
//! operand    := number | '$' name
//! op         := '*' | '/'
//! ```
//!
//! The string is split at the first operator; operands are trimmed. There is
//! no nesting, so `$a*2*3` is rejected (its right operand is `2*3`).

use std::borrow::Cow;
use std::fmt;

use super::error::ExprError;

/// Arithmetic applied between two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Operator {
    #[strum(to_string = "*")]
    Multiply,
    #[strum(to_string = "/")]
    Divide,
}

impl Operator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }
}

/// One side of a binary expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand<'a> {
    Literal(f32),
    Var(Cow<'a, str>),
}

impl<'a> Operand<'a> {
    /// Parses a number or a `$name` reference, ignoring surrounding whitespace.
    pub fn parse(text: &'a str) -> Result<Self, ExprError> {
        let text = text.trim();
        if let Some(name) = text.strip_prefix('$') {
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(ExprError::MalformedOperand(text.to_owned()));
            }
            return Ok(Self::Var(Cow::Borrowed(name)));
        }

        text.parse()
            .map(Self::Literal)
            .map_err(|_| ExprError::MalformedOperand(text.to_owned()))
    }

    pub fn into_owned(self) -> Operand<'static> {
        match self {
            Self::Literal(value) => Operand::Literal(value),
            Self::Var(name) => Operand::Var(Cow::Owned(name.into_owned())),
        }
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Self::Var(_))
    }
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{}", value),
            Self::Var(name) => write!(f, "${}", name),
        }
    }
}

/// Parsed quest-variable expression.
///
/// Borrows variable names from the source string; call
/// [`into_owned`](Self::into_owned) to keep it beyond the source's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub enum Expression<'a> {
    Literal(f32),
    Var(Cow<'a, str>),
    Binary(Operand<'a>, Operator, Operand<'a>),
}

impl<'a> Expression<'a> {
    /// Parses `text`.
    ///
    /// # Errors
    ///
    /// [`ExprError::Empty`] for blank input and [`ExprError::MalformedOperand`]
    /// when either operand is neither a number nor `$name`.
    pub fn parse(text: &'a str) -> Result<Self, ExprError> {
        if text.trim().is_empty() {
            return Err(ExprError::Empty);
        }

        let Some((split, op)) = text
            .char_indices()
            .find_map(|(i, c)| Operator::from_char(c).map(|op| (i, op)))
        else {
            return Ok(match Operand::parse(text)? {
                Operand::Literal(value) => Self::Literal(value),
                Operand::Var(name) => Self::Var(name),
            });
        };

        let left = Operand::parse(&text[..split])?;
        let right = Operand::parse(&text[split + 1..])?;
        Ok(Self::Binary(left, op, right))
    }

    /// True when evaluation reads at least one quest variable, i.e. when the
    /// value can change between evaluations.
    pub fn references_vars(&self) -> bool {
        match self {
            Self::Literal(_) => false,
            Self::Var(_) => true,
            Self::Binary(left, _, right) => left.is_var() || right.is_var(),
        }
    }

    /// Names of the quest variables this expression reads, left to right.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        let (first, second): (Option<&str>, Option<&str>) = match self {
            Self::Literal(_) => (None, None),
            Self::Var(name) => (Some(name.as_ref()), None),
            Self::Binary(left, _, right) => (var_name(left), var_name(right)),
        };
        first.into_iter().chain(second)
    }

    pub fn into_owned(self) -> Expression<'static> {
        match self {
            Self::Literal(value) => Expression::Literal(value),
            Self::Var(name) => Expression::Var(Cow::Owned(name.into_owned())),
            Self::Binary(left, op, right) => {
                Expression::Binary(left.into_owned(), op, right.into_owned())
            }
        }
    }
}

fn var_name<'e>(operand: &'e Operand<'_>) -> Option<&'e str> {
    match operand {
        Operand::Var(name) => Some(name.as_ref()),
        Operand::Literal(_) => None,
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{}", value),
            Self::Var(name) => write!(f, "${}", name),
            Self::Binary(left, op, right) => write!(f, "{}{}{}", left, op, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Operand<'_> {
        Operand::Var(Cow::Borrowed(name))
    }

    #[test]
    fn single_operands() {
        assert_eq!(Expression::parse("42"), Ok(Expression::Literal(42.0)));
        assert_eq!(Expression::parse(" -1.5 "), Ok(Expression::Literal(-1.5)));
        assert_eq!(
            Expression::parse("$spd"),
            Ok(Expression::Var(Cow::Borrowed("spd")))
        );
    }

    #[test]
    fn binary_forms() {
        assert_eq!(
            Expression::parse("$spd/10"),
            Ok(Expression::Binary(var("spd"), Operator::Divide, Operand::Literal(10.0)))
        );
        assert_eq!(
            Expression::parse("2 * $a"),
            Ok(Expression::Binary(Operand::Literal(2.0), Operator::Multiply, var("a")))
        );
        assert_eq!(
            Expression::parse("$a/$b"),
            Ok(Expression::Binary(var("a"), Operator::Divide, var("b")))
        );
        assert_eq!(
            Expression::parse("3*4"),
            Ok(Expression::Binary(
                Operand::Literal(3.0),
                Operator::Multiply,
                Operand::Literal(4.0)
            ))
        );
    }

    #[test]
    fn malformed_input() {
        assert_eq!(Expression::parse(""), Err(ExprError::Empty));
        assert_eq!(Expression::parse("   "), Err(ExprError::Empty));
        assert_eq!(
            Expression::parse("fast"),
            Err(ExprError::MalformedOperand("fast".into()))
        );
        assert_eq!(
            Expression::parse("$"),
            Err(ExprError::MalformedOperand("$".into()))
        );
        assert_eq!(
            Expression::parse("$a*"),
            Err(ExprError::MalformedOperand("".into()))
        );
        assert_eq!(
            Expression::parse("$a*2*3"),
            Err(ExprError::MalformedOperand("2*3".into()))
        );
        assert_eq!(
            Expression::parse("$two words"),
            Err(ExprError::MalformedOperand("$two words".into()))
        );
    }

    #[test]
    fn sigil_must_touch_the_name() {
        assert_eq!(
            Expression::parse("$ spd"),
            Err(ExprError::MalformedOperand("$ spd".into()))
        );
        assert_eq!(
            Expression::parse("2*$ spd"),
            Err(ExprError::MalformedOperand("$ spd".into()))
        );
        let spaced = Expression::parse(" $spd / 10 ").expect("spaced operands");
        assert_eq!(spaced.variables().collect::<Vec<_>>(), ["spd"]);
    }

    #[test]
    fn variable_tracking() {
        let expr = Expression::parse("$a/$b").unwrap();
        assert!(expr.references_vars());
        assert_eq!(expr.variables().collect::<Vec<_>>(), ["a", "b"]);

        let expr = Expression::parse("10/4").unwrap();
        assert!(!expr.references_vars());
        assert_eq!(expr.variables().count(), 0);
    }

    #[test]
    fn owned_expression_outlives_source() {
        let owned = {
            let source = String::from("$spd*2");
            Expression::parse(&source).unwrap().into_owned()
        };
        assert_eq!(owned.to_string(), "$spd*2");
    }
}
