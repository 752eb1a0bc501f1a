//! Evaluate a quest-variable expression against the loaded quest variables.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use script_core::env::QuestVarSnapshot;
use script_core::{Expression, QuestVarStore, evaluate_or};

use crate::config::CliConfig;

/// Evaluate a quest-variable expression
#[derive(Parser)]
pub struct Eval {
    /// Expression: a number, `$name`, or `a*b` / `a/b` of those
    #[arg(value_name = "EXPR")]
    expr: String,

    /// Value used when a variable is unset or the expression cannot be evaluated
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    default: f32,
}

impl Eval {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let qvars = config.load_qvars()?;
        println!("{}", self.value(&qvars)?);
        Ok(())
    }

    fn value(&self, qvars: &QuestVarSnapshot) -> Result<f32> {
        let expr = Expression::parse(&self.expr)
            .with_context(|| format!("Invalid expression '{}'", self.expr))?;

        for name in expr.variables() {
            match qvars.lookup(name) {
                Some(value) => debug!("${} = {}", name, value),
                None => info!("${} is not set, using default {}", name, self.default),
            }
        }

        Ok(evaluate_or(&expr, qvars, self.default))
    }
}
