//! Subcommand implementations.

mod describe;
mod eval;
mod param;
mod resolve;

pub use describe::Describe;
pub use eval::Eval;
pub use param::Param;
pub use resolve::Resolve;

use anyhow::Result;
use script_core::{ObjectDirectory, ObjectId};

/// Finds an object by name or id.
fn lookup_object(directory: &dyn ObjectDirectory, text: &str) -> Result<ObjectId> {
    directory
        .find_by_name(text)
        .ok_or_else(|| anyhow::anyhow!("No object named '{}'", text))
}
