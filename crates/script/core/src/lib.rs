//! Destination and parameter resolution for scripted object behaviors.
//!
//! `script-core` turns the strings designers write into behavior config into
//! values a behavior can act on: destination selectors become object lists,
//! quest-variable expressions become numbers, and design notes become typed
//! parameters. Everything reads the world through the oracle traits in
//! [`env`], so the same code runs against a live host or a
//! [`WorldSnapshot`](env::WorldSnapshot).
pub mod describe;
pub mod env;
pub mod error;
pub mod object;
pub mod param;
pub mod qvar;
pub mod target;
mod text;

pub use describe::describe_object;
pub use env::{
    Descent, Env, LinkOracle, ObjectDirectory, OracleError, QuestVarStore, ScriptEnv,
    SpatialOracle, qvar_value,
};
pub use error::{ErrorSeverity, ScriptError};
pub use object::{ObjectId, TargetContext, Vec3};
pub use param::{
    ConfigBlob, CountMode, DesignNote, DesignNoteError, FloatParam, ParamReader, ValueFalloff,
    read_float,
};
pub use qvar::{ExprError, Expression, evaluate, evaluate_or};
pub use target::{Selector, get_target_objects, resolve};
