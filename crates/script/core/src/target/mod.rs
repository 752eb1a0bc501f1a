//! Destination selectors: which objects an action applies to.
//!
//! Behavior modules describe their targets with short destination strings
//! (`[me]`, `*Chest`, `5.0<@Chest`, `&ControlDevice`, an object name...).
//! [`Selector::parse`] turns a string into a [`Selector`] once, and
//! [`resolve`] expands it against the live world every time the behavior
//! fires. Callers must not cache resolved lists across simulation ticks since
//! membership and positions change.
//!
//! ```ignore
//! let targets = get_target_objects("5.0<Chest", TargetContext::new(me, source), &env);
//! ```

mod resolve;
mod selector;

pub use resolve::{get_target_objects, resolve};
pub use selector::{ArchetypeQuery, Comparison, Selector};
