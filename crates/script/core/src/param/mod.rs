//! Behavior parameters.
//!
//! Parameters arrive as raw strings from a [`ConfigBlob`], usually a parsed
//! [`DesignNote`]. [`ParamReader`] turns them into typed values, evaluating
//! quest-variable expressions along the way.
//!
//! ```
//! use script_core::env::QuestVarSnapshot;
//! use script_core::param::{DesignNote, ParamReader};
//!
//! let qvars: QuestVarSnapshot = [("spd", 55)].into_iter().collect();
//! let note = DesignNote::parse("Speed='$spd/10'; Dest=@TrainTrack").unwrap();
//! let reader = ParamReader::new(&note, &qvars);
//!
//! assert_eq!(reader.read_float("Speed", 1.0), 5.5);
//! assert_eq!(reader.read_string("Dest", "[me]"), "@TrainTrack");
//! ```

mod count;
mod design_note;
mod reader;

pub use count::CountMode;
pub use design_note::{ConfigBlob, DesignNote, DesignNoteError};
pub use reader::{FloatParam, ParamReader, ValueFalloff, read_float};
