use crate::object::ObjectId;

/// How far below an archetype a descendant query reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Descent {
    /// Direct children only.
    Children,
    /// Children and every deeper descendant.
    Full,
}

impl Descent {
    pub const fn is_transitive(self) -> bool {
        matches!(self, Self::Full)
    }
}

/// Host object directory: names, archetype parents, and hierarchy traversal.
pub trait ObjectDirectory: Send + Sync {
    /// Looks an object up by name or by its stringified identifier.
    fn find_by_name(&self, name: &str) -> Option<ObjectId>;

    /// Returns the object's own name, if it has one.
    fn name_of(&self, object: ObjectId) -> Option<String>;

    /// Returns the archetype the object directly inherits from.
    fn archetype_of(&self, object: ObjectId) -> Option<ObjectId>;

    /// Returns descendants of `archetype` in traversal order.
    ///
    /// Implementations may include abstract nodes; callers that need concrete
    /// objects filter with [`ObjectId::is_concrete`].
    fn descendants(&self, archetype: ObjectId, descent: Descent) -> Vec<ObjectId>;
}
