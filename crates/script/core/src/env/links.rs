use crate::object::ObjectId;

/// Host link/relation service.
pub trait LinkOracle: Send + Sync {
    /// Destinations of every link of `flavor` leaving `from`, in link order.
    fn linked(&self, from: ObjectId, flavor: &str) -> Vec<ObjectId>;
}
