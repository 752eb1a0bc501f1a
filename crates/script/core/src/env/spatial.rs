use crate::object::{ObjectId, Vec3};

/// Host spatial service.
pub trait SpatialOracle: Send + Sync {
    /// World position of `object`, or `None` if it has no location.
    fn position(&self, object: ObjectId) -> Option<Vec3>;
}
