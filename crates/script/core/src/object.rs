//! Object handles and world-space vectors shared by every resolver.
use std::fmt;

/// Opaque handle into the host's object space.
///
/// Positive ids are concrete objects placed in the world. Negative ids are
/// abstract archetypes in the object hierarchy. Zero means "no object".
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObjectId(pub i32);

impl ObjectId {
    /// Reserved identifier meaning "no object".
    pub const NONE: Self = Self(0);

    #[inline]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns true for instantiated objects, the only ids selectors may return.
    #[inline]
    pub const fn is_concrete(self) -> bool {
        self.0 > 0
    }

    /// Returns true for abstract archetypes.
    #[inline]
    pub const fn is_archetype(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ObjectId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

/// Position or direction in world space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Vec3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self { x, y, z }
    }
}

/// The two objects carried by the event being handled.
///
/// `current` is the object the behavior is attached to (`[me]`), `source` is
/// the object that caused the event (`[source]`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TargetContext {
    pub current: ObjectId,
    pub source: ObjectId,
}

impl TargetContext {
    pub const fn new(current: ObjectId, source: ObjectId) -> Self {
        Self { current, source }
    }

    /// Context for configuration reads that happen outside any event, where
    /// there is no triggering source.
    pub const fn current_only(current: ObjectId) -> Self {
        Self {
            current,
            source: ObjectId::NONE,
        }
    }
}
