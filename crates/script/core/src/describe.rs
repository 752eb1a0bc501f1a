use crate::env::ObjectDirectory;
use crate::object::ObjectId;

/// Human-readable label for log lines and diagnostics.
///
/// - named objects: `"Lever (12)"`
/// - unnamed objects with a named archetype: `"A Chest (12)"`
/// - anything else: the bare id, with `"0"` for no object
pub fn describe_object(directory: &(impl ObjectDirectory + ?Sized), object: ObjectId) -> String {
    if object.is_none() {
        return ObjectId::NONE.to_string();
    }

    if let Some(name) = directory.name_of(object) {
        return format!("{} ({})", name, object);
    }

    match directory
        .archetype_of(object)
        .and_then(|archetype| directory.name_of(archetype))
    {
        Some(archetype) => format!("A {} ({})", archetype, object),
        None => object.to_string(),
    }
}
