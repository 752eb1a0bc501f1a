/// Persistent quest-variable store.
///
/// Quest variables are named integers that survive across the session.
pub trait QuestVarStore: Send + Sync {
    fn exists(&self, name: &str) -> bool;

    /// Value of `name`. Only meaningful when [`exists`](Self::exists) is true.
    fn get(&self, name: &str) -> i32;

    fn lookup(&self, name: &str) -> Option<i32> {
        self.exists(name).then(|| self.get(name))
    }
}

/// Reads an integer quest variable, falling back to `default` when it is unset.
pub fn qvar_value(store: &(impl QuestVarStore + ?Sized), name: &str, default: i32) -> i32 {
    store.lookup(name).unwrap_or(default)
}
