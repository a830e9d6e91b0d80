use std::sync::Arc;

use parking_lot::RwLock;

use crate::database::seed;
use crate::models::{Activity, ActivityDirectory};

/// Shared in-memory activity mapping, keyed by activity name.
///
/// Cloning is cheap and every clone sees the same data. Entries keep their
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    entries: Arc<RwLock<Vec<(String, Activity)>>>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store loaded with the startup activities.
    pub fn seeded() -> Self {
        Self {
            entries: Arc::new(RwLock::new(seed::seed_activities())),
        }
    }

    /// Adds an activity. Returns `false` and leaves the store untouched when
    /// the name is already taken.
    pub fn insert(&self, name: &str, activity: Activity) -> bool {
        let mut entries = self.entries.write();
        if entries.iter().any(|(n, _)| n == name) {
            return false;
        }
        entries.push((name.to_string(), activity));
        true
    }

    pub fn snapshot(&self) -> ActivityDirectory {
        ActivityDirectory::new(self.entries.read().clone())
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.entries
            .read()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity.clone())
    }

    /// Runs `f` against one activity while holding the write lock, so the
    /// whole read-check-mutate sequence is atomic. `None` if no such activity.
    pub fn update<R>(&self, name: &str, f: impl FnOnce(&mut Activity) -> R) -> Option<R> {
        let mut entries = self.entries.write();
        entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| f(activity))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
