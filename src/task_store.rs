//! Task Store
//!
//! Sole authority for reading and writing the persisted task list.
//! Every operation round-trips through the slot; nothing is cached.

use crate::models::{Task, TaskList};
use crate::storage::{KeyValueStore, StoreError};

pub struct TaskStore<S> {
    slot: S,
    key: String,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(slot: S, key: impl Into<String>) -> Self {
        Self { slot, key: key.into() }
    }

    /// Read the full list. Absent, unreadable or malformed data yields an empty list.
    pub fn load(&self) -> TaskList {
        let raw = match self.slot.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "task list unreadable, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "task list malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list with `tasks`
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_string(tasks).map_err(|e| StoreError::Serialize(e.to_string()))?;
        self.slot.set_item(&self.key, &json)
    }

    /// Append a new uncompleted task. Empty text after trimming is rejected without writing.
    pub fn add(&self, text: &str) -> Result<Task, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        let task = Task::new(text);
        let mut tasks = self.load();
        tasks.push(task.clone());
        self.save(&tasks)?;
        tracing::debug!(count = tasks.len(), "task added");
        Ok(task)
    }

    /// Flip `completed` at `index`. Returns `false` without writing when out of range.
    pub fn toggle(&self, index: usize) -> Result<bool, StoreError> {
        let mut tasks = self.load();
        let Some(task) = tasks.get_mut(index) else {
            tracing::debug!(index, "toggle ignored, index out of range");
            return Ok(false);
        };
        task.completed = !task.completed;
        self.save(&tasks)?;
        Ok(true)
    }

    /// Remove the task at `index` if present. The list is persisted either way.
    pub fn delete(&self, index: usize) -> Result<Option<Task>, StoreError> {
        let mut tasks = self.load();
        let removed = (index < tasks.len()).then(|| tasks.remove(index));
        self.save(&tasks)?;
        Ok(removed)
    }

    /// Replace the stored list with an empty one
    pub fn clear(&self) -> Result<(), StoreError> {
        self.save(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    const KEY: &str = "webdev_tasks_v1";

    fn task(text: &str, completed: bool) -> Task {
        Task { text: text.to_string(), completed, created: 1_700_000_000_000 }
    }

    fn seeded<'a>(slot: &'a MemoryStorage, tasks: &[Task]) -> TaskStore<&'a MemoryStorage> {
        let store = TaskStore::new(slot, KEY);
        store.save(tasks).unwrap();
        store
    }

    #[test]
    fn test_save_load_round_trip() {
        let slot = MemoryStorage::default();
        let tasks = vec![task("Task A", false), task("Task B", true), task("ünïcode \"quoted\"", false)];
        let store = seeded(&slot, &tasks);
        assert_eq!(store.load(), tasks);
    }

    #[test]
    fn test_load_absent_is_empty() {
        let slot = MemoryStorage::default();
        let store = TaskStore::new(&slot, KEY);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let slot = MemoryStorage::default();
        let store = TaskStore::new(&slot, KEY);
        for raw in ["not json", "{\"text\":\"x\"}", "[{\"completed\":true}]", "42", ""] {
            slot.set_item(KEY, raw).unwrap();
            assert!(store.load().is_empty(), "expected empty list for {:?}", raw);
        }
    }

    #[test]
    fn test_add_empty_text_is_rejected() {
        let slot = MemoryStorage::default();
        let store = seeded(&slot, &[task("Existing", false)]);

        assert_eq!(store.add(""), Err(StoreError::EmptyText));
        assert_eq!(store.add("   "), Err(StoreError::EmptyText));
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_add_appends_uncompleted_task() {
        let slot = MemoryStorage::default();
        let store = seeded(&slot, &[task("Existing", true)]);

        let added = store.add("  Buy milk ").unwrap();
        assert_eq!(added.text, "Buy milk");

        let tasks = store.load();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].text, "Buy milk");
        assert!(!tasks[1].completed);
        assert!(tasks[1].created > 0);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let slot = MemoryStorage::default();
        let store = seeded(&slot, &[task("Task A", false), task("Task B", true)]);

        assert!(store.toggle(1).unwrap());
        assert!(!store.load()[1].completed);
        assert!(store.toggle(1).unwrap());
        assert!(store.load()[1].completed);
        assert!(!store.load()[0].completed);
    }

    #[test]
    fn test_toggle_out_of_range_is_noop() {
        let slot = MemoryStorage::default();
        let tasks = vec![task("Task A", false)];
        let store = seeded(&slot, &tasks);

        assert!(!store.toggle(1).unwrap());
        assert!(!store.toggle(usize::MAX).unwrap());
        assert_eq!(store.load(), tasks);
    }

    #[test]
    fn test_delete_first() {
        let slot = MemoryStorage::default();
        let store = seeded(&slot, &[task("Task A", false), task("Task B", true)]);

        let removed = store.delete(0).unwrap();
        assert_eq!(removed, Some(task("Task A", false)));
        assert_eq!(store.load(), vec![task("Task B", true)]);
    }

    #[test]
    fn test_delete_middle() {
        let slot = MemoryStorage::default();
        let store = seeded(&slot, &[task("A", false), task("B", false), task("C", false)]);

        store.delete(1).unwrap();
        let texts: Vec<_> = store.load().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["A", "C"]);
    }

    #[test]
    fn test_delete_out_of_range_is_noop() {
        let slot = MemoryStorage::default();
        let tasks = vec![task("Task A", false), task("Task B", true)];
        let store = seeded(&slot, &tasks);

        assert_eq!(store.delete(2).unwrap(), None);
        assert_eq!(store.load(), tasks);
    }

    #[test]
    fn test_clear() {
        let slot = MemoryStorage::default();
        let store = seeded(&slot, &[task("Task A", false), task("Task B", true)]);

        store.clear().unwrap();
        assert!(store.load().is_empty());
        assert_eq!(slot.get_item(KEY).unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_stores_sharing_a_slot_see_each_other() {
        let slot = MemoryStorage::default();
        let first = TaskStore::new(&slot, KEY);
        let second = TaskStore::new(&slot, KEY);

        first.add("From first").unwrap();
        assert_eq!(second.load().len(), 1);
        second.clear().unwrap();
        assert!(first.load().is_empty());
    }

    #[test]
    fn test_reads_records_written_by_earlier_page() {
        let slot = MemoryStorage::default();
        slot.set_item(KEY, r#"[{"text":"Old","completed":true,"created":1700000000000}]"#).unwrap();
        let store = TaskStore::new(&slot, KEY);
        assert_eq!(store.load(), vec![task("Old", true)]);
    }

    #[test]
    fn test_null_created_does_not_drop_list() {
        let slot = MemoryStorage::default();
        slot.set_item(KEY, r#"[{"text":"Keep me","completed":false,"created":null}]"#).unwrap();
        let store = TaskStore::new(&slot, KEY);

        let tasks = store.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Keep me");
        assert_eq!(tasks[0].created, 0);
    }
}
