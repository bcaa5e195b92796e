//! In-memory store backend.
//!
//! A process-local JSON tree behind `parking_lot` locks. This is the
//! reference implementation of the [`RemoteStore`] contract and the
//! backend the workspace tests run against. Watchers are notified on
//! every mutation that overlaps their path.

use super::{push_key, RemoteStore, Snapshot, StoreError, StoreWatch};
use parking_lot::{Mutex, RwLock};
use recetario_types::StorePath;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Process-local [`RemoteStore`] backend.
///
/// Cloning is cheap and clones share the same tree.
///
/// # Example
///
/// ```
/// use recetario_store::{MemoryStore, RemoteStore};
/// use recetario_types::StorePath;
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let store = MemoryStore::new();
/// let path = StorePath::root("customRecipes").child("u1");
///
/// store.write(&path, json!({"r1": {"name": "Soup"}})).await.unwrap();
/// let snap = store.read(&path).await.unwrap();
/// assert!(snap.exists());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    /// The whole store as one JSON value. `Null` means empty.
    tree: RwLock<Value>,
    watchers: Mutex<Vec<Watcher>>,
    next_watcher_id: AtomicU64,
}

#[derive(Debug)]
struct Watcher {
    id: u64,
    path: StorePath,
    tx: mpsc::UnboundedSender<Snapshot>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn value_at(tree: &Value, path: &StorePath) -> Snapshot {
        let mut current = tree;
        for segment in path.segments() {
            match current.get(segment) {
                Some(child) => current = child,
                None => return Snapshot::absent(),
            }
        }
        Snapshot::of(current.clone())
    }

    /// Sends each watcher overlapping `mutated` a fresh snapshot of its
    /// own path. Watchers whose receiving side is gone are dropped.
    fn notify(&self, mutated: &StorePath) {
        let tree = self.inner.tree.read();
        let mut watchers = self.inner.watchers.lock();
        watchers.retain(|watcher| !watcher.tx.is_closed());
        for watcher in watchers.iter() {
            if watcher.path.overlaps(mutated) {
                let _ = watcher.tx.send(Self::value_at(&tree, &watcher.path));
            }
        }
    }
}

impl RemoteStore for MemoryStore {
    async fn read(&self, path: &StorePath) -> Result<Snapshot, StoreError> {
        Ok(Self::value_at(&self.inner.tree.read(), path))
    }

    async fn write(&self, path: &StorePath, value: Value) -> Result<(), StoreError> {
        {
            let mut tree = self.inner.tree.write();
            if value.is_null() {
                remove_at(&mut tree, path.segments());
            } else {
                set_at(&mut tree, path.segments(), value);
            }
        }
        self.notify(path);
        Ok(())
    }

    async fn delete(&self, path: &StorePath) -> Result<(), StoreError> {
        {
            let mut tree = self.inner.tree.write();
            remove_at(&mut tree, path.segments());
        }
        self.notify(path);
        Ok(())
    }

    async fn push_key(&self, _path: &StorePath) -> Result<String, StoreError> {
        Ok(push_key())
    }

    fn watch(&self, path: &StorePath) -> StoreWatch {
        let (tx, rx) = mpsc::unbounded_channel();

        // onValue semantics: the current state is delivered up front.
        let initial = Self::value_at(&self.inner.tree.read(), path);
        let _ = tx.send(initial);

        let id = self.inner.next_watcher_id.fetch_add(1, Ordering::Relaxed);
        self.inner.watchers.lock().push(Watcher {
            id,
            path: path.clone(),
            tx,
        });

        let inner = Arc::clone(&self.inner);
        StoreWatch::new(rx, move || {
            inner.watchers.lock().retain(|watcher| watcher.id != id);
        })
    }
}

/// Replaces the value at `segments`, creating intermediate objects.
fn set_at(tree: &mut Value, segments: &[String], value: Value) {
    let mut current = tree;
    for segment in segments {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        let Value::Object(map) = current else {
            unreachable!("value was just coerced to an object");
        };
        current = map.entry(segment.clone()).or_insert(Value::Null);
    }
    *current = value;
}

/// Removes the value at `segments`. Absent ancestors make this a no-op.
fn remove_at(tree: &mut Value, segments: &[String]) {
    let Some((last, parents)) = segments.split_last() else {
        *tree = Value::Null;
        return;
    };

    let mut current = tree;
    for segment in parents {
        match current.get_mut(segment) {
            Some(child) => current = child,
            None => return,
        }
    }
    if let Value::Object(map) = current {
        map.remove(last);
    }
}
