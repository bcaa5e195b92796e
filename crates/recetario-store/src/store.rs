//! Remote store abstraction.
//!
//! The [`RemoteStore`] trait defines the interface the service layer
//! programs against. This allows pluggable backends (in-memory, REST,
//! hybrid) without touching application code.

use super::{Snapshot, StoreError};
use recetario_types::StorePath;
use std::future::Future;
use tokio::sync::mpsc;

/// Remote document store abstraction.
///
/// Implementations must be thread-safe (`Send + Sync`) for use across
/// async tasks.
///
/// # Contract
///
/// - **Path addressing**: every operation targets one subtree of a
///   single JSON tree.
/// - **Full replace**: `write` replaces the addressed subtree wholesale
///   and creates missing intermediate nodes.
/// - **Idempotent delete**: deleting an absent path succeeds.
/// - **Key generation**: `push_key` mints a fresh child key that is
///   usable before the write that fills it.
/// - **Snapshots, not deltas**: `watch` delivers the full current value
///   of the path on registration and after every change under it.
///
/// No transactions, no cross-path atomicity, and no ordering guarantee
/// across sibling subtrees are provided.
///
/// # Example
///
/// ```no_run
/// use recetario_store::{RemoteStore, StoreError};
/// use recetario_types::StorePath;
/// use serde_json::json;
///
/// async fn demo(store: &impl RemoteStore) -> Result<(), StoreError> {
///     let ns = StorePath::root("customRecipes").child("u1");
///     let key = store.push_key(&ns).await?;
///     store.write(&ns.child(key), json!({"name": "Soup"})).await?;
///     Ok(())
/// }
/// ```
pub trait RemoteStore: Send + Sync {
    /// Reads the full value at `path`.
    ///
    /// An absent path yields `Snapshot::absent()`, not an error.
    fn read(&self, path: &StorePath) -> impl Future<Output = Result<Snapshot, StoreError>> + Send;

    /// Replaces the subtree at `path` with `value`.
    ///
    /// Missing intermediate nodes are created. Writing `Value::Null`
    /// is equivalent to [`delete`](Self::delete).
    fn write(
        &self,
        path: &StorePath,
        value: serde_json::Value,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Removes the subtree at `path`. Absent paths are a no-op.
    fn delete(&self, path: &StorePath) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Returns a fresh unique child key under `path`.
    ///
    /// The key is reserved by construction (creation-ordered, random
    /// tail), not by a store round trip: it is usable before the write
    /// that fills it.
    fn push_key(&self, path: &StorePath) -> impl Future<Output = Result<String, StoreError>> + Send;

    /// Opens a standing subscription on `path`.
    ///
    /// The returned [`StoreWatch`] yields the current snapshot
    /// immediately, then a fresh full snapshot after every change that
    /// overlaps `path`. Backends may coalesce rapid successive changes;
    /// the latest state is always eventually delivered.
    fn watch(&self, path: &StorePath) -> StoreWatch;
}

/// A standing subscription to one store path.
///
/// Yields full-state [`Snapshot`]s via [`recv`](Self::recv). Dropping
/// the watch unregisters it from the backend; after that no further
/// snapshots are delivered.
pub struct StoreWatch {
    rx: mpsc::UnboundedReceiver<Snapshot>,
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl StoreWatch {
    /// Creates a watch from a snapshot channel and a cancel hook.
    ///
    /// Backend implementations (in-tree or external) push snapshots
    /// into the sending side of `rx`'s channel. The hook runs exactly
    /// once, on drop, and must unregister that sending side.
    pub fn new(
        rx: mpsc::UnboundedReceiver<Snapshot>,
        cancel: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            rx,
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Receives the next snapshot.
    ///
    /// Returns `None` once the backend side has shut down.
    pub async fn recv(&mut self) -> Option<Snapshot> {
        self.rx.recv().await
    }
}

impl Drop for StoreWatch {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for StoreWatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreWatch").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn recv_yields_sent_snapshots() {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut watch = StoreWatch::new(rx, || {});

        tx.send(Snapshot::of(json!(1))).unwrap();
        assert_eq!(watch.recv().await, Some(Snapshot::of(json!(1))));

        drop(tx);
        assert_eq!(watch.recv().await, None);
    }

    #[tokio::test]
    async fn drop_runs_cancel_once() {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let (_tx, rx) = mpsc::unbounded_channel();
        let watch = StoreWatch::new(rx, move || flag.store(true, Ordering::SeqCst));

        drop(watch);
        assert!(cancelled.load(Ordering::SeqCst));
    }
}
