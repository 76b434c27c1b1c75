//! Per-session mutual exclusion.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Locks keyed by session id.
///
/// Exchanges on one session id are serialized so that the
/// append → invoke → append sequence is atomic per exchange; exchanges on
/// different session ids never block each other.
#[derive(Debug, Default)]
pub(crate) struct SessionLocks {
    inner: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SessionLocks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a session id, creating it on first use.
    pub(crate) async fn acquire(&self, id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut inner = self.inner.lock().await;
            inner
                .entry(id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    /// Drop the lock entry for a retired session id.
    pub(crate) async fn forget(&self, id: &str) {
        self.inner.lock().await.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_id_serializes() {
        let locks = Arc::new(SessionLocks::new());

        let guard = locks.acquire("S1").await;

        let contender = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire("S1").await;
            })
        };

        // The second acquire must not complete while the first is held.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), contender)
            .await
            .expect("contender should finish after release")
            .unwrap();
    }

    #[tokio::test]
    async fn test_different_ids_do_not_block() {
        let locks = SessionLocks::new();

        let _a = locks.acquire("A").await;
        // Would deadlock if ids shared a lock.
        let _b = tokio::time::timeout(Duration::from_millis(100), locks.acquire("B"))
            .await
            .expect("different id must be acquirable");
    }

    #[tokio::test]
    async fn test_forget_then_reacquire() {
        let locks = SessionLocks::new();
        drop(locks.acquire("S1").await);
        locks.forget("S1").await;
        let _guard = locks.acquire("S1").await;
    }
}
