use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::probe::prelude::ProbeResult;

/// Shared, append-only list of finished probes, in completion order.
///
/// Cloning gives another handle to the same list. One lock covers append,
/// snapshot and clear, and is never held across I/O.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    inner: Arc<Mutex<Vec<ProbeResult>>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-pushed entry behind,
    // so a poisoned guard is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<ProbeResult>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append(&self, result: ProbeResult) {
        self.lock().push(result);
    }

    pub fn snapshot(&self) -> Vec<ProbeResult> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::probe::prelude::{AlpnProtocol, Http3Support};

    fn result(i: usize) -> ProbeResult {
        ProbeResult::new(
            &format!("https://host-{i}.test"),
            Http3Support::No,
            AlpnProtocol::NotAvailable,
            format!("note {i}"),
        )
    }

    #[test]
    fn test_append_keeps_order() {
        let store = ResultStore::new();
        store.append(result(2));
        store.append(result(0));
        store.append(result(1));

        let urls: Vec<_> = store.snapshot().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            ["https://host-2.test", "https://host-0.test", "https://host-1.test"]
        );
    }

    #[test]
    fn test_clear_then_snapshot_is_empty() {
        let store = ResultStore::new();
        store.append(result(0));
        store.append(result(1));
        store.clear();
        assert!(store.snapshot().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = ResultStore::new();
        store.append(result(0));
        let before = store.snapshot();
        store.append(result(1));
        assert_eq!(before.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends() {
        const N: usize = 200;
        let store = ResultStore::new();

        let reader = {
            let store = store.clone();
            tokio::spawn(async move {
                for _ in 0..50 {
                    for r in store.snapshot() {
                        // every visible entry is complete
                        let i = r.url.trim_start_matches("https://host-").trim_end_matches(".test");
                        assert_eq!(r.notes, format!("note {i}"));
                    }
                    tokio::task::yield_now().await;
                }
            })
        };

        let handles: Vec<_> = (0..N)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.append(result(i)) })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }
        reader.await.unwrap();

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), N);
        let unique: HashSet<_> = snapshot.iter().map(|r| r.url.clone()).collect();
        assert_eq!(unique.len(), N);
    }
}
