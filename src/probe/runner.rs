use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use super::prelude::*;
use crate::store::ResultStore;

/// Launches probes as independent tasks and records their results.
///
/// Each finished result is appended to the store, then pushed to the
/// completion channel if one is attached. Probes are not capped or queued.
pub struct ProbeRunner<N, R> {
    orchestrator: Arc<Orchestrator<N, R>>,
    store: ResultStore,
    completions: Option<UnboundedSender<ProbeResult>>,
}

impl<N, R> Clone for ProbeRunner<N, R> {
    fn clone(&self) -> Self {
        Self {
            orchestrator: self.orchestrator.clone(),
            store: self.store.clone(),
            completions: self.completions.clone(),
        }
    }
}

impl<N, R> ProbeRunner<N, R>
where
    N: Negotiator + 'static,
    R: ReachabilityProber + 'static,
{
    pub fn new(orchestrator: Orchestrator<N, R>, store: ResultStore) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            store,
            completions: None,
        }
    }

    pub fn with_completions(mut self, sender: UnboundedSender<ProbeResult>) -> Self {
        self.completions = Some(sender);
        self
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn spawn(&self, url: impl Into<String>) -> JoinHandle<ProbeResult> {
        let url = url.into();
        let orchestrator = self.orchestrator.clone();
        let store = self.store.clone();
        let completions = self.completions.clone();

        tokio::spawn(async move {
            let result = orchestrator.run_probe(&url).await;
            store.append(result.clone());
            if let Some(sender) = completions {
                // receiver gone just means nobody is listening any more
                let _ = sender.send(result.clone());
            }
            result
        })
    }
}
