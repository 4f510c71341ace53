use async_trait::async_trait;

use crate::http_probe::prelude::*;
use crate::quic_probe::prelude::*;
use crate::target::ParsedTarget;

/// Finds out which HTTP version a target ends up speaking.
#[async_trait]
pub trait Negotiator: Send + Sync {
    async fn negotiate(&self, target: &ParsedTarget) -> NegotiationOutcome;
}

/// Checks whether anything answers a QUIC Initial on UDP.
#[async_trait]
pub trait ReachabilityProber: Send + Sync {
    async fn probe_reachability(&self, hostname: &str) -> ReachabilityOutcome;
}

#[async_trait]
impl Negotiator for HttpNegotiator {
    async fn negotiate(&self, target: &ParsedTarget) -> NegotiationOutcome {
        HttpNegotiator::negotiate(self, target).await
    }
}

#[async_trait]
impl ReachabilityProber for QuicProber {
    async fn probe_reachability(&self, hostname: &str) -> ReachabilityOutcome {
        QuicProber::probe_reachability(self, hostname).await
    }
}
