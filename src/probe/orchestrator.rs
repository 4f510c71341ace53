use crate::http_probe::prelude::*;
use crate::quic_probe::prelude::*;
use crate::target::{self, ParsedTarget};

use super::prelude::*;

const NOTE_INVALID_URL: &str = "URL invalide";
const NOTE_H3: &str = "HTTP/3 disponible et utilise";
const NOTE_H2: &str = "HTTP/2 utilise, HTTP/3 non disponible";
const NOTE_HTTP1: &str = "HTTP/1.1 utilise";
const NOTE_REQUEST_FAILED: &str = "Echec de la negociation HTTP";
const NOTE_UNDETERMINED: &str = "Impossible de determiner le protocole";
const NOTE_H2_QUIC_SUFFIX: &str = " (mais QUIC repond sur UDP 443)";
const NOTE_FAILED_BUT_QUIC: &str = "Echec de la negociation HTTP, mais QUIC repond sur UDP 443";

/// Runs one full probe: parse, negotiate, and fall back to a raw QUIC
/// reachability check when negotiation did not reach HTTP/3.
///
/// Never fails. Every problem ends up in the returned result's notes.
pub struct Orchestrator<N, R> {
    negotiator: N,
    prober: R,
}

impl<N: Negotiator, R: ReachabilityProber> Orchestrator<N, R> {
    pub fn new(negotiator: N, prober: R) -> Self {
        Self { negotiator, prober }
    }

    pub async fn run_probe(&self, url: &str) -> ProbeResult {
        log::info!("Probe started: {url}");
        let result = self.classify(url).await;
        log::info!(
            "Probe finished: {url} -> {} / {} ({})",
            result.http3_support,
            result.alpn_protocol,
            result.notes
        );
        result
    }

    async fn classify(&self, url: &str) -> ProbeResult {
        let target = match target::parse(url) {
            Ok(target) => target,
            Err(e) => {
                log::warn!("{e}");
                return ProbeResult::new(
                    url,
                    Http3Support::No,
                    AlpnProtocol::NotAvailable,
                    NOTE_INVALID_URL,
                );
            }
        };

        let preliminary = match self.negotiator.negotiate(&target).await {
            NegotiationOutcome::NegotiatedH3 => {
                return ProbeResult::new(url, Http3Support::Yes, AlpnProtocol::H3, NOTE_H3);
            }
            NegotiationOutcome::NegotiatedHttp1 => {
                return ProbeResult::new(url, Http3Support::No, AlpnProtocol::Http11, NOTE_HTTP1);
            }
            NegotiationOutcome::ProtocolUndetermined => {
                return ProbeResult::new(
                    url,
                    Http3Support::No,
                    AlpnProtocol::NotAvailable,
                    NOTE_UNDETERMINED,
                );
            }
            NegotiationOutcome::NegotiatedH2 => {
                ProbeResult::new(url, Http3Support::No, AlpnProtocol::H2, NOTE_H2)
            }
            NegotiationOutcome::RequestFailed => ProbeResult::new(
                url,
                Http3Support::No,
                AlpnProtocol::NotAvailable,
                NOTE_REQUEST_FAILED,
            ),
        };

        self.fallback(&target, preliminary).await
    }

    async fn fallback(&self, target: &ParsedTarget, mut result: ProbeResult) -> ProbeResult {
        let outcome = self.prober.probe_reachability(target.resolvable_host()).await;
        log::info!("QUIC reachability for {}: {outcome:?}", target.hostname);

        if outcome != ReachabilityOutcome::ResponseReceived {
            return result;
        }

        match result.alpn_protocol {
            AlpnProtocol::H2 => result.notes.push_str(NOTE_H2_QUIC_SUFFIX),
            _ => {
                result.http3_support = Http3Support::Probable;
                result.notes = NOTE_FAILED_BUT_QUIC.to_string();
            }
        }
        result
    }
}
