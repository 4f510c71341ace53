use std::time::Duration;

use reqwest::{Client, Version};

use super::prelude::*;
use crate::error::Result;
use crate::target::ParsedTarget;

pub const DEFAULT_USER_AGENT: &str = "Http3QuicProbe/1.0";
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// Builds the client used for every negotiation. HTTP/3 stays available
/// per request through `Version::HTTP_3`; plain requests go through ALPN.
pub fn build_client(user_agent: &str, accept_invalid_certs: bool) -> Result<Client> {
    let client = Client::builder()
        .danger_accept_invalid_certs(accept_invalid_certs)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Maps the version reqwest reports for a response onto our outcome.
pub fn classify_version(version: Version) -> NegotiationOutcome {
    match version {
        Version::HTTP_3 => NegotiationOutcome::NegotiatedH3,
        Version::HTTP_2 => NegotiationOutcome::NegotiatedH2,
        Version::HTTP_11 | Version::HTTP_10 | Version::HTTP_09 => {
            NegotiationOutcome::NegotiatedHttp1
        }
        _ => NegotiationOutcome::ProtocolUndetermined,
    }
}

/// Names the step a request died in, for the diagnostic log.
pub fn failure_stage(err: &reqwest::Error) -> &'static str {
    if err.is_timeout() {
        "timeout"
    } else if err.is_connect() {
        "connect"
    } else if err.is_request() {
        "send"
    } else if err.is_body() || err.is_decode() {
        "receive"
    } else if err.is_redirect() {
        "redirect"
    } else {
        "request"
    }
}

/// Issues HEAD requests against a target and reports which HTTP version
/// was actually used.
#[derive(Debug, Clone)]
pub struct HttpNegotiator {
    client: Client,
    timeout: Duration,
}

impl HttpNegotiator {
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// HTTP/3 is tried first over QUIC. If that yields nothing, one HEAD goes
    /// over TCP+TLS and the ALPN result decides. Bodies are never read.
    pub async fn negotiate(&self, target: &ParsedTarget) -> NegotiationOutcome {
        let url = target.https_url();
        log::info!("HTTP/3 probe for {url}");

        match self
            .client
            .head(&url)
            .version(Version::HTTP_3)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(resp) => {
                log::debug!("{url} answered over QUIC with {:?}", resp.version());
                return classify_version(resp.version());
            }
            Err(e) => log::info!(
                "HTTP/3 attempt for {url} failed at {} stage: {}",
                failure_stage(&e),
                report(&e)
            ),
        }

        match self.client.head(&url).timeout(self.timeout).send().await {
            Ok(resp) => {
                log::debug!(
                    "{url} answered over TLS with {:?} (status {})",
                    resp.version(),
                    resp.status()
                );
                classify_version(resp.version())
            }
            Err(e) => {
                log::warn!(
                    "HTTPS request to {url} failed at {} stage: {}",
                    failure_stage(&e),
                    report(&e)
                );
                NegotiationOutcome::RequestFailed
            }
        }
    }
}
