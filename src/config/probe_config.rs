use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::http_probe::probe::DEFAULT_USER_AGENT;

pub const DEFAULT_TARGET: &str = "https://www.cloudflare.com";

/// Probe settings read from the YAML config file.
/// Every field is optional; missing ones take the defaults below.
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    /// URLs probed in batch mode when none are given on the command line.
    #[serde(default)]
    pub targets: Vec<String>,

    /// How long the QUIC probe waits for a UDP reply.
    #[serde(default = "default_udp_timeout_ms")]
    pub udp_timeout_ms: u64,

    /// Bound on each HTTPS negotiation request.
    #[serde(default = "default_http_timeout_seconds")]
    pub http_timeout_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Accept self-signed or otherwise invalid certificates.
    #[serde(default)]
    pub accept_invalid_certs: bool,

    /// Diagnostic log destination. Defaults to a file in the temp directory.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_udp_timeout_ms() -> u64 {
    2000
}

fn default_http_timeout_seconds() -> u64 {
    5
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            udp_timeout_ms: default_udp_timeout_ms(),
            http_timeout_seconds: default_http_timeout_seconds(),
            user_agent: default_user_agent(),
            accept_invalid_certs: false,
            log_file: None,
        }
    }
}

impl ProbeConfig {
    pub fn udp_timeout(&self) -> Duration {
        Duration::from_millis(self.udp_timeout_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }

    /// Targets to probe, falling back to a single well known HTTP/3 host.
    pub fn targets_or_default(&self) -> Vec<String> {
        if self.targets.is_empty() {
            vec![DEFAULT_TARGET.to_string()]
        } else {
            self.targets.clone()
        }
    }
}
