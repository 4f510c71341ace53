use url::Url;

use crate::error::{Error, Result};

const HTTPS_SCHEME: &str = "https";

/// A probe target broken down into the pieces the probers need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTarget {
    /// Host as it appears in the URL. IPv6 literals keep their brackets.
    pub hostname: String,
    pub port: u16,
    /// Request path including the query string, never empty.
    pub path: String,
}

impl ParsedTarget {
    /// The hostname in a form the system resolver accepts (no IPv6 brackets).
    pub fn resolvable_host(&self) -> &str {
        self.hostname
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(&self.hostname)
    }

    /// Rebuilds the HTTPS URL the negotiation request is sent to.
    pub fn https_url(&self) -> String {
        format!("{HTTPS_SCHEME}://{}:{}{}", self.hostname, self.port, self.path)
    }
}

fn invalid(url: &str, reason: impl Into<String>) -> Error {
    Error::InvalidUrl {
        url: url.to_string(),
        reason: reason.into(),
    }
}

/// Splits `url` into hostname, port and path without touching the network.
///
/// Only `https` URLs are accepted. The port falls back to the scheme default
/// (443) and an empty path becomes `/`.
pub fn parse(url: &str) -> Result<ParsedTarget> {
    let parsed = Url::parse(url.trim()).map_err(|e| invalid(url, e.to_string()))?;

    if parsed.scheme() != HTTPS_SCHEME {
        return Err(invalid(url, format!("unsupported scheme '{}'", parsed.scheme())));
    }

    let hostname = match parsed.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => return Err(invalid(url, "empty host")),
    };

    let port = parsed
        .port_or_known_default()
        .ok_or_else(|| invalid(url, "no port for scheme"))?;

    let mut path = match parsed.path() {
        "" => "/".to_string(),
        p => p.to_string(),
    };
    if let Some(query) = parsed.query() {
        path.push('?');
        path.push_str(query);
    }

    Ok(ParsedTarget {
        hostname,
        port,
        path,
    })
}
