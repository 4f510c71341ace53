use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Http3Support {
    Yes,
    /// Negotiation failed but something answered on UDP/443.
    Probable,
    No,
}

impl Http3Support {
    pub fn as_str(&self) -> &'static str {
        match self {
            Http3Support::Yes => "Yes",
            Http3Support::Probable => "Probable (QUIC repond)",
            Http3Support::No => "No",
        }
    }
}

impl fmt::Display for Http3Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlpnProtocol {
    H3,
    H2,
    Http11,
    NotAvailable,
}

impl AlpnProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlpnProtocol::H3 => "h3",
            AlpnProtocol::H2 => "h2",
            AlpnProtocol::Http11 => "http/1.1",
            AlpnProtocol::NotAvailable => "N/A",
        }
    }
}

impl fmt::Display for AlpnProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one probe, as shown to the user and written to CSV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub url: String,
    pub http3_support: Http3Support,
    pub alpn_protocol: AlpnProtocol,
    pub notes: String,
}

impl ProbeResult {
    pub fn new(
        url: &str,
        http3_support: Http3Support,
        alpn_protocol: AlpnProtocol,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            url: url.to_string(),
            http3_support,
            alpn_protocol,
            notes: notes.into(),
        }
    }

    /// The four output fields, in column order.
    pub fn fields(&self) -> [&str; 4] {
        [
            &self.url,
            self.http3_support.as_str(),
            self.alpn_protocol.as_str(),
            &self.notes,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Http3Support::Yes.to_string(), "Yes");
        assert_eq!(Http3Support::Probable.to_string(), "Probable (QUIC repond)");
        assert_eq!(Http3Support::No.to_string(), "No");
        assert_eq!(AlpnProtocol::H3.to_string(), "h3");
        assert_eq!(AlpnProtocol::H2.to_string(), "h2");
        assert_eq!(AlpnProtocol::Http11.to_string(), "http/1.1");
        assert_eq!(AlpnProtocol::NotAvailable.to_string(), "N/A");
    }

    #[test]
    fn test_fields_order() {
        let result = ProbeResult::new(
            "https://example.com",
            Http3Support::No,
            AlpnProtocol::Http11,
            "HTTP/1.1 utilise",
        );
        assert_eq!(
            result.fields(),
            ["https://example.com", "No", "http/1.1", "HTTP/1.1 utilise"]
        );
    }
}
