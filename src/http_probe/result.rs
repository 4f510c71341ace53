/// What the HTTPS exchange told us about the protocol the server speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegotiationOutcome {
    NegotiatedH3,
    NegotiatedH2,
    NegotiatedHttp1,
    /// No response at all, on any transport.
    RequestFailed,
    /// A response came back but its protocol version is not one we know.
    ProtocolUndetermined,
}
