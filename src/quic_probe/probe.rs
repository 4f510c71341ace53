use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::{UdpSocket, lookup_host};
use tokio::time::timeout;

use super::packet::INITIAL_PACKET;

pub const QUIC_PORT: u16 = 443;
pub const UDP_TIMEOUT: Duration = Duration::from_secs(2);

/// Large enough for any datagram a QUIC server sends before the handshake.
const RECV_BUFFER_SIZE: usize = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReachabilityOutcome {
    ResponseReceived,
    NoResponse,
    ResolutionFailed,
    SocketError,
}

/// Sends one QUIC Initial packet over UDP and waits for any reply.
///
/// Any datagram counts as a reply, including version negotiation packets and
/// unrelated traffic. The prober does not try to tell them apart.
#[derive(Debug, Clone)]
pub struct QuicProber {
    pub port: u16,
    pub timeout: Duration,
}

impl Default for QuicProber {
    fn default() -> Self {
        Self {
            port: QUIC_PORT,
            timeout: UDP_TIMEOUT,
        }
    }
}

impl QuicProber {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    pub async fn probe_reachability(&self, hostname: &str) -> ReachabilityOutcome {
        log::info!("QUIC UDP probe for {hostname}:{}", self.port);

        let Some(addr) = resolve(hostname, self.port).await else {
            log::warn!("DNS resolution failed for QUIC probe of {hostname}");
            return ReachabilityOutcome::ResolutionFailed;
        };

        // Socket is dropped on every return below.
        let socket = match UdpSocket::bind(unspecified_for(&addr)).await {
            Ok(socket) => socket,
            Err(e) => {
                log::warn!("Could not open UDP socket for {hostname}: {e}");
                return ReachabilityOutcome::SocketError;
            }
        };

        if let Err(e) = socket.send_to(&INITIAL_PACKET, addr).await {
            log::warn!("Failed to send QUIC Initial to {addr}: {e}");
            return ReachabilityOutcome::SocketError;
        }
        log::info!("Sent {} byte QUIC Initial to {addr}", INITIAL_PACKET.len());

        let mut buf = [0u8; RECV_BUFFER_SIZE];
        match timeout(self.timeout, socket.recv_from(&mut buf)).await {
            Ok(Ok((n, from))) if n > 0 => {
                log::info!("QUIC reply received from {from} ({n} bytes)");
                ReachabilityOutcome::ResponseReceived
            }
            Ok(Ok(_)) => {
                log::info!("Empty UDP datagram from {addr}");
                ReachabilityOutcome::NoResponse
            }
            Ok(Err(e)) => {
                log::info!("UDP receive from {addr} failed: {e}");
                ReachabilityOutcome::NoResponse
            }
            Err(_) => {
                log::info!("No QUIC reply from {addr} within {:?}", self.timeout);
                ReachabilityOutcome::NoResponse
            }
        }
    }
}

async fn resolve(hostname: &str, port: u16) -> Option<SocketAddr> {
    lookup_host((hostname, port)).await.ok()?.next()
}

fn unspecified_for(addr: &SocketAddr) -> SocketAddr {
    match addr {
        SocketAddr::V4(_) => SocketAddr::from(([0, 0, 0, 0], 0)),
        SocketAddr::V6(_) => SocketAddr::from(([0u16; 8], 0)),
    }
}
