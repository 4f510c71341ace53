pub mod packet;
pub mod probe;

pub mod prelude {
    pub use super::packet::INITIAL_PACKET;
    pub use super::probe::{QUIC_PORT, QuicProber, ReachabilityOutcome, UDP_TIMEOUT};
}
