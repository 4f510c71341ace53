/// Long header form bit, fixed bit and packet type `Initial` (0b00).
pub const LONG_HEADER_INITIAL: u8 = 0xC0;
pub const QUIC_V1: [u8; 4] = [0x00, 0x00, 0x00, 0x01];
pub const SOURCE_CONNECTION_ID: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

/// Minimal QUIC v1 Initial header sent to UDP/443.
///
/// Layout: header byte, version, DCID length (0), SCID length (8), SCID,
/// token length varint (0). Nothing after it is valid QUIC; the probe only
/// looks for *some* reply.
pub const INITIAL_PACKET: [u8; 16] = build_initial_packet();

const fn build_initial_packet() -> [u8; 16] {
    let mut packet = [0u8; 16];
    packet[0] = LONG_HEADER_INITIAL;
    let mut i = 0;
    while i < 4 {
        packet[1 + i] = QUIC_V1[i];
        i += 1;
    }
    packet[5] = 0x00;
    packet[6] = SOURCE_CONNECTION_ID.len() as u8;
    let mut j = 0;
    while j < SOURCE_CONNECTION_ID.len() {
        packet[7 + j] = SOURCE_CONNECTION_ID[j];
        j += 1;
    }
    packet[15] = 0x00;
    packet
}
