//! Packet commitments as stored by the sending side of the transport.

use ift_primitives::prelude::*;
use sha2::{Digest, Sha256};

use crate::packet::Packet;

/// Packet commitment
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PacketCommitment([u8; 32]);

/// Computes the commitment of a packet: the SHA-256 of its identifying
/// fields and of the hash of its data.
pub fn compute_packet_commitment(packet: &Packet) -> PacketCommitment {
    let mut hash_input = Vec::new();

    hash_input.extend_from_slice(packet.client_id_on_a.as_bytes());
    hash_input.push(b'/');
    hash_input.extend_from_slice(packet.client_id_on_b.as_bytes());
    hash_input.extend_from_slice(&packet.seq_on_a.to_vec());
    hash_input.extend_from_slice(&packet.timeout_timestamp_on_b.nanoseconds().to_be_bytes());
    hash_input.extend_from_slice(&Sha256::digest(&packet.data));

    PacketCommitment(Sha256::digest(&hash_input).into())
}
