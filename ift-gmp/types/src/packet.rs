//! Defines the packet type
use ift_primitives::prelude::*;
use ift_primitives::{ClientId, Sequence, Timestamp};

use crate::error::PacketError;
use crate::gmp::GmpPacketData;

/// The packet type; this is what the GMP transport carries between chains.
///
/// `data` holds the encoded [`GmpPacketData`]. Applications never build
/// packets themselves: they hand an [`OutboundPacket`] to the transport,
/// which fills in the counterparty client.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Packet {
    pub seq_on_a: Sequence,
    /// client on the sending chain (A) tracking the receiving chain (B)
    pub client_id_on_a: ClientId,
    /// client on the receiving chain (B) tracking the sending chain (A)
    pub client_id_on_b: ClientId,
    pub timeout_timestamp_on_b: Timestamp,
    pub data: Vec<u8>,
}

impl Packet {
    /// Decodes the GMP envelope carried by this packet.
    pub fn gmp_data(&self) -> Result<GmpPacketData, PacketError> {
        GmpPacketData::decode(&self.data)
    }

    /// Checks whether the packet has expired relative to the given host time.
    pub fn timed_out(&self, host_timestamp: &Timestamp) -> bool {
        host_timestamp.has_reached(&self.timeout_timestamp_on_b)
    }
}

impl core::fmt::Display for Packet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> Result<(), core::fmt::Error> {
        write!(
            f,
            "seq:{}, path:{}->{}, timeout:{}",
            self.seq_on_a, self.client_id_on_a, self.client_id_on_b, self.timeout_timestamp_on_b
        )
    }
}

/// What an application asks the transport to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundPacket {
    pub seq_on_a: Sequence,
    pub client_id_on_a: ClientId,
    pub timeout_timestamp_on_b: Timestamp,
    pub data: GmpPacketData,
}

impl OutboundPacket {
    /// Completes the packet with the counterparty client known to the transport.
    pub fn into_packet(self, client_id_on_b: ClientId) -> Result<Packet, PacketError> {
        Ok(Packet {
            seq_on_a: self.seq_on_a,
            client_id_on_a: self.client_id_on_a,
            client_id_on_b,
            timeout_timestamp_on_b: self.timeout_timestamp_on_b,
            data: self.data.encode()?,
        })
    }
}
