//! The generic message passing envelope.

use ift_primitives::prelude::*;
use ift_primitives::Signer;

use crate::error::PacketError;

/// Application-agnostic packet data of the GMP transport.
///
/// Every application sending over GMP sets `sender` to its own account; the
/// transport delivers acknowledgements and timeouts back to the callback
/// handler registered for the client, which is why handlers compare `sender`
/// against their own address before acting.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GmpPacketData {
    pub sender: Signer,
    /// account or contract on the receiving chain that executes `payload`
    pub receiver: String,
    #[serde(default)]
    pub salt: Vec<u8>,
    pub payload: Vec<u8>,
    #[serde(default)]
    pub memo: String,
}

impl GmpPacketData {
    pub fn encode(&self) -> Result<Vec<u8>, PacketError> {
        if self.payload.is_empty() {
            return Err(PacketError::EmptyPacketData);
        }
        serde_json::to_vec(self).map_err(|e| PacketError::InvalidGmpPacketData {
            description: e.to_string(),
        })
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, PacketError> {
        serde_json::from_slice(bytes).map_err(|e| PacketError::InvalidGmpPacketData {
            description: e.to_string(),
        })
    }
}
