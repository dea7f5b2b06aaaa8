//! Contains the `PacketData` type that defines the structure of IFT
//! transfers' payload bytes

use ift_primitives::prelude::*;
use ift_primitives::Signer;

use super::error::IftError;
use super::{Amount, Denom, Memo, NativeCall};

/// Chain-neutral description of a transfer, carried as the GMP payload.
///
/// `call` is the counterparty-native mint instruction built by the send-call
/// constructor registered for the bridge. Chains that execute `call` directly
/// (EVM, Solana) ignore the other fields; a Cosmos counterparty checks both
/// agree before minting.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PacketData {
    pub denom: Denom,
    pub amount: Amount,
    pub sender: Signer,
    pub receiver: Signer,
    #[serde(default)]
    pub memo: Memo,
    #[serde(default)]
    pub call: NativeCall,
}

impl PacketData {
    pub fn encode(&self) -> Result<Vec<u8>, IftError> {
        serde_json::to_vec(self).map_err(|e| IftError::PacketDataSerialization {
            reason: e.to_string(),
        })
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, IftError> {
        serde_json::from_slice(bytes).map_err(|_| IftError::PacketDataDeserialization)
    }
}
