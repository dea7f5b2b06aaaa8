//! Defines the mint instruction executed by a Cosmos counterparty

use ift_primitives::prelude::*;
use ift_primitives::Signer;

use crate::error::IftError;
use crate::{Amount, Denom};

pub const MSG_IFT_MINT_TYPE_URL: &str = "/ift.v1.MsgIFTMint";

/// Native call built by the Cosmos send-call constructor. The receiving
/// module executes it as its own mint message.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MsgIftMint {
    #[serde(rename = "@type")]
    pub type_url: String,
    pub denom: Denom,
    pub receiver: Signer,
    pub amount: Amount,
}

impl MsgIftMint {
    pub fn new(denom: Denom, receiver: Signer, amount: Amount) -> Self {
        Self {
            type_url: MSG_IFT_MINT_TYPE_URL.to_string(),
            denom,
            receiver,
            amount,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, IftError> {
        serde_json::to_vec(self).map_err(|e| IftError::MalformedNativeCall {
            reason: e.to_string(),
        })
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, IftError> {
        let msg: Self = serde_json::from_slice(bytes).map_err(|e| IftError::MalformedNativeCall {
            reason: e.to_string(),
        })?;
        if msg.type_url != MSG_IFT_MINT_TYPE_URL {
            return Err(IftError::MalformedNativeCall {
                reason: format!("unexpected message type {}", msg.type_url),
            });
        }
        Ok(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_msg_json_layout() {
        let msg = MsgIftMint::new(
            "uift".parse().unwrap(),
            "cosmos1receiver".into(),
            Amount::from(5),
        );
        let bytes = msg.encode().unwrap();
        assert_eq!(
            bytes,
            br#"{"@type":"/ift.v1.MsgIFTMint","denom":"uift","receiver":"cosmos1receiver","amount":"5"}"#
        );
        assert_eq!(MsgIftMint::decode(&bytes).unwrap(), msg);
    }

    #[test]
    fn foreign_message_type_is_rejected() {
        let bytes = br#"{"@type":"/cosmos.bank.v1beta1.MsgSend","denom":"uift","receiver":"cosmos1receiver","amount":"5"}"#;
        assert!(MsgIftMint::decode(bytes).is_err());
    }
}
