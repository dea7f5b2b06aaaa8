//! Defines the IFT transfer message type

use ift_primitives::prelude::*;
use ift_primitives::{ClientId, Signer, Timestamp};

use crate::error::IftError;
use crate::{Amount, Denom, Memo};

/// Message used to move `amount` of `denom` to `receiver` on the chain
/// behind `client_id`.
///
/// Like an ICS-20 `MsgTransfer`, this is not a packet yet: the sequence and
/// the counterparty-native instruction are filled in by the module, the
/// sender only describes the tokens and where they go.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MsgTransfer {
    pub sender: Signer,
    pub denom: Denom,
    /// the GMP client of the destination chain
    pub client_id: ClientId,
    /// receiver in the destination chain's native address format
    pub receiver: Signer,
    pub amount: Amount,
    /// Absolute timestamp on the destination chain after which the packet
    /// can no longer be received.
    pub timeout_timestamp: Timestamp,
    #[serde(default)]
    pub memo: Memo,
}

impl MsgTransfer {
    /// Stateless checks; the timeout is checked against the host clock by the
    /// handler.
    pub fn validate_basic(&self) -> Result<(), IftError> {
        if self.amount.is_zero() {
            return Err(IftError::ZeroAmount);
        }
        if self.sender.is_empty() {
            return Err(IftError::InvalidAddress {
                address: self.sender.to_string(),
                reason: "sender is empty".to_string(),
            });
        }
        if self.receiver.is_empty() {
            return Err(IftError::InvalidReceiverAddress {
                receiver: self.receiver.to_string(),
            });
        }
        Ok(())
    }

    /// Checks the timeout is strictly after `host_timestamp`.
    pub fn validate_timeout(&self, host_timestamp: &Timestamp) -> Result<(), IftError> {
        if self.timeout_timestamp <= *host_timestamp {
            return Err(IftError::InvalidTimeout {
                timeout_timestamp: self.timeout_timestamp.to_string(),
                host_timestamp: host_timestamp.to_string(),
            });
        }
        Ok(())
    }
}
