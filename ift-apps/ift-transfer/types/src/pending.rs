//! In-flight transfers awaiting resolution by the GMP transport.
use core::fmt::{Display, Error as FmtError, Formatter};

use ift_primitives::prelude::*;
use ift_primitives::{ClientId, Sequence, Signer, Timestamp};

use crate::{Amount, Denom};

/// Tokens burned or escrowed on this chain whose outbound packet has not been
/// acknowledged or timed out yet. Holds what is needed to refund the sender.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PendingTransfer {
    pub denom: Denom,
    pub client_id: ClientId,
    pub sequence: Sequence,
    pub sender: Signer,
    pub amount: Amount,
    pub timeout_timestamp: Timestamp,
    pub created_at: Timestamp,
}

impl PendingTransfer {
    pub fn key(&self) -> PendingTransferKey {
        PendingTransferKey::new(self.denom.clone(), self.client_id.clone(), self.sequence)
    }
}

/// Identifies a [`PendingTransfer`]. Unique for the lifetime of the chain
/// since sequences are never reused.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PendingTransferKey {
    pub denom: Denom,
    pub client_id: ClientId,
    pub sequence: Sequence,
}

impl PendingTransferKey {
    pub fn new(denom: Denom, client_id: ClientId, sequence: Sequence) -> Self {
        Self {
            denom,
            client_id,
            sequence,
        }
    }
}

impl Display for PendingTransferKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}/{}/{}", self.denom, self.client_id, self.sequence)
    }
}

/// How a pending transfer was resolved.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The counterparty minted the tokens; the burn/escrow stays final.
    Settled,
    /// The transfer failed or expired; the sender got the tokens back.
    Refunded,
}

impl TransferOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Settled => "settled",
            Self::Refunded => "refunded",
        }
    }
}

impl Display for TransferOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}
