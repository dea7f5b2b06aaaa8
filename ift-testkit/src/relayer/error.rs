use displaydoc::Display;

use crate::context::ChainError;

#[derive(Debug, Display)]
pub enum RelayerError {
    /// transaction on chain `{chain_id}` failed: `{error}`
    TransactionFailed { chain_id: String, error: ChainError },
    /// packet `{packet}` is not committed on the source chain
    PacketNotCommitted { packet: String },
    /// no acknowledgement written on the destination chain for packet `{packet}`
    AcknowledgementNotFound { packet: String },
    /// packet `{packet}` was received on the destination chain and cannot time out
    PacketAlreadyReceived { packet: String },
    /// packet `{packet}` has not timed out on the destination chain
    PacketNotTimedOut { packet: String },
}

impl std::error::Error for RelayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::TransactionFailed { error, .. } => Some(error),
            _ => None,
        }
    }
}
