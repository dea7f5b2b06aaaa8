//! Defines the IFT transfer error type
use core::convert::Infallible;

use displaydoc::Display;
use ift_gmp_types::acknowledgement::StatusValue;
use ift_gmp_types::error::PacketError;
use ift_primitives::prelude::*;
use ift_primitives::{HostError, IdentifierError, Sequence};
use uint::FromDecStrErr;

#[derive(Display, Debug)]
pub enum IftError {
    /// host error: `{0}`
    Host(HostError),
    /// packet error: `{0}`
    Packet(PacketError),
    /// invalid identifier: `{0}`
    InvalidIdentifier(IdentifierError),
    /// no bridge registered for denom `{denom}` on client `{client_id}`
    BridgeNotRegistered { denom: String, client_id: String },
    /// a bridge for denom `{denom}` on client `{client_id}` is already registered
    BridgeAlreadyRegistered { denom: String, client_id: String },
    /// invalid receiver address `{receiver}`
    InvalidReceiverAddress { receiver: String },
    /// insufficient funds: tried to send `{send_attempt}`, sender only has `{available_funds}`
    InsufficientFunds {
        send_attempt: String,
        available_funds: String,
    },
    /// no pending transfer for denom `{denom}` on client `{client_id}` at sequence `{sequence}`
    PendingTransferNotFound {
        denom: String,
        client_id: String,
        sequence: Sequence,
    },
    /// signer `{signer}` is not the module authority `{expected}`
    Unauthorized { signer: String, expected: String },
    /// transfer amount must be positive
    ZeroAmount,
    /// denomination is empty
    EmptyDenom,
    /// invalid denomination `{denom}`
    InvalidDenom { denom: String },
    /// invalid amount error: `{0}`
    InvalidAmount(FromDecStrErr),
    /// invalid address `{address}`: `{reason}`
    InvalidAddress { address: String, reason: String },
    /// timeout timestamp `{timeout_timestamp}` must be after host time `{host_timestamp}`
    InvalidTimeout {
        timeout_timestamp: String,
        host_timestamp: String,
    },
    /// counterparty address is empty
    EmptyCounterpartyAddress,
    /// packet sent by `{actual}` but the bridge counterparty is `{expected}`
    CounterpartyMismatch { expected: String, actual: String },
    /// unknown send call constructor `{constructor}`
    UnknownSendCallConstructor { constructor: String },
    /// malformed native call: `{reason}`
    MalformedNativeCall { reason: String },
    /// native call does not match the transfer it travels with
    NativeCallMismatch,
    /// failed to deserialize packet data
    PacketDataDeserialization,
    /// failed to serialize packet data: `{reason}`
    PacketDataSerialization { reason: String },
    /// failed to deserialize acknowledgement
    AckDeserialization,
    /// sequence space exhausted for denom `{denom}` on client `{client_id}`
    SequenceOverflow { denom: String, client_id: String },
    /// arithmetic overflow while updating balances
    AmountOverflow,
    /// receive is not enabled
    ReceiveDisabled { reason: String },
    /// send is not enabled
    SendDisabled { reason: String },
    /// failed to parse as AccountId
    ParseAccountFailure,
    /// other error: `{0}`
    Other(String),
}

#[cfg(feature = "std")]
impl std::error::Error for IftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Host(e) => Some(e),
            Self::Packet(e) => Some(e),
            Self::InvalidIdentifier(e) => Some(e),
            Self::InvalidAmount(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Infallible> for IftError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}

impl From<HostError> for IftError {
    fn from(err: HostError) -> IftError {
        Self::Host(err)
    }
}

impl From<PacketError> for IftError {
    fn from(err: PacketError) -> IftError {
        Self::Packet(err)
    }
}

impl From<IdentifierError> for IftError {
    fn from(err: IdentifierError) -> IftError {
        Self::InvalidIdentifier(err)
    }
}

impl From<IftError> for StatusValue {
    fn from(err: IftError) -> Self {
        StatusValue::new(err.to_string()).expect("error message must not be empty")
    }
}
