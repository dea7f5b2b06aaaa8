//! Defines the packet error type
use displaydoc::Display;
use ift_primitives::prelude::*;
use ift_primitives::{ClientId, Sequence, Timestamp};

#[derive(Debug, Display, PartialEq, Eq)]
pub enum PacketError {
    /// empty acknowledgement status not allowed
    EmptyAcknowledgementStatus,
    /// invalid acknowledgement
    InvalidAcknowledgement,
    /// empty packet data not allowed
    EmptyPacketData,
    /// packet `{sequence}` on client `{client_id}` timed out at `{timeout_timestamp}`, host time is `{host_timestamp}`
    PacketTimedOut {
        client_id: ClientId,
        sequence: Sequence,
        timeout_timestamp: Timestamp,
        host_timestamp: Timestamp,
    },
    /// packet `{sequence}` on client `{client_id}` has not timed out yet, timeout is `{timeout_timestamp}`, host time is `{host_timestamp}`
    PacketNotTimedOut {
        client_id: ClientId,
        sequence: Sequence,
        timeout_timestamp: Timestamp,
        host_timestamp: Timestamp,
    },
    /// failed to decode GMP packet data: `{description}`
    InvalidGmpPacketData { description: String },
}

#[cfg(feature = "std")]
impl std::error::Error for PacketError {}
