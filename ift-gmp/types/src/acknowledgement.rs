//! Acknowledgements written by the receiving application and relayed back to
//! the sender.
//!
//! On the wire an acknowledgement is opaque bytes. Applications that follow
//! the JSON convention encode it as `{"result":"<b64>"}` or
//! `{"error":"<reason>"}`, which is what [`AcknowledgementStatus`] models.

use core::fmt::{Display, Error as FmtError, Formatter};

use ift_primitives::prelude::*;

use crate::error::PacketError;

/// Raw acknowledgement bytes. Never empty.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Acknowledgement(Vec<u8>);

impl Acknowledgement {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<Vec<u8>> for Acknowledgement {
    type Error = PacketError;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        if bytes.is_empty() {
            return Err(PacketError::InvalidAcknowledgement);
        }
        Ok(Self(bytes))
    }
}

/// Outcome of processing a received packet, as reported to the sender.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AcknowledgementStatus {
    #[serde(rename = "result")]
    Success(StatusValue),
    #[serde(rename = "error")]
    Error(StatusValue),
}

impl AcknowledgementStatus {
    pub fn success(value: StatusValue) -> Self {
        Self::Success(value)
    }

    pub fn error(value: StatusValue) -> Self {
        Self::Error(value)
    }

    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    fn value(&self) -> &StatusValue {
        match self {
            Self::Success(value) | Self::Error(value) => value,
        }
    }
}

impl Display for AcknowledgementStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        Display::fmt(self.value(), f)
    }
}

impl TryFrom<&Acknowledgement> for AcknowledgementStatus {
    type Error = PacketError;

    fn try_from(ack: &Acknowledgement) -> Result<Self, PacketError> {
        serde_json::from_slice(ack.as_bytes()).map_err(|_| PacketError::InvalidAcknowledgement)
    }
}

impl From<AcknowledgementStatus> for Vec<u8> {
    fn from(status: AcknowledgementStatus) -> Self {
        // A `String` payload always serializes; the fallback keeps the
        // result non-empty regardless.
        serde_json::to_vec(&status).unwrap_or_else(|_| {
            let key = if status.is_successful() { "result" } else { "error" };
            format!(r#"{{"{key}":"unencodable"}}"#).into_bytes()
        })
    }
}

impl From<AcknowledgementStatus> for Acknowledgement {
    fn from(status: AcknowledgementStatus) -> Self {
        Self(status.into())
    }
}

/// Non-empty text carried by an [`AcknowledgementStatus`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatusValue(String);

impl StatusValue {
    pub fn new(value: impl ToString) -> Result<Self, PacketError> {
        let value = value.to_string();
        if value.is_empty() {
            return Err(PacketError::EmptyAcknowledgementStatus);
        }
        Ok(Self(value))
    }
}

impl TryFrom<String> for StatusValue {
    type Error = PacketError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StatusValue> for String {
    fn from(value: StatusValue) -> Self {
        value.0
    }
}

impl Display for StatusValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        f.write_str(&self.0)
    }
}
