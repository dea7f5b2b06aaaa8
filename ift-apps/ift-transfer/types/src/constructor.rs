//! Selector of the counterparty-native instruction format.
use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use ift_primitives::prelude::*;
use subtle_encoding::hex;

use crate::error::IftError;

/// Describes how the mint instruction executed on the counterparty chain is
/// built from a chain-neutral transfer. Chosen once, when the bridge is
/// registered.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SendCallConstructor {
    /// ABI-encoded call to an ERC-20 style `mint(address,uint256)`.
    Evm,
    /// JSON-encoded `MsgIFTMint` executed by the counterparty IFT module.
    Cosmos,
    /// Anchor instruction data for the counterparty IFT program.
    Solana,
}

impl SendCallConstructor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Evm => "evm",
            Self::Cosmos => "cosmos",
            Self::Solana => "solana",
        }
    }
}

impl Display for SendCallConstructor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SendCallConstructor {
    type Err = IftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "evm" => Ok(Self::Evm),
            "cosmos" => Ok(Self::Cosmos),
            "solana" => Ok(Self::Solana),
            _ => Err(IftError::UnknownSendCallConstructor {
                constructor: s.to_string(),
            }),
        }
    }
}

/// A counterparty-native instruction, opaque to the sending chain.
///
/// Travels hex-encoded inside the packet payload.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NativeCall(Vec<u8>);

impl NativeCall {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        String::from_utf8(hex::encode(&self.0)).unwrap_or_default()
    }
}

impl Display for NativeCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.to_hex())
    }
}

impl TryFrom<String> for NativeCall {
    type Error = IftError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        hex::decode(value.as_bytes())
            .map(Self)
            .map_err(|_| IftError::MalformedNativeCall {
                reason: "native call is not hex encoded".to_string(),
            })
    }
}

impl From<NativeCall> for String {
    fn from(call: NativeCall) -> Self {
        call.to_hex()
    }
}
