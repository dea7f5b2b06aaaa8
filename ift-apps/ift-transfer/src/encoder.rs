//! Builds the counterparty-native mint instruction of a transfer.
//!
//! Each [`SendCallConstructor`] selects one [`PayloadEncoder`]. The encoders
//! only see the chain-neutral [`PacketData`] and produce an opaque
//! [`NativeCall`] that travels next to it.
use ift_primitives::prelude::*;
use ift_transfer_types::error::IftError;
use ift_transfer_types::msgs::MsgIftMint;
use ift_transfer_types::packet::PacketData;
use ift_transfer_types::{NativeCall, SendCallConstructor};
use sha2::{Digest, Sha256};
use subtle_encoding::hex;

/// Translates a chain-neutral transfer into an instruction the counterparty
/// chain executes natively.
pub trait PayloadEncoder {
    fn encode(&self, data: &PacketData) -> Result<NativeCall, IftError>;
}

/// Returns the encoder registered for `constructor`.
pub fn payload_encoder(constructor: SendCallConstructor) -> &'static dyn PayloadEncoder {
    match constructor {
        SendCallConstructor::Evm => &EvmEncoder,
        SendCallConstructor::Cosmos => &CosmosEncoder,
        SendCallConstructor::Solana => &SolanaEncoder,
    }
}

/// Builds the native call of `data` for a bridge using `constructor`.
pub fn encode_native_call(
    constructor: SendCallConstructor,
    data: &PacketData,
) -> Result<NativeCall, IftError> {
    payload_encoder(constructor).encode(data)
}

/// `bytes4(keccak256("mint(address,uint256)"))`
pub const EVM_MINT_SELECTOR: [u8; 4] = [0x40, 0xc1, 0x0f, 0x19];

const EVM_ADDRESS_LENGTH: usize = 20;
const EVM_WORD_LENGTH: usize = 32;

/// ABI-encodes `mint(receiver, amount)` for an ERC-20 style IFT contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct EvmEncoder;

impl EvmEncoder {
    fn parse_address(receiver: &str) -> Result<[u8; EVM_ADDRESS_LENGTH], IftError> {
        let invalid = || IftError::InvalidReceiverAddress {
            receiver: receiver.to_string(),
        };

        let stripped = receiver.strip_prefix("0x").ok_or_else(invalid)?;
        if stripped.len() != 2 * EVM_ADDRESS_LENGTH {
            return Err(invalid());
        }

        let bytes = hex::decode(stripped.to_ascii_lowercase().as_bytes()).map_err(|_| invalid())?;

        let mut address = [0u8; EVM_ADDRESS_LENGTH];
        address.copy_from_slice(&bytes);
        Ok(address)
    }
}

impl PayloadEncoder for EvmEncoder {
    fn encode(&self, data: &PacketData) -> Result<NativeCall, IftError> {
        let address = Self::parse_address(data.receiver.as_str())?;

        let mut call = Vec::with_capacity(EVM_MINT_SELECTOR.len() + 2 * EVM_WORD_LENGTH);
        call.extend_from_slice(&EVM_MINT_SELECTOR);
        // addresses are left-padded to a full word
        call.extend_from_slice(&[0u8; EVM_WORD_LENGTH - EVM_ADDRESS_LENGTH]);
        call.extend_from_slice(&address);
        call.extend_from_slice(&data.amount.to_be_bytes());

        Ok(NativeCall::new(call))
    }
}

/// JSON-encodes a `MsgIFTMint` for a Cosmos IFT module.
#[derive(Clone, Copy, Debug, Default)]
pub struct CosmosEncoder;

impl CosmosEncoder {
    /// Decodes a native call built by this encoder, the inverse of
    /// [`PayloadEncoder::encode`].
    pub fn decode(call: &NativeCall) -> Result<MsgIftMint, IftError> {
        MsgIftMint::decode(call.as_bytes())
    }
}

impl PayloadEncoder for CosmosEncoder {
    fn encode(&self, data: &PacketData) -> Result<NativeCall, IftError> {
        let msg = MsgIftMint::new(data.denom.clone(), data.receiver.clone(), data.amount);
        Ok(NativeCall::new(msg.encode()?))
    }
}

/// Encodes the `ift_mint` instruction of the Solana IFT program: the Anchor
/// discriminator followed by the borsh-encoded arguments.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolanaEncoder;

impl SolanaEncoder {
    pub const INSTRUCTION_NAME: &'static str = "ift_mint";

    /// First 8 bytes of `sha256("global:<instruction>")`.
    pub fn discriminator() -> [u8; 8] {
        let hash = Sha256::digest(format!("global:{}", Self::INSTRUCTION_NAME).as_bytes());
        let mut discriminator = [0u8; 8];
        discriminator.copy_from_slice(&hash[..8]);
        discriminator
    }
}

impl PayloadEncoder for SolanaEncoder {
    fn encode(&self, data: &PacketData) -> Result<NativeCall, IftError> {
        if data.receiver.is_empty() {
            return Err(IftError::InvalidReceiverAddress {
                receiver: data.receiver.to_string(),
            });
        }

        let args = (data.receiver.to_string(), data.amount.to_le_bytes());
        let encoded_args = borsh::to_vec(&args).map_err(|e| IftError::MalformedNativeCall {
            reason: e.to_string(),
        })?;

        let mut call = Self::discriminator().to_vec();
        call.extend(encoded_args);

        Ok(NativeCall::new(call))
    }
}
