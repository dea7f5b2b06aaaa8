//! Defines the governance message registering a bridge

use ift_primitives::prelude::*;
use ift_primitives::{ClientId, Signer};

use crate::error::IftError;
use crate::{BridgeRegistration, Denom, SendCallConstructor};

/// Registers the counterparty IFT contract that `denom` may be bridged to
/// over `client_id`. Only accepted from the module authority.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MsgRegisterBridge {
    pub authority: Signer,
    pub denom: Denom,
    pub client_id: ClientId,
    pub counterparty_address: String,
    pub send_call_constructor: SendCallConstructor,
}

impl MsgRegisterBridge {
    pub fn validate_basic(&self) -> Result<(), IftError> {
        if self.counterparty_address.trim().is_empty() {
            return Err(IftError::EmptyCounterpartyAddress);
        }
        Ok(())
    }

    pub fn registration(&self) -> BridgeRegistration {
        BridgeRegistration {
            denom: self.denom.clone(),
            client_id: self.client_id.clone(),
            counterparty_address: self.counterparty_address.clone(),
            send_call_constructor: self.send_call_constructor,
        }
    }
}
