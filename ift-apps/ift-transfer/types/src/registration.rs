//! Bridge registrations: which counterparty a token may travel to.
use ift_primitives::prelude::*;
use ift_primitives::ClientId;

use crate::{Denom, SendCallConstructor};

/// Authorizes `denom` to move over the GMP client `client_id` to the IFT
/// contract living at `counterparty_address` on the other chain.
///
/// At most one registration exists per `(denom, client_id)` pair.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BridgeRegistration {
    pub denom: Denom,
    pub client_id: ClientId,
    /// Address of the IFT contract/module on the counterparty chain, in that
    /// chain's native format. Opaque to this chain.
    pub counterparty_address: String,
    pub send_call_constructor: SendCallConstructor,
}

impl BridgeRegistration {
    pub fn key(&self) -> BridgeKey {
        BridgeKey::new(self.denom.clone(), self.client_id.clone())
    }
}

/// Lookup key of a [`BridgeRegistration`].
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BridgeKey {
    pub denom: Denom,
    pub client_id: ClientId,
}

impl BridgeKey {
    pub fn new(denom: Denom, client_id: ClientId) -> Self {
        Self { denom, client_id }
    }
}
