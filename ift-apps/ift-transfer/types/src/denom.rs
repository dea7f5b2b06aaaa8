//! Defines the denomination and memo types carried by IFT transfers.
use core::str::FromStr;

use derive_more::{Display, From};
use ift_primitives::prelude::*;

use super::error::IftError;

/// A token denomination as registered with the bridge.
///
/// IFT does not prefix denominations with the path they travelled: a bridged
/// token keeps the same denomination on every chain it is registered on, and
/// each chain's registration decides whether it is minted or escrowed there.
/// Denominations may still contain `/`, e.g. `factory/cosmos1.../uift`.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(
    Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Display, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Denom(String);

impl Denom {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Denom {
    type Err = IftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for Denom {
    type Error = IftError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.trim().is_empty() {
            return Err(IftError::EmptyDenom);
        }
        if s.chars().any(char::is_whitespace) || s.starts_with('/') || s.ends_with('/') {
            return Err(IftError::InvalidDenom { denom: s });
        }
        Ok(Self(s))
    }
}

impl From<Denom> for String {
    fn from(denom: Denom) -> Self {
        denom.0
    }
}

/// Represents the token transfer memo
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    From,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Memo(String);

impl AsRef<str> for Memo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Memo {
    fn from(memo: &str) -> Self {
        Self(memo.to_owned())
    }
}
