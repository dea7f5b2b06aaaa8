//! Static configuration of the IFT module on a host chain.
use ift_primitives::prelude::*;
use ift_primitives::{ModuleId, Signer};
use ift_transfer_types::{module_account, MODULE_ID_STR};

/// Identity of the IFT module, built once when the host initialises the
/// application.
///
/// The module address is derived here and nowhere else. It is the `sender`
/// of every GMP packet the module emits, so the callback dispatcher compares
/// against it to tell IFT packets apart from those of other applications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IftModuleConfig {
    module_id: ModuleId,
    address_prefix: String,
    authority: Signer,
    module_address: Signer,
}

impl IftModuleConfig {
    pub fn new(module_id: ModuleId, address_prefix: impl Into<String>, authority: Signer) -> Self {
        let address_prefix = address_prefix.into();
        let module_address = module_account(module_id.as_str(), &address_prefix);

        Self {
            module_id,
            address_prefix,
            authority,
            module_address,
        }
    }

    /// Configuration of a module registered under the default `ift` name.
    pub fn with_default_module(address_prefix: impl Into<String>, authority: Signer) -> Self {
        Self::new(ModuleId::new(MODULE_ID_STR), address_prefix, authority)
    }

    pub fn module_id(&self) -> &ModuleId {
        &self.module_id
    }

    /// Bech32 human readable part of accounts on this chain.
    pub fn address_prefix(&self) -> &str {
        &self.address_prefix
    }

    /// The only account allowed to register bridges.
    pub fn authority(&self) -> &Signer {
        &self.authority
    }

    pub fn module_address(&self) -> &Signer {
        &self.module_address
    }
}
