//! A bank plus the IFT store of a mock chain.
use std::collections::{BTreeMap, BTreeSet};

use derive_more::Display;
use ift_primitives::{ClientId, HostError, ModuleEvent, Sequence, Signer, Timestamp};
use ift_transfer::config::IftModuleConfig;
use ift_transfer::context::{IftExecutionContext, IftValidationContext};
use ift_transfer::types::error::IftError;
use ift_transfer::types::{
    Amount, BridgeKey, BridgeRegistration, Coin, Denom, Memo, PendingTransfer, PendingTransferKey,
};
use subtle_encoding::bech32;

/// An account of a mock chain: any well-formed bech32 address.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct MockAccount(Signer);

impl MockAccount {
    pub fn signer(&self) -> &Signer {
        &self.0
    }
}

impl TryFrom<Signer> for MockAccount {
    type Error = IftError;

    fn try_from(signer: Signer) -> Result<Self, Self::Error> {
        bech32::decode(signer.as_str()).map_err(|_| IftError::InvalidAddress {
            address: signer.to_string(),
            reason: "not bech32".to_string(),
        })?;
        Ok(Self(signer))
    }
}

/// Bank balances, escrow accounts and every piece of IFT state of one chain.
#[derive(Clone, Debug)]
pub struct MockIftStore {
    config: IftModuleConfig,
    host_timestamp: Timestamp,
    native_denoms: BTreeSet<Denom>,
    send_enabled: bool,
    receive_enabled: bool,
    registrations: BTreeMap<BridgeKey, BridgeRegistration>,
    next_sequences: BTreeMap<BridgeKey, Sequence>,
    pending_transfers: BTreeMap<PendingTransferKey, PendingTransfer>,
    balances: BTreeMap<(Signer, Denom), Amount>,
    escrowed: BTreeMap<(ClientId, Denom), Amount>,
    supply: BTreeMap<Denom, Amount>,
    pub events: Vec<ModuleEvent>,
    pub logs: Vec<String>,
}

impl MockIftStore {
    pub fn new(
        config: IftModuleConfig,
        native_denoms: impl IntoIterator<Item = Denom>,
        host_timestamp: Timestamp,
    ) -> Self {
        Self {
            config,
            host_timestamp,
            native_denoms: native_denoms.into_iter().collect(),
            send_enabled: true,
            receive_enabled: true,
            registrations: BTreeMap::new(),
            next_sequences: BTreeMap::new(),
            pending_transfers: BTreeMap::new(),
            balances: BTreeMap::new(),
            escrowed: BTreeMap::new(),
            supply: BTreeMap::new(),
            events: Vec::new(),
            logs: Vec::new(),
        }
    }

    pub fn set_host_timestamp(&mut self, host_timestamp: Timestamp) {
        self.host_timestamp = host_timestamp;
    }

    pub fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled = enabled;
    }

    pub fn set_receive_enabled(&mut self, enabled: bool) {
        self.receive_enabled = enabled;
    }

    pub fn balance(&self, account: &Signer, denom: &Denom) -> Amount {
        self.balances
            .get(&(account.clone(), denom.clone()))
            .copied()
            .unwrap_or_default()
    }

    pub fn escrowed(&self, client_id: &ClientId, denom: &Denom) -> Amount {
        self.escrowed
            .get(&(client_id.clone(), denom.clone()))
            .copied()
            .unwrap_or_default()
    }

    pub fn total_supply(&self, denom: &Denom) -> Amount {
        self.supply.get(denom).copied().unwrap_or_default()
    }

    pub fn pending_transfer_count(&self) -> usize {
        self.pending_transfers.len()
    }

    /// Credits `account` out of thin air, the way genesis or a token factory
    /// would.
    pub fn fund(&mut self, account: &Signer, coin: &Coin) -> Result<(), IftError> {
        self.credit(account, coin)?;
        let supply = self.supply.entry(coin.denom.clone()).or_default();
        *supply = supply
            .checked_add(coin.amount)
            .ok_or(IftError::AmountOverflow)?;
        Ok(())
    }

    fn credit(&mut self, account: &Signer, coin: &Coin) -> Result<(), IftError> {
        let balance = self
            .balances
            .entry((account.clone(), coin.denom.clone()))
            .or_default();
        *balance = balance
            .checked_add(coin.amount)
            .ok_or(IftError::AmountOverflow)?;
        Ok(())
    }

    fn debit(&mut self, account: &Signer, coin: &Coin) -> Result<(), IftError> {
        let available = self.balance(account, &coin.denom);
        let remaining =
            available
                .checked_sub(coin.amount)
                .ok_or_else(|| IftError::InsufficientFunds {
                    send_attempt: coin.to_string(),
                    available_funds: Coin::new(coin.denom.clone(), available).to_string(),
                })?;
        self.balances
            .insert((account.clone(), coin.denom.clone()), remaining);
        Ok(())
    }

    fn check_balance(&self, account: &Signer, coin: &Coin) -> Result<(), IftError> {
        let available = self.balance(account, &coin.denom);
        if available < coin.amount {
            return Err(IftError::InsufficientFunds {
                send_attempt: coin.to_string(),
                available_funds: Coin::new(coin.denom.clone(), available).to_string(),
            });
        }
        Ok(())
    }

    fn check_escrow(&self, client_id: &ClientId, coin: &Coin) -> Result<(), IftError> {
        let escrowed = self.escrowed(client_id, &coin.denom);
        if escrowed < coin.amount {
            return Err(IftError::InsufficientFunds {
                send_attempt: coin.to_string(),
                available_funds: Coin::new(coin.denom.clone(), escrowed).to_string(),
            });
        }
        Ok(())
    }
}

impl IftValidationContext for MockIftStore {
    type AccountId = MockAccount;

    fn config(&self) -> &IftModuleConfig {
        &self.config
    }

    fn host_timestamp(&self) -> Result<Timestamp, IftError> {
        Ok(self.host_timestamp)
    }

    fn can_send_coins(&self) -> Result<(), IftError> {
        if self.send_enabled {
            Ok(())
        } else {
            Err(IftError::SendDisabled {
                reason: "sending is disabled on this chain".to_string(),
            })
        }
    }

    fn can_receive_coins(&self) -> Result<(), IftError> {
        if self.receive_enabled {
            Ok(())
        } else {
            Err(IftError::ReceiveDisabled {
                reason: "receiving is disabled on this chain".to_string(),
            })
        }
    }

    fn is_native_denom(&self, denom: &Denom) -> bool {
        self.native_denoms.contains(denom)
    }

    fn bridge_registration(
        &self,
        denom: &Denom,
        client_id: &ClientId,
    ) -> Result<Option<BridgeRegistration>, IftError> {
        let key = BridgeKey::new(denom.clone(), client_id.clone());
        Ok(self.registrations.get(&key).cloned())
    }

    fn next_sequence(&self, denom: &Denom, client_id: &ClientId) -> Result<Sequence, IftError> {
        let key = BridgeKey::new(denom.clone(), client_id.clone());
        Ok(self
            .next_sequences
            .get(&key)
            .copied()
            .unwrap_or_else(Sequence::first))
    }

    fn pending_transfer(
        &self,
        key: &PendingTransferKey,
    ) -> Result<Option<PendingTransfer>, IftError> {
        Ok(self.pending_transfers.get(key).cloned())
    }

    fn pending_transfers(
        &self,
        denom: &Denom,
        client_id: &ClientId,
    ) -> Result<Vec<PendingTransfer>, IftError> {
        Ok(self
            .pending_transfers
            .values()
            .filter(|pending| &pending.denom == denom && &pending.client_id == client_id)
            .cloned()
            .collect())
    }

    fn balance_of(&self, account: &Self::AccountId, denom: &Denom) -> Result<Amount, IftError> {
        Ok(self.balance(account.signer(), denom))
    }

    fn escrow_coins_validate(
        &self,
        from_account: &Self::AccountId,
        _client_id: &ClientId,
        coin: &Coin,
        _memo: &Memo,
    ) -> Result<(), IftError> {
        self.check_balance(from_account.signer(), coin)
    }

    fn unescrow_coins_validate(
        &self,
        _to_account: &Self::AccountId,
        client_id: &ClientId,
        coin: &Coin,
    ) -> Result<(), IftError> {
        self.check_escrow(client_id, coin)
    }

    fn mint_coins_validate(&self, account: &Self::AccountId, coin: &Coin) -> Result<(), IftError> {
        self.total_supply(&coin.denom)
            .checked_add(coin.amount)
            .ok_or(IftError::AmountOverflow)?;
        self.balance(account.signer(), &coin.denom)
            .checked_add(coin.amount)
            .ok_or(IftError::AmountOverflow)?;
        Ok(())
    }

    fn burn_coins_validate(
        &self,
        account: &Self::AccountId,
        coin: &Coin,
        _memo: &Memo,
    ) -> Result<(), IftError> {
        self.check_balance(account.signer(), coin)
    }
}

impl IftExecutionContext for MockIftStore {
    fn store_bridge_registration(
        &mut self,
        registration: BridgeRegistration,
    ) -> Result<(), IftError> {
        self.registrations.insert(registration.key(), registration);
        Ok(())
    }

    fn store_next_sequence(
        &mut self,
        denom: &Denom,
        client_id: &ClientId,
        sequence: Sequence,
    ) -> Result<(), IftError> {
        let key = BridgeKey::new(denom.clone(), client_id.clone());
        self.next_sequences.insert(key, sequence);
        Ok(())
    }

    fn store_pending_transfer(&mut self, pending: PendingTransfer) -> Result<(), IftError> {
        self.pending_transfers.insert(pending.key(), pending);
        Ok(())
    }

    fn delete_pending_transfer(&mut self, key: &PendingTransferKey) -> Result<(), IftError> {
        self.pending_transfers
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| HostError::missing_data(format!("pending transfer {key}")).into())
    }

    fn escrow_coins_execute(
        &mut self,
        from_account: &Self::AccountId,
        client_id: &ClientId,
        coin: &Coin,
        _memo: &Memo,
    ) -> Result<(), IftError> {
        self.debit(from_account.signer(), coin)?;
        let escrowed = self
            .escrowed
            .entry((client_id.clone(), coin.denom.clone()))
            .or_default();
        *escrowed = escrowed
            .checked_add(coin.amount)
            .ok_or(IftError::AmountOverflow)?;
        Ok(())
    }

    fn unescrow_coins_execute(
        &mut self,
        to_account: &Self::AccountId,
        client_id: &ClientId,
        coin: &Coin,
    ) -> Result<(), IftError> {
        self.check_escrow(client_id, coin)?;
        let escrowed = self
            .escrowed
            .entry((client_id.clone(), coin.denom.clone()))
            .or_default();
        *escrowed = escrowed
            .checked_sub(coin.amount)
            .ok_or(IftError::AmountOverflow)?;
        self.credit(to_account.signer(), coin)
    }

    fn mint_coins_execute(
        &mut self,
        account: &Self::AccountId,
        coin: &Coin,
    ) -> Result<(), IftError> {
        self.fund(account.signer(), coin)
    }

    fn burn_coins_execute(
        &mut self,
        account: &Self::AccountId,
        coin: &Coin,
        _memo: &Memo,
    ) -> Result<(), IftError> {
        self.debit(account.signer(), coin)?;
        let supply = self.supply.entry(coin.denom.clone()).or_default();
        *supply = supply
            .checked_sub(coin.amount)
            .ok_or(IftError::AmountOverflow)?;
        Ok(())
    }

    fn emit_event(&mut self, event: ModuleEvent) -> Result<(), IftError> {
        self.events.push(event);
        Ok(())
    }

    fn log_message(&mut self, message: String) -> Result<(), IftError> {
        self.logs.push(message);
        Ok(())
    }
}
