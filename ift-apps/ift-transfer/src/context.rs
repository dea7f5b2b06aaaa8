//! Defines the main context traits of the IFT application and the GMP
//! transport boundary it sends packets through

use ift_gmp_types::packet::OutboundPacket;
use ift_primitives::prelude::*;
use ift_primitives::{ClientId, ModuleEvent, Sequence, Signer, Timestamp};
use ift_transfer_types::error::IftError;
use ift_transfer_types::{
    Amount, BridgeRegistration, Coin, Denom, Memo, PendingTransfer, PendingTransferKey,
};

use crate::config::IftModuleConfig;

/// Methods required in IFT validation, to be implemented by the host
pub trait IftValidationContext {
    type AccountId: TryFrom<Signer>;

    /// Identity of the IFT module on this host.
    fn config(&self) -> &IftModuleConfig;

    /// Timestamp of the block being executed.
    fn host_timestamp(&self) -> Result<Timestamp, IftError>;

    /// Returns Ok() if the host chain supports sending coins.
    fn can_send_coins(&self) -> Result<(), IftError>;

    /// Returns Ok() if the host chain supports receiving coins.
    fn can_receive_coins(&self) -> Result<(), IftError>;

    /// Whether `denom` is issued by this chain. Native tokens are escrowed
    /// when they leave and unescrowed when they come back; every other
    /// denomination is burned and minted.
    fn is_native_denom(&self, denom: &Denom) -> bool;

    fn bridge_registration(
        &self,
        denom: &Denom,
        client_id: &ClientId,
    ) -> Result<Option<BridgeRegistration>, IftError>;

    /// The sequence the next transfer of `denom` over `client_id` gets.
    /// [`Sequence::first`] until a transfer is initiated.
    fn next_sequence(&self, denom: &Denom, client_id: &ClientId) -> Result<Sequence, IftError>;

    fn pending_transfer(
        &self,
        key: &PendingTransferKey,
    ) -> Result<Option<PendingTransfer>, IftError>;

    /// All live pending transfers of `denom` over `client_id`, in sequence
    /// order.
    fn pending_transfers(
        &self,
        denom: &Denom,
        client_id: &ClientId,
    ) -> Result<Vec<PendingTransfer>, IftError>;

    fn balance_of(&self, account: &Self::AccountId, denom: &Denom) -> Result<Amount, IftError>;

    /// Validates that the tokens can be escrowed successfully
    fn escrow_coins_validate(
        &self,
        from_account: &Self::AccountId,
        client_id: &ClientId,
        coin: &Coin,
        memo: &Memo,
    ) -> Result<(), IftError>;

    /// Validates that the tokens can be unescrowed successfully
    fn unescrow_coins_validate(
        &self,
        to_account: &Self::AccountId,
        client_id: &ClientId,
        coin: &Coin,
    ) -> Result<(), IftError>;

    /// Validates the receiver account and the coin input
    fn mint_coins_validate(&self, account: &Self::AccountId, coin: &Coin) -> Result<(), IftError>;

    /// Validates the sender account and the coin input
    fn burn_coins_validate(
        &self,
        account: &Self::AccountId,
        coin: &Coin,
        memo: &Memo,
    ) -> Result<(), IftError>;
}

/// Methods required in IFT execution, to be implemented by the host
pub trait IftExecutionContext: IftValidationContext {
    fn store_bridge_registration(
        &mut self,
        registration: BridgeRegistration,
    ) -> Result<(), IftError>;

    fn store_next_sequence(
        &mut self,
        denom: &Denom,
        client_id: &ClientId,
        sequence: Sequence,
    ) -> Result<(), IftError>;

    fn store_pending_transfer(&mut self, pending: PendingTransfer) -> Result<(), IftError>;

    fn delete_pending_transfer(&mut self, key: &PendingTransferKey) -> Result<(), IftError>;

    /// Escrows the tokens
    fn escrow_coins_execute(
        &mut self,
        from_account: &Self::AccountId,
        client_id: &ClientId,
        coin: &Coin,
        memo: &Memo,
    ) -> Result<(), IftError>;

    /// Unescrows the tokens
    fn unescrow_coins_execute(
        &mut self,
        to_account: &Self::AccountId,
        client_id: &ClientId,
        coin: &Coin,
    ) -> Result<(), IftError>;

    /// Mints tokens to a user account
    fn mint_coins_execute(&mut self, account: &Self::AccountId, coin: &Coin)
        -> Result<(), IftError>;

    /// Burns tokens from a user account
    fn burn_coins_execute(
        &mut self,
        account: &Self::AccountId,
        coin: &Coin,
        memo: &Memo,
    ) -> Result<(), IftError>;

    fn emit_event(&mut self, event: ModuleEvent) -> Result<(), IftError>;

    fn log_message(&mut self, message: String) -> Result<(), IftError>;
}

/// Read side of the GMP transport, as seen by an application sending a
/// packet.
pub trait SendPacketValidationContext {
    /// Returns the client the counterparty uses to track this chain, or an
    /// error if `client_id` is unknown to the transport.
    fn counterparty_client(&self, client_id: &ClientId) -> Result<ClientId, IftError>;

    /// Checks that the transport would accept `packet`.
    fn send_packet_validate(&self, packet: &OutboundPacket) -> Result<(), IftError>;
}

/// Write side of the GMP transport.
pub trait SendPacketExecutionContext: SendPacketValidationContext {
    /// Commits to `packet` so that it can be relayed.
    fn send_packet_execute(&mut self, packet: OutboundPacket) -> Result<(), IftError>;
}
