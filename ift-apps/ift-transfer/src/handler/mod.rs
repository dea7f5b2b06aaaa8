//! Implements the processing logic of IFT messages and packets.
mod on_acknowledgement_packet;
mod on_recv_packet;
mod on_timeout_packet;
mod register_bridge;
mod send_transfer;

pub use on_acknowledgement_packet::*;
pub use on_recv_packet::*;
pub use on_timeout_packet::*;
pub use register_bridge::*;
pub use send_transfer::*;

use ift_gmp_types::packet::Packet;
use ift_primitives::prelude::*;
use ift_primitives::{ClientId, HostError, Sequence};
use ift_transfer_types::error::IftError;
use ift_transfer_types::packet::PacketData;
use ift_transfer_types::{Coin, Denom, PendingTransfer, PendingTransferKey};

use crate::context::{IftExecutionContext, IftValidationContext};

/// Returns the sequence the next transfer of `denom` over `client_id` gets,
/// failing if the sequence space is exhausted.
pub fn allocate_sequence_validate(
    ctx: &impl IftValidationContext,
    denom: &Denom,
    client_id: &ClientId,
) -> Result<Sequence, IftError> {
    let sequence = ctx.next_sequence(denom, client_id)?;

    sequence
        .checked_increment()
        .ok_or_else(|| IftError::SequenceOverflow {
            denom: denom.to_string(),
            client_id: client_id.to_string(),
        })?;

    Ok(sequence)
}

/// Hands out the next sequence of `denom` over `client_id` and advances the
/// counter. Sequences are never reused.
pub fn allocate_sequence_execute(
    ctx: &mut impl IftExecutionContext,
    denom: &Denom,
    client_id: &ClientId,
) -> Result<Sequence, IftError> {
    let sequence = allocate_sequence_validate(ctx, denom, client_id)?;

    let next = sequence
        .checked_increment()
        .ok_or_else(|| IftError::SequenceOverflow {
            denom: denom.to_string(),
            client_id: client_id.to_string(),
        })?;
    ctx.store_next_sequence(denom, client_id, next)?;

    Ok(sequence)
}

/// Key of the pending transfer an acknowledgement or a timeout of `packet`
/// resolves.
pub fn pending_transfer_key(packet: &Packet, data: &PacketData) -> PendingTransferKey {
    PendingTransferKey::new(
        data.denom.clone(),
        packet.client_id_on_a.clone(),
        packet.seq_on_a,
    )
}

/// Loads the pending transfer `packet` refers to.
///
/// A missing entry means the transfer was never initiated here or has
/// already been resolved; both are hard errors.
pub fn load_pending_transfer(
    ctx: &impl IftValidationContext,
    packet: &Packet,
    data: &PacketData,
) -> Result<PendingTransfer, IftError> {
    let key = pending_transfer_key(packet, data);

    let pending = ctx
        .pending_transfer(&key)?
        .ok_or_else(|| IftError::PendingTransferNotFound {
            denom: key.denom.to_string(),
            client_id: key.client_id.to_string(),
            sequence: key.sequence,
        })?;

    if pending.sender != data.sender || pending.amount != data.amount {
        return Err(HostError::invalid_data(format!(
            "pending transfer {key} does not match the packet it was sent with"
        ))
        .into());
    }

    Ok(pending)
}

pub fn refund_pending_transfer_validate(
    ctx: &impl IftValidationContext,
    pending: &PendingTransfer,
) -> Result<(), IftError> {
    let sender = pending
        .sender
        .clone()
        .try_into()
        .map_err(|_| HostError::FailedToParseData {
            description: "invalid signer".to_string(),
        })?;

    let coin = Coin::new(pending.denom.clone(), pending.amount);

    if ctx.is_native_denom(&pending.denom) {
        ctx.unescrow_coins_validate(&sender, &pending.client_id, &coin)
    } else {
        ctx.mint_coins_validate(&sender, &coin)
    }
}

/// Gives the tokens of `pending` back to its sender: unescrows them if this
/// chain issues the denomination, mints them back otherwise.
pub fn refund_pending_transfer_execute(
    ctx: &mut impl IftExecutionContext,
    pending: &PendingTransfer,
) -> Result<(), IftError> {
    let sender = pending
        .sender
        .clone()
        .try_into()
        .map_err(|_| HostError::FailedToParseData {
            description: "invalid signer".to_string(),
        })?;

    let coin = Coin::new(pending.denom.clone(), pending.amount);

    if ctx.is_native_denom(&pending.denom) {
        ctx.unescrow_coins_execute(&sender, &pending.client_id, &coin)
    } else {
        ctx.mint_coins_execute(&sender, &coin)
    }
}
