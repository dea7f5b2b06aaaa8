use ift_gmp_types::gmp::GmpPacketData;
use ift_gmp_types::packet::OutboundPacket;
use ift_primitives::prelude::*;
use ift_primitives::{HostError, ModuleEvent, Sequence};
use ift_transfer_types::error::IftError;
use ift_transfer_types::events::TransferEvent;
use ift_transfer_types::msgs::MsgTransfer;
use ift_transfer_types::packet::PacketData;
use ift_transfer_types::{
    BridgeRegistration, Coin, NativeCall, PendingTransfer, PendingTransferKey,
};
use tracing::{debug, info};

use super::{allocate_sequence_execute, allocate_sequence_validate};
use crate::context::{
    IftExecutionContext, IftValidationContext, SendPacketExecutionContext,
    SendPacketValidationContext,
};
use crate::encoder::encode_native_call;

/// Initiate an IFT transfer. Equivalent to calling [`send_transfer_validate`],
/// followed by [`send_transfer_execute`].
///
/// Returns the sequence allocated to the transfer.
pub fn send_transfer<SendPacketCtx, IftCtx>(
    send_packet_ctx_a: &mut SendPacketCtx,
    ift_ctx_a: &mut IftCtx,
    msg: MsgTransfer,
) -> Result<Sequence, IftError>
where
    SendPacketCtx: SendPacketExecutionContext,
    IftCtx: IftExecutionContext,
{
    send_transfer_validate(send_packet_ctx_a, ift_ctx_a, &msg)?;
    send_transfer_execute(send_packet_ctx_a, ift_ctx_a, msg)
}

/// Validates the transfer. If this succeeds, then it is legal to initiate the
/// transfer with [`send_transfer_execute`].
pub fn send_transfer_validate<SendPacketCtx, IftCtx>(
    send_packet_ctx_a: &SendPacketCtx,
    ift_ctx_a: &IftCtx,
    msg: &MsgTransfer,
) -> Result<(), IftError>
where
    SendPacketCtx: SendPacketValidationContext,
    IftCtx: IftValidationContext,
{
    msg.validate_basic()?;

    ift_ctx_a.can_send_coins()?;

    msg.validate_timeout(&ift_ctx_a.host_timestamp()?)?;

    let registration = registered_bridge(ift_ctx_a, msg)?;

    send_packet_ctx_a.counterparty_client(&msg.client_id)?;

    let sender: IftCtx::AccountId = msg
        .sender
        .clone()
        .try_into()
        .map_err(|_| IftError::ParseAccountFailure)?;

    let available_funds = ift_ctx_a.balance_of(&sender, &msg.denom)?;
    if available_funds < msg.amount {
        return Err(IftError::InsufficientFunds {
            send_attempt: Coin::new(msg.denom.clone(), msg.amount).to_string(),
            available_funds: Coin::new(msg.denom.clone(), available_funds).to_string(),
        });
    }

    let coin = Coin::new(msg.denom.clone(), msg.amount);

    if ift_ctx_a.is_native_denom(&msg.denom) {
        ift_ctx_a.escrow_coins_validate(&sender, &msg.client_id, &coin, &msg.memo)?;
    } else {
        ift_ctx_a.burn_coins_validate(&sender, &coin, &msg.memo)?;
    }

    let sequence = allocate_sequence_validate(ift_ctx_a, &msg.denom, &msg.client_id)?;

    let key = PendingTransferKey::new(msg.denom.clone(), msg.client_id.clone(), sequence);
    if ift_ctx_a.pending_transfer(&key)?.is_some() {
        return Err(HostError::invalid_data(format!(
            "pending transfer {key} already exists"
        ))
        .into());
    }

    let packet = build_outbound_packet(ift_ctx_a, &registration, msg, sequence)?;

    send_packet_ctx_a.send_packet_validate(&packet)?;

    debug!(%key, "ift transfer validated");

    Ok(())
}

/// Executes the transfer. A prior call to [`send_transfer_validate`] MUST have
/// succeeded.
pub fn send_transfer_execute<SendPacketCtx, IftCtx>(
    send_packet_ctx_a: &mut SendPacketCtx,
    ift_ctx_a: &mut IftCtx,
    msg: MsgTransfer,
) -> Result<Sequence, IftError>
where
    SendPacketCtx: SendPacketExecutionContext,
    IftCtx: IftExecutionContext,
{
    let registration = registered_bridge(ift_ctx_a, &msg)?;

    let sender = msg
        .sender
        .clone()
        .try_into()
        .map_err(|_| IftError::ParseAccountFailure)?;

    let coin = Coin::new(msg.denom.clone(), msg.amount);

    // tokens leave the sender before the packet exists
    if ift_ctx_a.is_native_denom(&msg.denom) {
        ift_ctx_a.escrow_coins_execute(&sender, &msg.client_id, &coin, &msg.memo)?;
    } else {
        ift_ctx_a.burn_coins_execute(&sender, &coin, &msg.memo)?;
    }

    let sequence = allocate_sequence_execute(ift_ctx_a, &msg.denom, &msg.client_id)?;

    let pending = PendingTransfer {
        denom: msg.denom.clone(),
        client_id: msg.client_id.clone(),
        sequence,
        sender: msg.sender.clone(),
        amount: msg.amount,
        timeout_timestamp: msg.timeout_timestamp,
        created_at: ift_ctx_a.host_timestamp()?,
    };
    ift_ctx_a.store_pending_transfer(pending)?;

    let packet = build_outbound_packet(ift_ctx_a, &registration, &msg, sequence)?;

    send_packet_ctx_a.send_packet_execute(packet)?;

    {
        info!(
            denom = %msg.denom,
            client_id = %msg.client_id,
            %sequence,
            amount = %msg.amount,
            "ift transfer initiated"
        );

        ift_ctx_a.log_message(format!(
            "IFT transfer: {} --({})--> {} over {} at sequence {}",
            msg.sender, coin, msg.receiver, msg.client_id, sequence
        ))?;

        let transfer_event = TransferEvent {
            sender: msg.sender,
            receiver: msg.receiver,
            amount: msg.amount,
            denom: msg.denom,
            client_id: msg.client_id,
            sequence,
            memo: msg.memo,
        };
        ift_ctx_a.emit_event(ModuleEvent::from(transfer_event))?;
    }

    Ok(sequence)
}

fn registered_bridge<IftCtx>(
    ift_ctx_a: &IftCtx,
    msg: &MsgTransfer,
) -> Result<BridgeRegistration, IftError>
where
    IftCtx: IftValidationContext,
{
    ift_ctx_a
        .bridge_registration(&msg.denom, &msg.client_id)?
        .ok_or_else(|| IftError::BridgeNotRegistered {
            denom: msg.denom.to_string(),
            client_id: msg.client_id.to_string(),
        })
}

/// Builds the GMP packet carrying `msg`: the chain-neutral payload plus the
/// native call of the registered send-call constructor, addressed from the
/// IFT module account to the counterparty IFT contract.
fn build_outbound_packet<IftCtx>(
    ift_ctx_a: &IftCtx,
    registration: &BridgeRegistration,
    msg: &MsgTransfer,
    sequence: Sequence,
) -> Result<OutboundPacket, IftError>
where
    IftCtx: IftValidationContext,
{
    let mut data = PacketData {
        denom: msg.denom.clone(),
        amount: msg.amount,
        sender: msg.sender.clone(),
        receiver: msg.receiver.clone(),
        memo: msg.memo.clone(),
        call: NativeCall::default(),
    };
    data.call = encode_native_call(registration.send_call_constructor, &data)?;

    let gmp_data = GmpPacketData {
        sender: ift_ctx_a.config().module_address().clone(),
        receiver: registration.counterparty_address.clone(),
        salt: Vec::new(),
        payload: data.encode()?,
        memo: String::new(),
    };

    Ok(OutboundPacket {
        seq_on_a: sequence,
        client_id_on_a: msg.client_id.clone(),
        timeout_timestamp_on_b: msg.timeout_timestamp,
        data: gmp_data,
    })
}
