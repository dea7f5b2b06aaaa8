//! GMP application callbacks of the IFT module.
use ift_gmp_types::acknowledgement::{Acknowledgement, AcknowledgementStatus};
use ift_gmp_types::gmp::GmpPacketData;
use ift_gmp_types::packet::Packet;
use ift_primitives::prelude::*;
use ift_primitives::{ModuleExtras, Signer};
use ift_transfer_types::ack_success_b64;
use ift_transfer_types::error::IftError;
use ift_transfer_types::events::{AckEvent, RecvEvent, TimeoutEvent};
use ift_transfer_types::packet::PacketData;
use ift_transfer_types::TransferOutcome;
use tracing::warn;

use crate::context::{IftExecutionContext, IftValidationContext};
use crate::handler::{
    process_ack_packet_execute, process_ack_packet_validate, process_recv_packet_execute,
    process_timeout_packet_execute, process_timeout_packet_validate,
};

fn decode_packet(packet: &Packet) -> Result<(GmpPacketData, PacketData), IftError> {
    let gmp_data = packet
        .gmp_data()
        .map_err(|_| IftError::PacketDataDeserialization)?;
    let data = PacketData::decode(&gmp_data.payload)?;
    Ok((gmp_data, data))
}

/// Processes an inbound transfer. Never fails: any error becomes an error
/// acknowledgement, which the transport relays back to the source chain so
/// that it refunds the sender.
pub fn on_recv_packet_execute(
    ctx_b: &mut impl IftExecutionContext,
    packet: &Packet,
) -> (ModuleExtras, Acknowledgement) {
    let Ok((gmp_data, data)) = decode_packet(packet) else {
        let ack = AcknowledgementStatus::error(IftError::PacketDataDeserialization.into());
        return (ModuleExtras::empty(), ack.into());
    };

    let (mut extras, ack) = match process_recv_packet_execute(ctx_b, packet, &gmp_data, &data) {
        Ok(extras) => (extras, AcknowledgementStatus::success(ack_success_b64())),
        Err((extras, error)) => {
            warn!(packet = %packet, %error, "ift packet rejected");
            (extras, AcknowledgementStatus::error(error.into()))
        }
    };

    let recv_event = RecvEvent {
        sender: data.sender,
        receiver: data.receiver,
        denom: data.denom,
        amount: data.amount,
        memo: data.memo,
        success: ack.is_successful(),
    };
    extras.events.push(recv_event.into());

    (extras, ack.into())
}

pub fn on_acknowledgement_packet_validate<Ctx>(
    ctx: &Ctx,
    packet: &Packet,
    acknowledgement: &Acknowledgement,
    _relayer: &Signer,
) -> Result<(), IftError>
where
    Ctx: IftValidationContext,
{
    let (_, data) = decode_packet(packet)?;

    let acknowledgement = AcknowledgementStatus::try_from(acknowledgement)
        .map_err(|_| IftError::AckDeserialization)?;

    process_ack_packet_validate(ctx, packet, &data, &acknowledgement)?;

    Ok(())
}

pub fn on_acknowledgement_packet_execute(
    ctx: &mut impl IftExecutionContext,
    packet: &Packet,
    acknowledgement: &Acknowledgement,
    _relayer: &Signer,
) -> (ModuleExtras, Result<TransferOutcome, IftError>) {
    let Ok((_, data)) = decode_packet(packet) else {
        return (
            ModuleExtras::empty(),
            Err(IftError::PacketDataDeserialization),
        );
    };

    let Ok(acknowledgement) = AcknowledgementStatus::try_from(acknowledgement) else {
        return (ModuleExtras::empty(), Err(IftError::AckDeserialization));
    };

    let outcome = match process_ack_packet_execute(ctx, packet, &data, &acknowledgement) {
        Ok(outcome) => outcome,
        Err(err) => return (ModuleExtras::empty(), Err(err)),
    };

    let ack_event = AckEvent {
        sender: data.sender,
        receiver: data.receiver,
        denom: data.denom,
        amount: data.amount,
        sequence: packet.seq_on_a,
        outcome,
        acknowledgement,
    };

    let extras = ModuleExtras {
        events: vec![ack_event.into()],
        log: Vec::new(),
    };

    (extras, Ok(outcome))
}

pub fn on_timeout_packet_validate<Ctx>(
    ctx: &Ctx,
    packet: &Packet,
    _relayer: &Signer,
) -> Result<(), IftError>
where
    Ctx: IftValidationContext,
{
    let (_, data) = decode_packet(packet)?;

    process_timeout_packet_validate(ctx, packet, &data)?;

    Ok(())
}

pub fn on_timeout_packet_execute(
    ctx: &mut impl IftExecutionContext,
    packet: &Packet,
    _relayer: &Signer,
) -> (ModuleExtras, Result<TransferOutcome, IftError>) {
    let Ok((_, data)) = decode_packet(packet) else {
        return (
            ModuleExtras::empty(),
            Err(IftError::PacketDataDeserialization),
        );
    };

    let outcome = match process_timeout_packet_execute(ctx, packet, &data) {
        Ok(outcome) => outcome,
        Err(err) => return (ModuleExtras::empty(), Err(err)),
    };

    let timeout_event = TimeoutEvent {
        refund_receiver: data.sender,
        refund_denom: data.denom,
        refund_amount: data.amount,
        sequence: packet.seq_on_a,
    };

    let extras = ModuleExtras {
        events: vec![timeout_event.into()],
        log: Vec::new(),
    };

    (extras, Ok(outcome))
}
