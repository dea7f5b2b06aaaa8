use ift_gmp_types::packet::Packet;
use ift_transfer_types::error::IftError;
use ift_transfer_types::packet::PacketData;
use ift_transfer_types::{PendingTransfer, TransferOutcome};
use tracing::info;

use super::{load_pending_transfer, refund_pending_transfer_execute, refund_pending_transfer_validate};
use crate::context::{IftExecutionContext, IftValidationContext};

/// Checks that `packet` still has a live pending transfer to refund.
///
/// Whether the packet really expired unreceived is for the transport to
/// prove; it only delivers a timeout once it has.
pub fn process_timeout_packet_validate<Ctx: IftValidationContext>(
    ctx_a: &Ctx,
    packet: &Packet,
    data: &PacketData,
) -> Result<PendingTransfer, IftError> {
    let pending = load_pending_transfer(ctx_a, packet, data)?;

    refund_pending_transfer_validate(ctx_a, &pending)?;

    Ok(pending)
}

/// Refunds the sender of the timed out transfer and deletes its pending
/// entry.
pub fn process_timeout_packet_execute<Ctx: IftExecutionContext>(
    ctx_a: &mut Ctx,
    packet: &Packet,
    data: &PacketData,
) -> Result<TransferOutcome, IftError> {
    let pending = load_pending_transfer(ctx_a, packet, data)?;

    refund_pending_transfer_execute(ctx_a, &pending)?;

    ctx_a.delete_pending_transfer(&pending.key())?;

    info!(key = %pending.key(), "ift transfer timed out, sender refunded");

    Ok(TransferOutcome::Refunded)
}
