use ift_gmp_types::acknowledgement::AcknowledgementStatus;
use ift_gmp_types::packet::Packet;
use ift_transfer_types::error::IftError;
use ift_transfer_types::packet::PacketData;
use ift_transfer_types::{PendingTransfer, TransferOutcome};
use tracing::info;

use super::{load_pending_transfer, refund_pending_transfer_execute, refund_pending_transfer_validate};
use crate::context::{IftExecutionContext, IftValidationContext};

/// Checks that the acknowledgement of `packet` resolves a live pending
/// transfer and, for an error acknowledgement, that its refund would succeed.
pub fn process_ack_packet_validate<Ctx: IftValidationContext>(
    ctx_a: &Ctx,
    packet: &Packet,
    data: &PacketData,
    acknowledgement: &AcknowledgementStatus,
) -> Result<PendingTransfer, IftError> {
    let pending = load_pending_transfer(ctx_a, packet, data)?;

    if !acknowledgement.is_successful() {
        refund_pending_transfer_validate(ctx_a, &pending)?;
    }

    Ok(pending)
}

/// Resolves the pending transfer of `packet`.
///
/// A successful acknowledgement settles it: the tokens stay burned or
/// escrowed. An error acknowledgement refunds the sender. Either way the
/// entry is deleted, so a second acknowledgement for the same sequence fails
/// with [`IftError::PendingTransferNotFound`].
pub fn process_ack_packet_execute<Ctx: IftExecutionContext>(
    ctx_a: &mut Ctx,
    packet: &Packet,
    data: &PacketData,
    acknowledgement: &AcknowledgementStatus,
) -> Result<TransferOutcome, IftError> {
    let pending = load_pending_transfer(ctx_a, packet, data)?;

    let outcome = if acknowledgement.is_successful() {
        TransferOutcome::Settled
    } else {
        refund_pending_transfer_execute(ctx_a, &pending)?;
        TransferOutcome::Refunded
    };

    ctx_a.delete_pending_transfer(&pending.key())?;

    info!(
        key = %pending.key(),
        %outcome,
        ack = %acknowledgement,
        "ift transfer acknowledged"
    );

    Ok(outcome)
}
