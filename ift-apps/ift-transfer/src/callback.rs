//! Routing of GMP acknowledgements and timeouts to the IFT handlers.
//!
//! The transport hands every acknowledgement and timeout of a client to the
//! callback handler registered for it, whichever application sent the
//! packet. IFT only acts on packets it sent itself, recognised by the GMP
//! `sender` being the IFT module account. Everything else is ignored without
//! error so that co-located applications are never blocked.
use ift_gmp_types::acknowledgement::Acknowledgement;
use ift_gmp_types::packet::Packet;
use ift_primitives::{ModuleExtras, Signer};
use ift_transfer_types::error::IftError;
use ift_transfer_types::TransferOutcome;
use tracing::debug;

use crate::context::IftExecutionContext;
use crate::module::{
    on_acknowledgement_packet_execute, on_acknowledgement_packet_validate,
    on_timeout_packet_execute, on_timeout_packet_validate,
};

/// What the transport is reporting about a packet sent from this chain.
#[derive(Clone, Copy, Debug)]
pub enum PacketCallback<'a> {
    Acknowledgement(&'a Acknowledgement),
    Timeout,
}

/// Result of a dispatched callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// The packet was sent by IFT and its pending transfer got resolved.
    Handled(TransferOutcome),
    /// The packet belongs to another application; nothing was done.
    Ignored,
}

impl CallbackOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, Self::Handled(_))
    }
}

/// Returns true if `packet` was sent by the application whose account is
/// `module_address`.
pub fn is_sent_by(module_address: &Signer, packet: &Packet) -> bool {
    packet
        .gmp_data()
        .map(|gmp_data| &gmp_data.sender == module_address)
        .unwrap_or(false)
}

/// Filters out foreign packets, then runs the acknowledgement or timeout
/// handler: validation first, execution only if validation succeeded.
///
/// Errors of IFT packets are returned as is; in particular an already
/// resolved transfer yields [`IftError::PendingTransferNotFound`].
pub fn dispatch_packet_callback<Ctx>(
    ctx: &mut Ctx,
    module_address: &Signer,
    packet: &Packet,
    callback: PacketCallback<'_>,
    relayer: &Signer,
) -> Result<(ModuleExtras, CallbackOutcome), IftError>
where
    Ctx: IftExecutionContext,
{
    if !is_sent_by(module_address, packet) {
        debug!(packet = %packet, "ignoring callback of a foreign gmp packet");
        return Ok((ModuleExtras::empty(), CallbackOutcome::Ignored));
    }

    let (extras, result) = match callback {
        PacketCallback::Acknowledgement(acknowledgement) => {
            on_acknowledgement_packet_validate(ctx, packet, acknowledgement, relayer)?;
            on_acknowledgement_packet_execute(ctx, packet, acknowledgement, relayer)
        }
        PacketCallback::Timeout => {
            on_timeout_packet_validate(ctx, packet, relayer)?;
            on_timeout_packet_execute(ctx, packet, relayer)
        }
    };

    let outcome = result?;

    Ok((extras, CallbackOutcome::Handled(outcome)))
}
