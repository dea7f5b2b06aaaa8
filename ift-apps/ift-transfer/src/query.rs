//! Read-only queries over the IFT state of a host.
use ift_primitives::prelude::*;
use ift_primitives::{ClientId, Sequence};
use ift_transfer_types::error::IftError;
use ift_transfer_types::{BridgeRegistration, Denom, PendingTransfer, PendingTransferKey};

use crate::context::IftValidationContext;

/// Returns the pending transfer at `(denom, client_id, sequence)`, or
/// [`IftError::PendingTransferNotFound`] once it has been resolved.
pub fn query_pending_transfer<Ctx>(
    ctx: &Ctx,
    denom: &Denom,
    client_id: &ClientId,
    sequence: Sequence,
) -> Result<PendingTransfer, IftError>
where
    Ctx: IftValidationContext,
{
    let key = PendingTransferKey::new(denom.clone(), client_id.clone(), sequence);

    ctx.pending_transfer(&key)?
        .ok_or_else(|| IftError::PendingTransferNotFound {
            denom: denom.to_string(),
            client_id: client_id.to_string(),
            sequence,
        })
}

/// Returns every live pending transfer of `denom` over `client_id`.
pub fn query_pending_transfers<Ctx>(
    ctx: &Ctx,
    denom: &Denom,
    client_id: &ClientId,
) -> Result<Vec<PendingTransfer>, IftError>
where
    Ctx: IftValidationContext,
{
    ctx.pending_transfers(denom, client_id)
}

pub fn query_bridge_registration<Ctx>(
    ctx: &Ctx,
    denom: &Denom,
    client_id: &ClientId,
) -> Result<BridgeRegistration, IftError>
where
    Ctx: IftValidationContext,
{
    ctx.bridge_registration(denom, client_id)?
        .ok_or_else(|| IftError::BridgeNotRegistered {
            denom: denom.to_string(),
            client_id: client_id.to_string(),
        })
}

/// The sequence the next transfer of `denom` over `client_id` will get.
pub fn query_next_sequence<Ctx>(
    ctx: &Ctx,
    denom: &Denom,
    client_id: &ClientId,
) -> Result<Sequence, IftError>
where
    Ctx: IftValidationContext,
{
    ctx.next_sequence(denom, client_id)
}
