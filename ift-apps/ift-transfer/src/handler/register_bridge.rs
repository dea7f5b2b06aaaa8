use ift_primitives::prelude::*;
use ift_primitives::ModuleEvent;
use ift_transfer_types::error::IftError;
use ift_transfer_types::events::RegisterBridgeEvent;
use ift_transfer_types::msgs::MsgRegisterBridge;
use tracing::info;

use crate::context::{IftExecutionContext, IftValidationContext};

/// Registers a bridge. Equivalent to calling [`register_bridge_validate`],
/// followed by [`register_bridge_execute`].
pub fn register_bridge<Ctx>(ctx: &mut Ctx, msg: MsgRegisterBridge) -> Result<(), IftError>
where
    Ctx: IftExecutionContext,
{
    register_bridge_validate(ctx, &msg)?;
    register_bridge_execute(ctx, msg)
}

/// Checks that `msg` comes from the module authority and that no bridge is
/// registered yet for its `(denom, client_id)`.
pub fn register_bridge_validate<Ctx>(ctx: &Ctx, msg: &MsgRegisterBridge) -> Result<(), IftError>
where
    Ctx: IftValidationContext,
{
    msg.validate_basic()?;

    let authority = ctx.config().authority();
    if &msg.authority != authority {
        return Err(IftError::Unauthorized {
            signer: msg.authority.to_string(),
            expected: authority.to_string(),
        });
    }

    if ctx
        .bridge_registration(&msg.denom, &msg.client_id)?
        .is_some()
    {
        return Err(IftError::BridgeAlreadyRegistered {
            denom: msg.denom.to_string(),
            client_id: msg.client_id.to_string(),
        });
    }

    Ok(())
}

/// Stores the registration. A prior call to [`register_bridge_validate`] MUST
/// have succeeded.
pub fn register_bridge_execute<Ctx>(ctx: &mut Ctx, msg: MsgRegisterBridge) -> Result<(), IftError>
where
    Ctx: IftExecutionContext,
{
    let registration = msg.registration();

    ctx.store_bridge_registration(registration.clone())?;

    info!(
        denom = %registration.denom,
        client_id = %registration.client_id,
        counterparty = %registration.counterparty_address,
        constructor = %registration.send_call_constructor,
        "ift bridge registered"
    );

    ctx.log_message(format!(
        "IFT bridge registered: {} over {} -> {} ({})",
        registration.denom,
        registration.client_id,
        registration.counterparty_address,
        registration.send_call_constructor
    ))?;

    let event = RegisterBridgeEvent {
        denom: registration.denom,
        client_id: registration.client_id,
        counterparty_address: registration.counterparty_address,
        send_call_constructor: registration.send_call_constructor,
    };
    ctx.emit_event(ModuleEvent::from(event))?;

    Ok(())
}
