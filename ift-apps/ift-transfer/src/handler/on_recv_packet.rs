use ift_gmp_types::gmp::GmpPacketData;
use ift_gmp_types::packet::Packet;
use ift_primitives::prelude::*;
use ift_primitives::ModuleExtras;
use ift_transfer_types::error::IftError;
use ift_transfer_types::packet::PacketData;
use ift_transfer_types::{decode_bech32_account, Coin};
use tracing::{debug, info};

use crate::context::IftExecutionContext;
use crate::encoder::CosmosEncoder;

/// This function handles the IFT receiving logic.
///
/// Every check runs before the first write: on error nothing has been minted
/// or unescrowed, and the caller turns the error into an error
/// acknowledgement.
pub fn process_recv_packet_execute<Ctx: IftExecutionContext>(
    ctx_b: &mut Ctx,
    packet: &Packet,
    gmp_data: &GmpPacketData,
    data: &PacketData,
) -> Result<ModuleExtras, (ModuleExtras, IftError)> {
    ctx_b
        .can_receive_coins()
        .map_err(|err| (ModuleExtras::empty(), err))?;

    let invalid_receiver = || {
        (
            ModuleExtras::empty(),
            IftError::InvalidReceiverAddress {
                receiver: data.receiver.to_string(),
            },
        )
    };

    // receivers are accounts of this chain, i.e. bech32 with its prefix
    decode_bech32_account(&data.receiver, ctx_b.config().address_prefix())
        .map_err(|_| invalid_receiver())?;
    let receiver_account = data
        .receiver
        .clone()
        .try_into()
        .map_err(|_| invalid_receiver())?;

    let registration = ctx_b
        .bridge_registration(&data.denom, &packet.client_id_on_b)
        .map_err(|err| (ModuleExtras::empty(), err))?
        .ok_or_else(|| {
            (
                ModuleExtras::empty(),
                IftError::BridgeNotRegistered {
                    denom: data.denom.to_string(),
                    client_id: packet.client_id_on_b.to_string(),
                },
            )
        })?;

    if gmp_data.sender.as_str() != registration.counterparty_address {
        return Err((
            ModuleExtras::empty(),
            IftError::CounterpartyMismatch {
                expected: registration.counterparty_address,
                actual: gmp_data.sender.to_string(),
            },
        ));
    }

    // the native call is what a Cosmos counterparty executes; it must not
    // say anything the chain-neutral fields don't
    let mint = CosmosEncoder::decode(&data.call).map_err(|err| (ModuleExtras::empty(), err))?;
    if mint.denom != data.denom || mint.receiver != data.receiver || mint.amount != data.amount {
        return Err((ModuleExtras::empty(), IftError::NativeCallMismatch));
    }

    let coin = Coin::new(data.denom.clone(), data.amount);

    if ctx_b.is_native_denom(&data.denom) {
        // the token comes home, release what was escrowed when it left
        ctx_b
            .unescrow_coins_validate(&receiver_account, &packet.client_id_on_b, &coin)
            .map_err(|err| (ModuleExtras::empty(), err))?;
        ctx_b
            .unescrow_coins_execute(&receiver_account, &packet.client_id_on_b, &coin)
            .map_err(|err| (ModuleExtras::empty(), err))?;
    } else {
        ctx_b
            .mint_coins_validate(&receiver_account, &coin)
            .map_err(|err| (ModuleExtras::empty(), err))?;
        ctx_b
            .mint_coins_execute(&receiver_account, &coin)
            .map_err(|err| (ModuleExtras::empty(), err))?;
    }

    debug!(packet = %packet, "ift packet received");
    info!(
        denom = %data.denom,
        receiver = %data.receiver,
        amount = %data.amount,
        "ift tokens credited"
    );

    Ok(ModuleExtras {
        events: Vec::new(),
        log: vec![format!(
            "IFT receive: {} --({})--> {}",
            data.sender, coin, data.receiver
        )],
    })
}
