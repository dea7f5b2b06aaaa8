use core::time::Duration;

use ift_primitives::{ClientId, Signer, Timestamp};
use ift_transfer::types::msgs::{MsgRegisterBridge, MsgTransfer};
use ift_transfer::types::{Amount, Denom, Memo, SendCallConstructor};
use typed_builder::TypedBuilder;

use crate::context::{MockChain, MockChainConfig};
use crate::relayer::context::RelayerContext;
use crate::utils::{dummy_account, year_2023};

pub const CHAIN_A_PREFIX: &str = "cosmos";
pub const CHAIN_B_PREFIX: &str = "osmo";

/// Denomination bridged between the dummy chains.
pub const IFT_DENOM: &str = "uift";

/// Default validity window of dummy transfers.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// The client tracking `B` on `A`.
pub fn client_id_on_a() -> ClientId {
    ClientId::new("07-tendermint", 0).expect("valid client id")
}

/// The client tracking `A` on `B`.
pub fn client_id_on_b() -> ClientId {
    ClientId::new("07-tendermint", 1).expect("valid client id")
}

pub fn ift_denom() -> Denom {
    IFT_DENOM.parse().expect("valid denom")
}

/// Configuration of a dummy [`MsgTransfer`] of the IFT denomination from
/// `A` to `B`.
#[derive(TypedBuilder, Debug)]
#[builder(build_method(into = MsgTransfer))]
pub struct MsgTransferConfig {
    #[builder(default = dummy_account(CHAIN_A_PREFIX, 1))]
    pub sender: Signer,
    #[builder(default = ift_denom())]
    pub denom: Denom,
    #[builder(default = client_id_on_a())]
    pub client_id: ClientId,
    #[builder(default = dummy_account(CHAIN_B_PREFIX, 2))]
    pub receiver: Signer,
    #[builder(default = Amount::from(100u64), setter(into))]
    pub amount: Amount,
    #[builder(default = year_2023().checked_add(DEFAULT_TIMEOUT).expect("no overflow"))]
    pub timeout_timestamp: Timestamp,
    #[builder(default, setter(into))]
    pub memo: Memo,
}

impl From<MsgTransferConfig> for MsgTransfer {
    fn from(config: MsgTransferConfig) -> Self {
        Self {
            sender: config.sender,
            denom: config.denom,
            client_id: config.client_id,
            receiver: config.receiver,
            amount: config.amount,
            timeout_timestamp: config.timeout_timestamp,
            memo: config.memo,
        }
    }
}

/// A governance message registering `counterparty`'s IFT module as the
/// bridge of `denom` over `client_id` on `chain`.
pub fn register_bridge_msg(
    chain: &MockChain,
    counterparty: &MockChain,
    denom: Denom,
    client_id: ClientId,
    send_call_constructor: SendCallConstructor,
) -> MsgRegisterBridge {
    MsgRegisterBridge {
        authority: chain.authority(),
        denom,
        client_id,
        counterparty_address: counterparty.ift_module_address().to_string(),
        send_call_constructor,
    }
}

/// Two chains connected over [`client_id_on_a`] and [`client_id_on_b`],
/// with the IFT denomination bridged both ways.
///
/// `native_on_a` makes the denomination native to `A`, so it is escrowed
/// rather than burned when it leaves `A`.
pub fn bridged_chains(native_on_a: bool) -> RelayerContext {
    let native_denoms_on_a = if native_on_a {
        vec![ift_denom()]
    } else {
        Vec::new()
    };

    let chain_a = MockChainConfig::builder()
        .chain_id("ift-a")
        .address_prefix(CHAIN_A_PREFIX)
        .native_denoms(native_denoms_on_a)
        .build();

    let chain_b = MockChainConfig::builder()
        .chain_id("ift-b")
        .address_prefix(CHAIN_B_PREFIX)
        .build();

    let mut relayer = RelayerContext::new(chain_a, chain_b, dummy_account(CHAIN_A_PREFIX, 0xff));

    relayer.connect(client_id_on_a(), client_id_on_b());

    let msg_on_a = register_bridge_msg(
        relayer.chain_a(),
        relayer.chain_b(),
        ift_denom(),
        client_id_on_a(),
        SendCallConstructor::Cosmos,
    );
    let msg_on_b = register_bridge_msg(
        relayer.chain_b(),
        relayer.chain_a(),
        ift_denom(),
        client_id_on_b(),
        SendCallConstructor::Cosmos,
    );

    relayer
        .chain_a_mut()
        .register_bridge(msg_on_a)
        .expect("bridge registration on A succeeds");
    relayer
        .chain_b_mut()
        .register_bridge(msg_on_b)
        .expect("bridge registration on B succeeds");

    relayer
}
