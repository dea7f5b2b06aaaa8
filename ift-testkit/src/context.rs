//! A mock host chain running the IFT application next to a foreign GMP
//! application, both sharing one transport.
use core::time::Duration;
use std::sync::Arc;

use displaydoc::Display;
use ift_gmp_types::acknowledgement::{Acknowledgement, AcknowledgementStatus};
use ift_gmp_types::packet::Packet;
use ift_primitives::{ClientId, ModuleExtras, Sequence, Signer, Timestamp};
use ift_transfer::callback::{dispatch_packet_callback, CallbackOutcome, PacketCallback};
use ift_transfer::config::IftModuleConfig;
use ift_transfer::context::{IftExecutionContext, IftValidationContext};
use ift_transfer::handler::{register_bridge, send_transfer};
use ift_transfer::module::on_recv_packet_execute;
use ift_transfer::query::{
    query_bridge_registration, query_next_sequence, query_pending_transfer,
    query_pending_transfers,
};
use ift_transfer::types::error::IftError;
use ift_transfer::types::msgs::{MsgRegisterBridge, MsgTransfer};
use ift_transfer::types::{
    module_account, Amount, BridgeRegistration, Coin, Denom, PendingTransfer,
};
use parking_lot::Mutex;
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

use crate::testapp::dummy_app::DummyGmpApp;
use crate::testapp::gmp::{MockGmpStore, TransportError};
use crate::testapp::ift::MockIftStore;
use crate::utils::year_2023;

/// Name of the module account holding the governance authority by default.
pub const GOV_MODULE_NAME: &str = "gov";

/// Configuration of a [`MockChain`]. Every field has a default, so
/// `MockChainConfig::builder().build()` yields a usable chain.
#[derive(TypedBuilder, Debug)]
#[builder(build_method(into = MockChain))]
pub struct MockChainConfig {
    #[builder(default = String::from("mockchain-0"), setter(into))]
    chain_id: String,

    #[builder(default = String::from("cosmos"), setter(into))]
    address_prefix: String,

    /// Defaults to the `gov` module account.
    #[builder(default, setter(strip_option))]
    authority: Option<Signer>,

    /// Denominations issued by this chain; escrowed rather than burned when
    /// they leave it.
    #[builder(default)]
    native_denoms: Vec<Denom>,

    #[builder(default = year_2023())]
    genesis_timestamp: Timestamp,

    #[builder(default = true)]
    send_enabled: bool,

    #[builder(default = true)]
    receive_enabled: bool,
}

impl From<MockChainConfig> for MockChain {
    fn from(config: MockChainConfig) -> Self {
        let authority = config
            .authority
            .unwrap_or_else(|| module_account(GOV_MODULE_NAME, &config.address_prefix));

        let ift_config = IftModuleConfig::with_default_module(&config.address_prefix, authority);

        let mut ift = MockIftStore::new(
            ift_config,
            config.native_denoms,
            config.genesis_timestamp,
        );
        ift.set_send_enabled(config.send_enabled);
        ift.set_receive_enabled(config.receive_enabled);

        Self {
            chain_id: config.chain_id,
            ift,
            gmp: MockGmpStore::new(config.genesis_timestamp),
            foreign_app: DummyGmpApp::new(&config.address_prefix),
        }
    }
}

/// Errors of transactions submitted to a [`MockChain`].
#[derive(Debug, Display)]
pub enum ChainError {
    /// transport rejected the packet: `{0}`
    Transport(TransportError),
    /// ift transaction failed: `{0}`
    Ift(IftError),
}

impl std::error::Error for ChainError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Transport(e) => Some(e),
            Self::Ift(e) => Some(e),
        }
    }
}

impl From<TransportError> for ChainError {
    fn from(e: TransportError) -> Self {
        Self::Transport(e)
    }
}

impl From<IftError> for ChainError {
    fn from(e: IftError) -> Self {
        Self::Ift(e)
    }
}

/// A chain made of the IFT module, its bank, the GMP transport and a
/// foreign application.
///
/// Transactions are atomic: every state change of a transaction that
/// fails is rolled back.
#[derive(Clone, Debug)]
pub struct MockChain {
    chain_id: String,
    pub ift: MockIftStore,
    pub gmp: MockGmpStore,
    pub foreign_app: DummyGmpApp,
}

/// A chain shared between threads. Transactions on it are serialised by the
/// lock, the way a host executes one transaction at a time.
pub type SharedChain = Arc<Mutex<MockChain>>;

impl Default for MockChain {
    fn default() -> Self {
        MockChainConfig::builder().build()
    }
}

impl MockChain {
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    pub fn into_shared(self) -> SharedChain {
        Arc::new(Mutex::new(self))
    }

    pub fn address_prefix(&self) -> &str {
        self.ift.config().address_prefix()
    }

    pub fn ift_module_address(&self) -> Signer {
        self.ift.config().module_address().clone()
    }

    pub fn authority(&self) -> Signer {
        self.ift.config().authority().clone()
    }

    pub fn host_timestamp(&self) -> Timestamp {
        self.gmp.host_timestamp()
    }

    /// Moves the clock of the chain forward.
    pub fn advance_time(&mut self, duration: Duration) {
        let now = self
            .host_timestamp()
            .checked_add(duration)
            .expect("no timestamp overflow");
        self.ift.set_host_timestamp(now);
        self.gmp.set_host_timestamp(now);
    }

    /// Registers `client_id` with the transport. `counterparty_client_id`
    /// is the client the other chain uses to track this one.
    pub fn add_client(&mut self, client_id: ClientId, counterparty_client_id: ClientId) {
        self.gmp.add_client(client_id, counterparty_client_id);
    }

    pub fn fund(&mut self, account: &Signer, coin: &Coin) -> Result<(), ChainError> {
        Ok(self.ift.fund(account, coin)?)
    }

    pub fn balance(&self, account: &Signer, denom: &Denom) -> Amount {
        self.ift.balance(account, denom)
    }

    pub fn escrowed(&self, client_id: &ClientId, denom: &Denom) -> Amount {
        self.ift.escrowed(client_id, denom)
    }

    pub fn total_supply(&self, denom: &Denom) -> Amount {
        self.ift.total_supply(denom)
    }

    /// Runs `f` against the chain, restoring the prior state if it fails.
    fn transact<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ChainError>,
    ) -> Result<T, ChainError> {
        let snapshot = self.clone();

        let result = f(self);

        if let Err(error) = &result {
            debug!(chain_id = %self.chain_id, %error, "transaction reverted");
            *self = snapshot;
        }

        result
    }

    fn record_extras(&mut self, extras: ModuleExtras) -> Result<(), ChainError> {
        for event in extras.events {
            self.ift.emit_event(event)?;
        }
        for message in extras.log {
            self.ift.log_message(message)?;
        }
        Ok(())
    }

    /// Submits a governance message registering a bridge.
    pub fn register_bridge(&mut self, msg: MsgRegisterBridge) -> Result<(), ChainError> {
        self.transact(|chain| Ok(register_bridge(&mut chain.ift, msg)?))
    }

    /// Submits a transfer and returns its sequence together with the packet
    /// committed by the transport.
    pub fn send_transfer(&mut self, msg: MsgTransfer) -> Result<(Sequence, Packet), ChainError> {
        self.transact(|chain| {
            let sequence = send_transfer(&mut chain.gmp, &mut chain.ift, msg)?;

            let packet = chain
                .gmp
                .last_sent_packet()
                .cloned()
                .ok_or_else(|| IftError::Other("transport holds no sent packet".to_string()))?;

            Ok((sequence, packet))
        })
    }

    /// Sends an opaque message from the foreign application.
    pub fn send_foreign_message(
        &mut self,
        client_id: &ClientId,
        receiver: impl Into<String>,
        payload: Vec<u8>,
        timeout_timestamp: Timestamp,
    ) -> Result<Packet, ChainError> {
        let receiver = receiver.into();
        self.transact(|chain| {
            Ok(chain.foreign_app.send_message(
                &mut chain.gmp,
                client_id,
                receiver,
                payload,
                timeout_timestamp,
            )?)
        })
    }

    /// Delivers a packet from the counterparty. The packet is routed to the
    /// application named by its GMP receiver; whatever that application
    /// answers is written as the acknowledgement.
    pub fn recv_packet(&mut self, packet: &Packet) -> Result<Acknowledgement, ChainError> {
        self.gmp.recv_packet_validate(packet)?;

        self.transact(|chain| {
            let ift_module_address = chain.ift_module_address();

            let acknowledgement = match packet.gmp_data() {
                Ok(gmp_data) if gmp_data.receiver == ift_module_address.as_str() => {
                    let (extras, acknowledgement) = on_recv_packet_execute(&mut chain.ift, packet);
                    chain.record_extras(extras)?;
                    acknowledgement
                }
                Ok(gmp_data) if gmp_data.receiver == chain.foreign_app.address().as_str() => {
                    chain.foreign_app.on_recv_packet(&gmp_data)
                }
                Ok(gmp_data) => {
                    warn!(receiver = %gmp_data.receiver, "no application bound to gmp receiver");
                    error_acknowledgement(format!("unknown receiver {}", gmp_data.receiver))
                }
                Err(error) => error_acknowledgement(error.to_string()),
            };

            chain
                .gmp
                .recv_packet_execute(packet, acknowledgement.clone());

            Ok(acknowledgement)
        })
    }

    /// Delivers the counterparty's acknowledgement of a packet sent from
    /// here. Every application sharing the transport is notified; the IFT
    /// dispatcher ignores packets it did not send.
    pub fn acknowledge_packet(
        &mut self,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
        relayer: &Signer,
    ) -> Result<CallbackOutcome, ChainError> {
        self.gmp.callback_validate(packet)?;

        self.transact(|chain| {
            let module_address = chain.ift_module_address();
            let (extras, outcome) = dispatch_packet_callback(
                &mut chain.ift,
                &module_address,
                packet,
                PacketCallback::Acknowledgement(acknowledgement),
                relayer,
            )?;
            chain.record_extras(extras)?;

            chain
                .foreign_app
                .on_acknowledgement_packet(packet, acknowledgement);
            chain.gmp.callback_execute(packet);

            Ok(outcome)
        })
    }

    /// Delivers the proof that a packet sent from here timed out.
    pub fn timeout_packet(
        &mut self,
        packet: &Packet,
        relayer: &Signer,
    ) -> Result<CallbackOutcome, ChainError> {
        self.gmp.callback_validate(packet)?;

        self.transact(|chain| {
            let module_address = chain.ift_module_address();
            let (extras, outcome) = dispatch_packet_callback(
                &mut chain.ift,
                &module_address,
                packet,
                PacketCallback::Timeout,
                relayer,
            )?;
            chain.record_extras(extras)?;

            chain.foreign_app.on_timeout_packet(packet);
            chain.gmp.callback_execute(packet);

            Ok(outcome)
        })
    }

    pub fn bridge_registration(
        &self,
        denom: &Denom,
        client_id: &ClientId,
    ) -> Result<BridgeRegistration, IftError> {
        query_bridge_registration(&self.ift, denom, client_id)
    }

    pub fn next_sequence(&self, denom: &Denom, client_id: &ClientId) -> Result<Sequence, IftError> {
        query_next_sequence(&self.ift, denom, client_id)
    }

    pub fn pending_transfer(
        &self,
        denom: &Denom,
        client_id: &ClientId,
        sequence: Sequence,
    ) -> Result<PendingTransfer, IftError> {
        query_pending_transfer(&self.ift, denom, client_id, sequence)
    }

    pub fn pending_transfers(
        &self,
        denom: &Denom,
        client_id: &ClientId,
    ) -> Result<Vec<PendingTransfer>, IftError> {
        query_pending_transfers(&self.ift, denom, client_id)
    }
}

fn error_acknowledgement(reason: String) -> Acknowledgement {
    AcknowledgementStatus::error(IftError::Other(reason).into()).into()
}
