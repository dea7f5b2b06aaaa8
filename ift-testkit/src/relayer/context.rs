use core::time::Duration;

use ift_gmp_types::acknowledgement::Acknowledgement;
use ift_gmp_types::packet::Packet;
use ift_primitives::{ClientId, Signer};
use ift_transfer::callback::CallbackOutcome;

use crate::context::MockChain;
use crate::relayer::error::RelayerError;
use crate::relayer::utils::{packet_ack_on_a, packet_recv_on_b, packet_timeout_on_a};

/// Two chains and a relayer moving packets between them.
pub struct RelayerContext {
    chain_a: MockChain,
    chain_b: MockChain,
    signer: Signer,
}

impl RelayerContext {
    pub fn new(chain_a: MockChain, chain_b: MockChain, signer: Signer) -> Self {
        Self {
            chain_a,
            chain_b,
            signer,
        }
    }

    pub fn chain_a(&self) -> &MockChain {
        &self.chain_a
    }

    pub fn chain_b(&self) -> &MockChain {
        &self.chain_b
    }

    pub fn chain_a_mut(&mut self) -> &mut MockChain {
        &mut self.chain_a
    }

    pub fn chain_b_mut(&mut self) -> &mut MockChain {
        &mut self.chain_b
    }

    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    pub fn into_chains(self) -> (MockChain, MockChain) {
        (self.chain_a, self.chain_b)
    }

    /// Opens a GMP path: `client_id_on_a` tracks `B` on `A` and
    /// `client_id_on_b` tracks `A` on `B`.
    pub fn connect(&mut self, client_id_on_a: ClientId, client_id_on_b: ClientId) {
        self.chain_a
            .add_client(client_id_on_a.clone(), client_id_on_b.clone());
        self.chain_b.add_client(client_id_on_b, client_id_on_a);
    }

    /// Moves both clocks forward by the same amount.
    pub fn advance_time(&mut self, duration: Duration) {
        self.chain_a.advance_time(duration);
        self.chain_b.advance_time(duration);
    }

    pub fn relay_recv_packet_on_b(
        &mut self,
        packet: &Packet,
    ) -> Result<Acknowledgement, RelayerError> {
        packet_recv_on_b(&mut self.chain_b, &self.chain_a, packet)
    }

    pub fn relay_recv_packet_on_a(
        &mut self,
        packet: &Packet,
    ) -> Result<Acknowledgement, RelayerError> {
        packet_recv_on_b(&mut self.chain_a, &self.chain_b, packet)
    }

    pub fn relay_ack_packet_on_a(
        &mut self,
        packet: &Packet,
    ) -> Result<(Acknowledgement, CallbackOutcome), RelayerError> {
        packet_ack_on_a(&mut self.chain_a, &self.chain_b, packet, &self.signer)
    }

    pub fn relay_ack_packet_on_b(
        &mut self,
        packet: &Packet,
    ) -> Result<(Acknowledgement, CallbackOutcome), RelayerError> {
        packet_ack_on_a(&mut self.chain_b, &self.chain_a, packet, &self.signer)
    }

    pub fn relay_timeout_packet_on_a(
        &mut self,
        packet: &Packet,
    ) -> Result<CallbackOutcome, RelayerError> {
        packet_timeout_on_a(&mut self.chain_a, &self.chain_b, packet, &self.signer)
    }

    pub fn relay_timeout_packet_on_b(
        &mut self,
        packet: &Packet,
    ) -> Result<CallbackOutcome, RelayerError> {
        packet_timeout_on_a(&mut self.chain_b, &self.chain_a, packet, &self.signer)
    }

    /// Delivers a packet sent from `A` to `B`, then its acknowledgement back
    /// to `A`.
    pub fn relay_round_trip_from_a(
        &mut self,
        packet: &Packet,
    ) -> Result<(Acknowledgement, CallbackOutcome), RelayerError> {
        self.relay_recv_packet_on_b(packet)?;
        self.relay_ack_packet_on_a(packet)
    }

    pub fn relay_round_trip_from_b(
        &mut self,
        packet: &Packet,
    ) -> Result<(Acknowledgement, CallbackOutcome), RelayerError> {
        self.relay_recv_packet_on_a(packet)?;
        self.relay_ack_packet_on_b(packet)
    }
}
