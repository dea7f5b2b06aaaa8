//! A second application sharing the GMP transport with IFT.
//!
//! It sends and receives opaque payloads and records every callback that
//! belongs to it, which lets tests check that the IFT callback handler
//! leaves foreign traffic alone and vice versa.
use ift_gmp_types::acknowledgement::{Acknowledgement, AcknowledgementStatus};
use ift_gmp_types::gmp::GmpPacketData;
use ift_gmp_types::packet::{OutboundPacket, Packet};
use ift_primitives::{ClientId, Sequence, Signer, Timestamp};
use ift_transfer::callback::is_sent_by;
use ift_transfer::context::{SendPacketExecutionContext, SendPacketValidationContext};
use ift_transfer::types::error::IftError;
use ift_transfer::types::{ack_success_b64, module_account};
use tracing::debug;

use super::gmp::MockGmpStore;

pub const DUMMY_APP_MODULE_NAME: &str = "dummy-gmp";

#[derive(Clone, Debug)]
pub struct DummyGmpApp {
    address: Signer,
    next_sequence: Sequence,
    received: Vec<Vec<u8>>,
    acknowledged: Vec<(Packet, Acknowledgement)>,
    timed_out: Vec<Packet>,
}

impl DummyGmpApp {
    pub fn new(address_prefix: &str) -> Self {
        Self {
            address: module_account(DUMMY_APP_MODULE_NAME, address_prefix),
            next_sequence: Sequence::first(),
            received: Vec::new(),
            acknowledged: Vec::new(),
            timed_out: Vec::new(),
        }
    }

    pub fn address(&self) -> &Signer {
        &self.address
    }

    /// Payloads delivered to this app, in delivery order.
    pub fn received(&self) -> &[Vec<u8>] {
        &self.received
    }

    pub fn acknowledged(&self) -> &[(Packet, Acknowledgement)] {
        &self.acknowledged
    }

    pub fn timed_out(&self) -> &[Packet] {
        &self.timed_out
    }

    /// Sends `payload` to `receiver` over `client_id` and returns the packet
    /// as committed by the transport.
    pub fn send_message(
        &mut self,
        gmp: &mut MockGmpStore,
        client_id: &ClientId,
        receiver: impl Into<String>,
        payload: Vec<u8>,
        timeout_timestamp: Timestamp,
    ) -> Result<Packet, IftError> {
        let sequence = self.next_sequence;
        let next_sequence = sequence
            .checked_increment()
            .ok_or_else(|| IftError::Other("dummy app sequence overflow".to_string()))?;

        let outbound = OutboundPacket {
            seq_on_a: sequence,
            client_id_on_a: client_id.clone(),
            timeout_timestamp_on_b: timeout_timestamp,
            data: GmpPacketData {
                sender: self.address.clone(),
                receiver: receiver.into(),
                salt: Vec::new(),
                payload,
                memo: String::new(),
            },
        };

        gmp.send_packet_validate(&outbound)?;
        let counterparty_client = gmp.counterparty_client(client_id)?;
        let packet = outbound.clone().into_packet(counterparty_client)?;
        gmp.send_packet_execute(outbound)?;

        self.next_sequence = next_sequence;

        Ok(packet)
    }

    pub fn on_recv_packet(&mut self, gmp_data: &GmpPacketData) -> Acknowledgement {
        self.received.push(gmp_data.payload.clone());

        AcknowledgementStatus::success(ack_success_b64()).into()
    }

    /// Records `acknowledgement` if `packet` was sent by this app. Returns
    /// whether it did.
    pub fn on_acknowledgement_packet(
        &mut self,
        packet: &Packet,
        acknowledgement: &Acknowledgement,
    ) -> bool {
        if !is_sent_by(&self.address, packet) {
            debug!(packet = %packet, "dummy app ignoring foreign acknowledgement");
            return false;
        }
        self.acknowledged
            .push((packet.clone(), acknowledgement.clone()));
        true
    }

    pub fn on_timeout_packet(&mut self, packet: &Packet) -> bool {
        if !is_sent_by(&self.address, packet) {
            debug!(packet = %packet, "dummy app ignoring foreign timeout");
            return false;
        }
        self.timed_out.push(packet.clone());
        true
    }
}
