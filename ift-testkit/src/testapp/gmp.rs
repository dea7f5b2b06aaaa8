//! An in-memory GMP transport.
//!
//! Stands in for the generic message passing layer: it keeps commitments of
//! the packets it sent, receipts of the packets it received and the
//! acknowledgements it wrote. Proofs are replaced by the relayer reading the
//! counterparty store directly.
use std::collections::{BTreeMap, BTreeSet};

use displaydoc::Display;
use ift_gmp_types::acknowledgement::Acknowledgement;
use ift_gmp_types::commitment::{compute_packet_commitment, PacketCommitment};
use ift_gmp_types::error::PacketError;
use ift_gmp_types::packet::{OutboundPacket, Packet};
use ift_primitives::{ClientId, HostError, Timestamp};
use ift_transfer::context::{SendPacketExecutionContext, SendPacketValidationContext};
use ift_transfer::types::error::IftError;

#[derive(Debug, Display)]
pub enum TransportError {
    /// packet error: `{0}`
    Packet(PacketError),
    /// unknown client `{client_id}`
    UnknownClient { client_id: ClientId },
    /// client `{client_id}` does not track client `{counterparty_client_id}`
    ClientMismatch {
        client_id: ClientId,
        counterparty_client_id: ClientId,
    },
    /// packet commitment not found for packet `{packet}`
    CommitmentNotFound { packet: String },
    /// packet commitment already exists for packet `{packet}`
    CommitmentAlreadyExists { packet: String },
    /// packet `{packet}` has already been received
    PacketAlreadyReceived { packet: String },
    /// packet `{packet}` has not been received
    PacketNotReceived { packet: String },
    /// no acknowledgement written for packet `{packet}`
    AcknowledgementNotFound { packet: String },
    /// acknowledgement does not match the one written for packet `{packet}`
    AcknowledgementMismatch { packet: String },
}

impl std::error::Error for TransportError {}

impl From<PacketError> for TransportError {
    fn from(err: PacketError) -> Self {
        Self::Packet(err)
    }
}

impl From<TransportError> for IftError {
    fn from(err: TransportError) -> Self {
        IftError::Other(err.to_string())
    }
}

/// Transport state of one chain.
#[derive(Clone, Debug, Default)]
pub struct MockGmpStore {
    host_timestamp: Timestamp,
    /// our client id -> the id of the client the counterparty uses to track us
    clients: BTreeMap<ClientId, ClientId>,
    commitments: BTreeMap<PacketCommitment, Packet>,
    receipts: BTreeSet<PacketCommitment>,
    acknowledgements: BTreeMap<PacketCommitment, Acknowledgement>,
    sent: Vec<Packet>,
}

impl MockGmpStore {
    pub fn new(host_timestamp: Timestamp) -> Self {
        Self {
            host_timestamp,
            ..Default::default()
        }
    }

    pub fn set_host_timestamp(&mut self, host_timestamp: Timestamp) {
        self.host_timestamp = host_timestamp;
    }

    pub fn host_timestamp(&self) -> Timestamp {
        self.host_timestamp
    }

    pub fn add_client(&mut self, client_id: ClientId, counterparty_client_id: ClientId) {
        self.clients.insert(client_id, counterparty_client_id);
    }

    /// Every packet sent from this chain, in sending order.
    pub fn sent_packets(&self) -> &[Packet] {
        &self.sent
    }

    pub fn last_sent_packet(&self) -> Option<&Packet> {
        self.sent.last()
    }

    pub fn has_commitment(&self, packet: &Packet) -> bool {
        self.commitments
            .contains_key(&compute_packet_commitment(packet))
    }

    pub fn has_receipt(&self, packet: &Packet) -> bool {
        self.receipts.contains(&compute_packet_commitment(packet))
    }

    pub fn acknowledgement(&self, packet: &Packet) -> Option<&Acknowledgement> {
        self.acknowledgements.get(&compute_packet_commitment(packet))
    }

    /// Checks that `packet`, sent by the counterparty, can be received here.
    pub fn recv_packet_validate(&self, packet: &Packet) -> Result<(), TransportError> {
        let counterparty_client_id = self.clients.get(&packet.client_id_on_b).ok_or_else(|| {
            TransportError::UnknownClient {
                client_id: packet.client_id_on_b.clone(),
            }
        })?;

        if counterparty_client_id != &packet.client_id_on_a {
            return Err(TransportError::ClientMismatch {
                client_id: packet.client_id_on_b.clone(),
                counterparty_client_id: packet.client_id_on_a.clone(),
            });
        }

        if packet.timed_out(&self.host_timestamp) {
            return Err(PacketError::PacketTimedOut {
                client_id: packet.client_id_on_b.clone(),
                sequence: packet.seq_on_a,
                timeout_timestamp: packet.timeout_timestamp_on_b,
                host_timestamp: self.host_timestamp,
            }
            .into());
        }

        if self.has_receipt(packet) {
            return Err(TransportError::PacketAlreadyReceived {
                packet: packet.to_string(),
            });
        }

        Ok(())
    }

    /// Records the receipt and the acknowledgement of `packet`.
    pub fn recv_packet_execute(&mut self, packet: &Packet, acknowledgement: Acknowledgement) {
        let commitment = compute_packet_commitment(packet);
        self.receipts.insert(commitment.clone());
        self.acknowledgements.insert(commitment, acknowledgement);
    }

    /// Checks that `packet` was sent from here and is still outstanding.
    pub fn callback_validate(&self, packet: &Packet) -> Result<(), TransportError> {
        if !self.has_commitment(packet) {
            return Err(TransportError::CommitmentNotFound {
                packet: packet.to_string(),
            });
        }
        Ok(())
    }

    /// Deletes the commitment of `packet` once its acknowledgement or
    /// timeout has been processed.
    pub fn callback_execute(&mut self, packet: &Packet) {
        self.commitments.remove(&compute_packet_commitment(packet));
    }
}

impl SendPacketValidationContext for MockGmpStore {
    fn counterparty_client(&self, client_id: &ClientId) -> Result<ClientId, IftError> {
        self.clients.get(client_id).cloned().ok_or_else(|| {
            HostError::missing_data(format!("client {client_id} is unknown to the transport"))
                .into()
        })
    }

    fn send_packet_validate(&self, packet: &OutboundPacket) -> Result<(), IftError> {
        let client_id_on_b = self.counterparty_client(&packet.client_id_on_a)?;

        if packet.timeout_timestamp_on_b <= self.host_timestamp {
            return Err(IftError::InvalidTimeout {
                timeout_timestamp: packet.timeout_timestamp_on_b.to_string(),
                host_timestamp: self.host_timestamp.to_string(),
            });
        }

        let packet = packet.clone().into_packet(client_id_on_b)?;
        if self.has_commitment(&packet) {
            return Err(TransportError::CommitmentAlreadyExists {
                packet: packet.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl SendPacketExecutionContext for MockGmpStore {
    fn send_packet_execute(&mut self, packet: OutboundPacket) -> Result<(), IftError> {
        let client_id_on_b = self.counterparty_client(&packet.client_id_on_a)?;
        let packet = packet.into_packet(client_id_on_b)?;

        self.commitments
            .insert(compute_packet_commitment(&packet), packet.clone());
        self.sent.push(packet);

        Ok(())
    }
}
