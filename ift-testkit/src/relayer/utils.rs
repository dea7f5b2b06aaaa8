//! Packet relaying between two [`MockChain`]s.
//!
//! The transport does not verify proofs in the testkit; instead every
//! operation reads the counterparty store and refuses to relay what a real
//! proof could not attest.
use ift_gmp_types::acknowledgement::Acknowledgement;
use ift_gmp_types::packet::Packet;
use ift_primitives::Signer;
use ift_transfer::callback::CallbackOutcome;
use tracing::debug;

use crate::context::{ChainError, MockChain};
use crate::relayer::error::RelayerError;

fn transaction_failed(chain: &MockChain) -> impl FnOnce(ChainError) -> RelayerError {
    let chain_id = chain.chain_id().to_string();
    move |error| RelayerError::TransactionFailed { chain_id, error }
}

/// `B` receives a packet sent from `A`.
/// Returns `B`'s acknowledgement of receipt.
pub fn packet_recv_on_b(
    chain_b: &mut MockChain,
    chain_a: &MockChain,
    packet: &Packet,
) -> Result<Acknowledgement, RelayerError> {
    if !chain_a.gmp.has_commitment(packet) {
        return Err(RelayerError::PacketNotCommitted {
            packet: packet.to_string(),
        });
    }

    debug!(packet = %packet, from = chain_a.chain_id(), to = chain_b.chain_id(), "relaying packet");

    let on_error = transaction_failed(chain_b);
    chain_b.recv_packet(packet).map_err(on_error)
}

/// `A` receives the acknowledgement `B` wrote for a packet sent from `A`.
pub fn packet_ack_on_a(
    chain_a: &mut MockChain,
    chain_b: &MockChain,
    packet: &Packet,
    signer: &Signer,
) -> Result<(Acknowledgement, CallbackOutcome), RelayerError> {
    let acknowledgement = chain_b
        .gmp
        .acknowledgement(packet)
        .cloned()
        .ok_or_else(|| RelayerError::AcknowledgementNotFound {
            packet: packet.to_string(),
        })?;

    debug!(packet = %packet, to = chain_a.chain_id(), "relaying acknowledgement");

    let on_error = transaction_failed(chain_a);
    let outcome = chain_a
        .acknowledge_packet(packet, &acknowledgement, signer)
        .map_err(on_error)?;

    Ok((acknowledgement, outcome))
}

/// `A` learns that `B` never received a packet sent from `A` before its
/// timeout.
pub fn packet_timeout_on_a(
    chain_a: &mut MockChain,
    chain_b: &MockChain,
    packet: &Packet,
    signer: &Signer,
) -> Result<CallbackOutcome, RelayerError> {
    if chain_b.gmp.has_receipt(packet) {
        return Err(RelayerError::PacketAlreadyReceived {
            packet: packet.to_string(),
        });
    }

    if !packet.timed_out(&chain_b.host_timestamp()) {
        return Err(RelayerError::PacketNotTimedOut {
            packet: packet.to_string(),
        });
    }

    debug!(packet = %packet, to = chain_a.chain_id(), "relaying timeout");

    let on_error = transaction_failed(chain_a);
    chain_a.timeout_packet(packet, signer).map_err(on_error)
}
