use core::time::Duration;

use ift_gmp_types::acknowledgement::{Acknowledgement, AcknowledgementStatus};
use ift_gmp_types::error::PacketError;
use ift_gmp_types::packet::Packet;
use ift_primitives::{ClientId, Sequence, Signer, Timestamp};
use ift_testkit::context::{ChainError, MockChain};
use ift_testkit::fixtures::ift::{
    bridged_chains, client_id_on_a, client_id_on_b, ift_denom, register_bridge_msg,
    MsgTransferConfig, CHAIN_A_PREFIX, CHAIN_B_PREFIX,
};
use ift_testkit::relayer::context::RelayerContext;
use ift_testkit::relayer::error::RelayerError;
use ift_testkit::testapp::gmp::TransportError;
use ift_testkit::utils::dummy_account;
use ift_transfer::callback::{dispatch_packet_callback, CallbackOutcome, PacketCallback};
use ift_transfer::context::IftValidationContext;
use ift_transfer::encoder::{SolanaEncoder, EVM_MINT_SELECTOR};
use ift_transfer::types::error::IftError;
use ift_transfer::types::msgs::MsgTransfer;
use ift_transfer::types::packet::PacketData;
use ift_transfer::types::{Amount, Coin, Denom, SendCallConstructor, TransferOutcome};
use rstest::rstest;

const AMOUNT: u64 = 1_000_000;

fn sender() -> Signer {
    dummy_account(CHAIN_A_PREFIX, 1)
}

fn receiver() -> Signer {
    dummy_account(CHAIN_B_PREFIX, 2)
}

fn timeout_after(chain: &MockChain, duration: Duration) -> Timestamp {
    chain
        .host_timestamp()
        .checked_add(duration)
        .expect("no overflow")
}

/// Two bridged chains with `AMOUNT` of the IFT denomination minted to the
/// sender on `A`.
fn funded_chains(native_on_a: bool) -> RelayerContext {
    let mut relayer = bridged_chains(native_on_a);
    relayer
        .chain_a_mut()
        .fund(&sender(), &Coin::new(ift_denom(), AMOUNT))
        .expect("funding succeeds");
    relayer
}

fn transfer_from_a(chain_a: &MockChain, amount: u64, timeout: Duration) -> MsgTransfer {
    MsgTransferConfig::builder()
        .sender(sender())
        .receiver(receiver())
        .amount(amount)
        .timeout_timestamp(timeout_after(chain_a, timeout))
        .build()
}

fn balance_on_a(relayer: &RelayerContext) -> Amount {
    relayer.chain_a().balance(&sender(), &ift_denom())
}

fn balance_on_b(relayer: &RelayerContext) -> Amount {
    relayer.chain_b().balance(&receiver(), &ift_denom())
}

fn is_pending_not_found(err: &IftError) -> bool {
    matches!(err, IftError::PendingTransferNotFound { .. })
}

#[test_log::test]
fn transfer_settles_on_success_ack() {
    let mut relayer = funded_chains(false);

    let msg = transfer_from_a(relayer.chain_a(), AMOUNT, Duration::from_secs(30 * 60));
    let (sequence, packet) = relayer.chain_a_mut().send_transfer(msg).unwrap();

    assert_eq!(sequence, Sequence::from(1));
    assert!(balance_on_a(&relayer).is_zero());

    let ack = relayer.relay_recv_packet_on_b(&packet).unwrap();
    assert!(AcknowledgementStatus::try_from(&ack)
        .unwrap()
        .is_successful());

    assert_eq!(balance_on_b(&relayer), Amount::from(AMOUNT));
    assert!(balance_on_a(&relayer).is_zero());

    let pending = relayer
        .chain_a()
        .pending_transfer(&ift_denom(), &client_id_on_a(), sequence)
        .unwrap();
    assert_eq!(pending.sender, sender());
    assert_eq!(pending.amount, Amount::from(AMOUNT));

    let (_, outcome) = relayer.relay_ack_packet_on_a(&packet).unwrap();
    assert_eq!(outcome, CallbackOutcome::Handled(TransferOutcome::Settled));

    let err = relayer
        .chain_a()
        .pending_transfer(&ift_denom(), &client_id_on_a(), sequence)
        .unwrap_err();
    assert!(is_pending_not_found(&err));

    assert!(balance_on_a(&relayer).is_zero());
    assert_eq!(balance_on_b(&relayer), Amount::from(AMOUNT));
}

#[test_log::test]
fn expired_transfer_is_refunded_by_timeout() {
    let mut relayer = funded_chains(false);

    let msg = transfer_from_a(relayer.chain_a(), AMOUNT, Duration::from_secs(30));
    let (sequence, packet) = relayer.chain_a_mut().send_transfer(msg).unwrap();

    // too early, the destination may still receive it
    let err = relayer.relay_timeout_packet_on_a(&packet).unwrap_err();
    assert!(matches!(err, RelayerError::PacketNotTimedOut { .. }));

    relayer.advance_time(Duration::from_secs(35));

    // the destination refuses the packet once its clock passed the timeout
    let err = relayer.relay_recv_packet_on_b(&packet).unwrap_err();
    assert!(matches!(
        err,
        RelayerError::TransactionFailed {
            error: ChainError::Transport(TransportError::Packet(PacketError::PacketTimedOut { .. })),
            ..
        }
    ));

    let outcome = relayer.relay_timeout_packet_on_a(&packet).unwrap();
    assert_eq!(outcome, CallbackOutcome::Handled(TransferOutcome::Refunded));

    assert_eq!(balance_on_a(&relayer), Amount::from(AMOUNT));
    assert!(balance_on_b(&relayer).is_zero());
    assert!(relayer
        .chain_a()
        .pending_transfer(&ift_denom(), &client_id_on_a(), sequence)
        .is_err());

    // nothing left to deliver
    let err = relayer.relay_recv_packet_on_b(&packet).unwrap_err();
    assert!(matches!(err, RelayerError::PacketNotCommitted { .. }));
    assert!(balance_on_b(&relayer).is_zero());
}

#[test_log::test]
fn invalid_receiver_is_refunded_by_error_ack() {
    let mut relayer = funded_chains(false);

    let msg = MsgTransferConfig::builder()
        .sender(sender())
        .receiver(Signer::from("osmo1notanaddress"))
        .amount(AMOUNT)
        .timeout_timestamp(timeout_after(relayer.chain_a(), Duration::from_secs(600)))
        .build();
    let (sequence, packet) = relayer.chain_a_mut().send_transfer(msg).unwrap();
    assert!(balance_on_a(&relayer).is_zero());

    let supply_on_b = relayer.chain_b().total_supply(&ift_denom());

    let ack = relayer.relay_recv_packet_on_b(&packet).unwrap();
    let status = AcknowledgementStatus::try_from(&ack).unwrap();
    assert!(!status.is_successful());
    assert!(status.to_string().contains("invalid receiver address"));

    // rejected packets leave the destination untouched
    assert_eq!(relayer.chain_b().total_supply(&ift_denom()), supply_on_b);

    let (_, outcome) = relayer.relay_ack_packet_on_a(&packet).unwrap();
    assert_eq!(outcome, CallbackOutcome::Handled(TransferOutcome::Refunded));

    assert_eq!(balance_on_a(&relayer), Amount::from(AMOUNT));
    assert!(relayer
        .chain_b()
        .balance(&Signer::from("osmo1notanaddress"), &ift_denom())
        .is_zero());
    assert!(relayer
        .chain_a()
        .pending_transfer(&ift_denom(), &client_id_on_a(), sequence)
        .is_err());
}

#[test_log::test]
fn concurrent_pending_transfers_resolve_independently() {
    let mut relayer = funded_chains(false);
    let amount = AMOUNT / 4;

    let mut packets = Vec::new();
    for expected in 1..=3u64 {
        let msg = transfer_from_a(relayer.chain_a(), amount, Duration::from_secs(600));
        let (sequence, packet) = relayer.chain_a_mut().send_transfer(msg).unwrap();
        assert_eq!(sequence, Sequence::from(expected));
        packets.push(packet);
    }

    let pending = relayer
        .chain_a()
        .pending_transfers(&ift_denom(), &client_id_on_a())
        .unwrap();
    assert_eq!(pending.len(), 3);
    for (index, entry) in pending.iter().enumerate() {
        assert_eq!(entry.sequence, Sequence::from(index as u64 + 1));
        assert_eq!(entry.sender, sender());
        assert_eq!(entry.amount, Amount::from(amount));
    }

    // settlement order is free
    for index in [2, 0, 1] {
        let (_, outcome) = relayer.relay_round_trip_from_a(&packets[index]).unwrap();
        assert_eq!(outcome, CallbackOutcome::Handled(TransferOutcome::Settled));

        let remaining = relayer
            .chain_a()
            .pending_transfers(&ift_denom(), &client_id_on_a())
            .unwrap();
        assert!(remaining
            .iter()
            .all(|entry| entry.sequence != packets[index].seq_on_a));
    }

    assert!(relayer
        .chain_a()
        .pending_transfers(&ift_denom(), &client_id_on_a())
        .unwrap()
        .is_empty());
    assert_eq!(balance_on_b(&relayer), Amount::from(3 * amount));
    assert_eq!(balance_on_a(&relayer), Amount::from(AMOUNT - 3 * amount));
}

#[rstest]
#[case::burn_and_mint(false)]
#[case::escrow_and_unescrow(true)]
fn round_trip_conserves_balances(#[case] native_on_a: bool) {
    let mut relayer = funded_chains(native_on_a);
    let supply_on_a = relayer.chain_a().total_supply(&ift_denom());

    let msg = transfer_from_a(relayer.chain_a(), AMOUNT, Duration::from_secs(600));
    let (_, packet) = relayer.chain_a_mut().send_transfer(msg).unwrap();
    relayer.relay_round_trip_from_a(&packet).unwrap();

    assert!(balance_on_a(&relayer).is_zero());
    assert_eq!(balance_on_b(&relayer), Amount::from(AMOUNT));
    if native_on_a {
        assert_eq!(
            relayer.chain_a().escrowed(&client_id_on_a(), &ift_denom()),
            Amount::from(AMOUNT)
        );
    } else {
        assert!(relayer.chain_a().total_supply(&ift_denom()).is_zero());
    }

    let back: MsgTransfer = MsgTransferConfig::builder()
        .sender(receiver())
        .client_id(client_id_on_b())
        .receiver(sender())
        .amount(AMOUNT)
        .timeout_timestamp(timeout_after(relayer.chain_b(), Duration::from_secs(600)))
        .build();
    let (sequence, packet) = relayer.chain_b_mut().send_transfer(back).unwrap();
    assert_eq!(sequence, Sequence::from(1));

    let (_, outcome) = relayer.relay_round_trip_from_b(&packet).unwrap();
    assert_eq!(outcome, CallbackOutcome::Handled(TransferOutcome::Settled));

    assert_eq!(balance_on_a(&relayer), Amount::from(AMOUNT));
    assert!(balance_on_b(&relayer).is_zero());
    assert!(relayer.chain_b().total_supply(&ift_denom()).is_zero());
    assert!(relayer
        .chain_a()
        .escrowed(&client_id_on_a(), &ift_denom())
        .is_zero());
    assert_eq!(relayer.chain_a().total_supply(&ift_denom()), supply_on_a);
}

#[derive(Clone, Copy, Debug)]
enum Resolution {
    ErrorAck,
    Timeout,
}

/// Leaves the transfer refunded on `A` and returns the packet.
fn refund(relayer: &mut RelayerContext, resolution: Resolution) -> Packet {
    match resolution {
        Resolution::ErrorAck => {
            relayer.chain_b_mut().ift.set_receive_enabled(false);
            let msg = transfer_from_a(relayer.chain_a(), AMOUNT, Duration::from_secs(600));
            let (_, packet) = relayer.chain_a_mut().send_transfer(msg).unwrap();
            let (_, outcome) = relayer.relay_round_trip_from_a(&packet).unwrap();
            assert_eq!(outcome, CallbackOutcome::Handled(TransferOutcome::Refunded));
            packet
        }
        Resolution::Timeout => {
            let msg = transfer_from_a(relayer.chain_a(), AMOUNT, Duration::from_secs(30));
            let (_, packet) = relayer.chain_a_mut().send_transfer(msg).unwrap();
            relayer.advance_time(Duration::from_secs(31));
            let outcome = relayer.relay_timeout_packet_on_a(&packet).unwrap();
            assert_eq!(outcome, CallbackOutcome::Handled(TransferOutcome::Refunded));
            packet
        }
    }
}

#[rstest]
#[case::burned_error_ack(false, Resolution::ErrorAck)]
#[case::burned_timeout(false, Resolution::Timeout)]
#[case::escrowed_error_ack(true, Resolution::ErrorAck)]
#[case::escrowed_timeout(true, Resolution::Timeout)]
fn refund_happens_exactly_once(#[case] native_on_a: bool, #[case] resolution: Resolution) {
    let mut relayer = funded_chains(native_on_a);
    let supply_on_a = relayer.chain_a().total_supply(&ift_denom());

    let packet = refund(&mut relayer, resolution);

    assert_eq!(balance_on_a(&relayer), Amount::from(AMOUNT));
    assert!(balance_on_b(&relayer).is_zero());
    assert!(relayer.chain_b().total_supply(&ift_denom()).is_zero());
    assert!(relayer
        .chain_a()
        .escrowed(&client_id_on_a(), &ift_denom())
        .is_zero());
    assert_eq!(relayer.chain_a().total_supply(&ift_denom()), supply_on_a);

    // handing the resolved packet to the callback handler again, whichever
    // way, must fail without a second refund
    let chain_a = relayer.chain_a_mut();
    let module_address = chain_a.ift_module_address();
    let relayer_signer = dummy_account(CHAIN_A_PREFIX, 0xff);
    let error_ack: Acknowledgement =
        AcknowledgementStatus::error(IftError::Other("replayed".to_string()).into()).into();

    let err = dispatch_packet_callback(
        &mut chain_a.ift,
        &module_address,
        &packet,
        PacketCallback::Acknowledgement(&error_ack),
        &relayer_signer,
    )
    .unwrap_err();
    assert!(is_pending_not_found(&err));

    let err = dispatch_packet_callback(
        &mut chain_a.ift,
        &module_address,
        &packet,
        PacketCallback::Timeout,
        &relayer_signer,
    )
    .unwrap_err();
    assert!(is_pending_not_found(&err));

    assert_eq!(balance_on_a(&relayer), Amount::from(AMOUNT));
    assert!(relayer
        .chain_a()
        .escrowed(&client_id_on_a(), &ift_denom())
        .is_zero());
}

#[test_log::test]
fn settled_transfer_cannot_be_resolved_again() {
    let mut relayer = funded_chains(false);

    let msg = transfer_from_a(relayer.chain_a(), AMOUNT, Duration::from_secs(600));
    let (_, packet) = relayer.chain_a_mut().send_transfer(msg).unwrap();
    let (ack, _) = relayer.relay_round_trip_from_a(&packet).unwrap();

    // the transport forgot the packet
    let relayer_signer = relayer.signer().clone();
    let err = relayer
        .chain_a_mut()
        .acknowledge_packet(&packet, &ack, &relayer_signer)
        .unwrap_err();
    assert!(matches!(
        err,
        ChainError::Transport(TransportError::CommitmentNotFound { .. })
    ));

    // and so did IFT
    let chain_a = relayer.chain_a_mut();
    let module_address = chain_a.ift_module_address();
    let err = dispatch_packet_callback(
        &mut chain_a.ift,
        &module_address,
        &packet,
        PacketCallback::Acknowledgement(&ack),
        &relayer_signer,
    )
    .unwrap_err();
    assert!(is_pending_not_found(&err));

    let err = dispatch_packet_callback(
        &mut chain_a.ift,
        &module_address,
        &packet,
        PacketCallback::Timeout,
        &relayer_signer,
    )
    .unwrap_err();
    assert!(is_pending_not_found(&err));

    assert!(balance_on_a(&relayer).is_zero());
}

#[test_log::test]
fn failed_initiations_do_not_consume_sequences() {
    let mut relayer = funded_chains(false);
    let amount = AMOUNT / 10;

    let send = |relayer: &mut RelayerContext, msg: MsgTransfer| {
        relayer.chain_a_mut().send_transfer(msg)
    };

    let msg = transfer_from_a(relayer.chain_a(), amount, Duration::from_secs(600));
    let (first, _) = send(&mut relayer, msg).unwrap();
    assert_eq!(first, Sequence::from(1));

    let events = relayer.chain_a().ift.events.len();
    let sent = relayer.chain_a().gmp.sent_packets().len();

    // more than the sender holds
    let msg = transfer_from_a(relayer.chain_a(), AMOUNT, Duration::from_secs(600));
    let err = send(&mut relayer, msg).unwrap_err();
    assert!(matches!(
        err,
        ChainError::Ift(IftError::InsufficientFunds { .. })
    ));

    // nothing
    let msg = transfer_from_a(relayer.chain_a(), 0, Duration::from_secs(600));
    let err = send(&mut relayer, msg).unwrap_err();
    assert!(matches!(err, ChainError::Ift(IftError::ZeroAmount)));

    // already expired
    let expired: MsgTransfer = MsgTransferConfig::builder()
        .sender(sender())
        .receiver(receiver())
        .amount(amount)
        .timeout_timestamp(relayer.chain_a().host_timestamp())
        .build();
    let err = send(&mut relayer, expired).unwrap_err();
    assert!(matches!(
        err,
        ChainError::Ift(IftError::InvalidTimeout { .. })
    ));

    // no bridge for the denomination
    let unbridged: MsgTransfer = MsgTransferConfig::builder()
        .sender(sender())
        .receiver(receiver())
        .denom("uother".parse::<Denom>().unwrap())
        .amount(amount)
        .timeout_timestamp(timeout_after(relayer.chain_a(), Duration::from_secs(600)))
        .build();
    let err = send(&mut relayer, unbridged).unwrap_err();
    assert!(matches!(
        err,
        ChainError::Ift(IftError::BridgeNotRegistered { .. })
    ));

    assert_eq!(relayer.chain_a().ift.events.len(), events);
    assert_eq!(relayer.chain_a().gmp.sent_packets().len(), sent);
    assert_eq!(
        balance_on_a(&relayer),
        Amount::from(AMOUNT - amount)
    );
    assert_eq!(
        relayer
            .chain_a()
            .next_sequence(&ift_denom(), &client_id_on_a())
            .unwrap(),
        Sequence::from(2)
    );

    for expected in 2..=3u64 {
        let msg = transfer_from_a(relayer.chain_a(), amount, Duration::from_secs(600));
        let (sequence, _) = send(&mut relayer, msg).unwrap();
        assert_eq!(sequence, Sequence::from(expected));
    }
}

#[test_log::test]
fn sequences_are_scoped_per_bridge() {
    let mut relayer = funded_chains(false);
    let other_client = ClientId::new("07-tendermint", 7).unwrap();

    relayer
        .chain_a_mut()
        .add_client(other_client.clone(), client_id_on_b());
    let msg = register_bridge_msg(
        relayer.chain_a(),
        relayer.chain_b(),
        ift_denom(),
        other_client.clone(),
        SendCallConstructor::Cosmos,
    );
    relayer.chain_a_mut().register_bridge(msg).unwrap();

    let over_default = transfer_from_a(relayer.chain_a(), 10, Duration::from_secs(600));
    let (on_default, _) = relayer.chain_a_mut().send_transfer(over_default).unwrap();

    let over_other: MsgTransfer = MsgTransferConfig::builder()
        .sender(sender())
        .receiver(receiver())
        .client_id(other_client.clone())
        .amount(10u64)
        .timeout_timestamp(timeout_after(relayer.chain_a(), Duration::from_secs(600)))
        .build();
    let (on_other, _) = relayer.chain_a_mut().send_transfer(over_other).unwrap();

    assert_eq!(on_default, Sequence::from(1));
    assert_eq!(on_other, Sequence::from(1));
    assert_eq!(
        relayer
            .chain_a()
            .next_sequence(&ift_denom(), &other_client)
            .unwrap(),
        Sequence::from(2)
    );
}

#[test_log::test]
fn unregistered_bridge_on_destination_yields_error_ack() {
    let mut relayer = funded_chains(false);
    let denom: Denom = "uatom".parse().unwrap();

    // registered on A only
    let msg = register_bridge_msg(
        relayer.chain_a(),
        relayer.chain_b(),
        denom.clone(),
        client_id_on_a(),
        SendCallConstructor::Cosmos,
    );
    relayer.chain_a_mut().register_bridge(msg).unwrap();
    relayer
        .chain_a_mut()
        .fund(&sender(), &Coin::new(denom.clone(), 500u64))
        .unwrap();

    let transfer: MsgTransfer = MsgTransferConfig::builder()
        .sender(sender())
        .receiver(receiver())
        .denom(denom.clone())
        .amount(500u64)
        .timeout_timestamp(timeout_after(relayer.chain_a(), Duration::from_secs(600)))
        .build();
    let (_, packet) = relayer.chain_a_mut().send_transfer(transfer).unwrap();

    let ack = relayer.relay_recv_packet_on_b(&packet).unwrap();
    let status = AcknowledgementStatus::try_from(&ack).unwrap();
    assert!(!status.is_successful());
    assert!(status.to_string().contains("no bridge registered"));
    assert!(relayer.chain_b().balance(&receiver(), &denom).is_zero());

    let (_, outcome) = relayer.relay_ack_packet_on_a(&packet).unwrap();
    assert_eq!(outcome, CallbackOutcome::Handled(TransferOutcome::Refunded));
    assert_eq!(
        relayer.chain_a().balance(&sender(), &denom),
        Amount::from(500u64)
    );
}

#[test_log::test]
fn registration_requires_authority() {
    let mut relayer = bridged_chains(false);
    let denom: Denom = "uatom".parse().unwrap();

    let mut msg = register_bridge_msg(
        relayer.chain_a(),
        relayer.chain_b(),
        denom.clone(),
        client_id_on_a(),
        SendCallConstructor::Cosmos,
    );
    msg.authority = sender();

    let err = relayer.chain_a_mut().register_bridge(msg).unwrap_err();
    assert!(matches!(err, ChainError::Ift(IftError::Unauthorized { .. })));

    let err = relayer
        .chain_a()
        .bridge_registration(&denom, &client_id_on_a())
        .unwrap_err();
    assert!(matches!(err, IftError::BridgeNotRegistered { .. }));
}

#[test_log::test]
fn duplicate_registration_is_rejected() {
    let mut relayer = bridged_chains(false);

    let msg = register_bridge_msg(
        relayer.chain_a(),
        relayer.chain_b(),
        ift_denom(),
        client_id_on_a(),
        SendCallConstructor::Evm,
    );

    let err = relayer.chain_a_mut().register_bridge(msg).unwrap_err();
    assert!(matches!(
        err,
        ChainError::Ift(IftError::BridgeAlreadyRegistered { .. })
    ));

    // the first registration stands
    let registration = relayer
        .chain_a()
        .bridge_registration(&ift_denom(), &client_id_on_a())
        .unwrap();
    assert_eq!(
        registration.send_call_constructor,
        SendCallConstructor::Cosmos
    );
}

/// Registers a bridge of the IFT denomination towards a non-Cosmos
/// counterparty over a fresh client of `A`.
fn bridge_to_foreign_vm(
    relayer: &mut RelayerContext,
    constructor: SendCallConstructor,
    counterparty_address: &str,
) -> ClientId {
    let client_id = ClientId::new("08-wasm", 0).unwrap();
    let counterparty_client = ClientId::new("light-client", 0).unwrap();

    let chain_a = relayer.chain_a_mut();
    chain_a.add_client(client_id.clone(), counterparty_client);

    let mut msg = register_bridge_msg(
        chain_a,
        chain_a,
        ift_denom(),
        client_id.clone(),
        constructor,
    );
    msg.counterparty_address = counterparty_address.to_string();
    chain_a.register_bridge(msg).unwrap();

    client_id
}

fn sent_packet_data(chain: &MockChain) -> PacketData {
    let packet = chain.gmp.last_sent_packet().expect("a packet was sent");
    let gmp_data = packet.gmp_data().unwrap();
    PacketData::decode(&gmp_data.payload).unwrap()
}

#[test_log::test]
fn evm_bridge_emits_mint_call() {
    let mut relayer = funded_chains(false);
    let client_id = bridge_to_foreign_vm(
        &mut relayer,
        SendCallConstructor::Evm,
        "0x5FbDB2315678afecb367f032d93F642f64180aa3",
    );

    let msg: MsgTransfer = MsgTransferConfig::builder()
        .sender(sender())
        .receiver(Signer::from("0x1111111111111111111111111111111111111111"))
        .client_id(client_id.clone())
        .amount(AMOUNT / 2)
        .timeout_timestamp(timeout_after(relayer.chain_a(), Duration::from_secs(600)))
        .build();
    relayer.chain_a_mut().send_transfer(msg).unwrap();

    let packet = relayer.chain_a().gmp.last_sent_packet().unwrap().clone();
    assert_eq!(
        packet.gmp_data().unwrap().receiver,
        "0x5FbDB2315678afecb367f032d93F642f64180aa3"
    );

    let call = sent_packet_data(relayer.chain_a()).call;
    let bytes = call.as_bytes();
    assert_eq!(bytes.len(), 4 + 32 + 32);
    assert_eq!(bytes[..4], EVM_MINT_SELECTOR);
    assert_eq!(bytes[16..36], [0x11u8; 20]);
    assert_eq!(bytes[36..], Amount::from(AMOUNT / 2).to_be_bytes());

    // an address the counterparty cannot decode never leaves the chain
    let bad: MsgTransfer = MsgTransferConfig::builder()
        .sender(sender())
        .receiver(receiver())
        .client_id(client_id.clone())
        .amount(10u64)
        .timeout_timestamp(timeout_after(relayer.chain_a(), Duration::from_secs(600)))
        .build();
    let err = relayer.chain_a_mut().send_transfer(bad).unwrap_err();
    assert!(matches!(
        err,
        ChainError::Ift(IftError::InvalidReceiverAddress { .. })
    ));
    assert_eq!(
        relayer
            .chain_a()
            .next_sequence(&ift_denom(), &client_id)
            .unwrap(),
        Sequence::from(2)
    );
}

#[test_log::test]
fn solana_bridge_emits_anchor_instruction() {
    let mut relayer = funded_chains(false);
    let client_id = bridge_to_foreign_vm(
        &mut relayer,
        SendCallConstructor::Solana,
        "IFTprogram1111111111111111111111111111111111",
    );

    let msg: MsgTransfer = MsgTransferConfig::builder()
        .sender(sender())
        .receiver(Signer::from("4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T"))
        .client_id(client_id)
        .amount(AMOUNT)
        .timeout_timestamp(timeout_after(relayer.chain_a(), Duration::from_secs(600)))
        .build();
    relayer.chain_a_mut().send_transfer(msg).unwrap();

    let call = sent_packet_data(relayer.chain_a()).call;
    assert_eq!(call.as_bytes()[..8], SolanaEncoder::discriminator());
    assert!(balance_on_a(&relayer).is_zero());
}

#[test_log::test]
fn disabled_send_rejects_transfers() {
    let mut relayer = funded_chains(false);
    relayer.chain_a_mut().ift.set_send_enabled(false);

    let msg = transfer_from_a(relayer.chain_a(), AMOUNT, Duration::from_secs(600));
    let err = relayer.chain_a_mut().send_transfer(msg).unwrap_err();

    assert!(matches!(err, ChainError::Ift(IftError::SendDisabled { .. })));
    assert_eq!(balance_on_a(&relayer), Amount::from(AMOUNT));
    assert_eq!(relayer.chain_a().ift.pending_transfer_count(), 0);
}

#[test_log::test]
fn module_address_is_configured_once() {
    let relayer = bridged_chains(false);
    let chain_a = relayer.chain_a();

    assert_eq!(
        chain_a.ift.config().module_address(),
        &chain_a.ift_module_address()
    );
    assert!(chain_a
        .ift_module_address()
        .as_str()
        .starts_with(CHAIN_A_PREFIX));
    assert_ne!(
        chain_a.ift_module_address().as_str(),
        relayer.chain_b().ift_module_address().as_str()
    );
}
