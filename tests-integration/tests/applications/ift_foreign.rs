use core::time::Duration;

use ift_gmp_types::acknowledgement::AcknowledgementStatus;
use ift_primitives::{Signer, Timestamp};
use ift_testkit::context::MockChain;
use ift_testkit::fixtures::ift::{
    bridged_chains, client_id_on_a, client_id_on_b, ift_denom, MsgTransferConfig, CHAIN_A_PREFIX,
    CHAIN_B_PREFIX,
};
use ift_testkit::relayer::context::RelayerContext;
use ift_testkit::utils::dummy_account;
use ift_transfer::callback::{dispatch_packet_callback, is_sent_by, CallbackOutcome, PacketCallback};
use ift_transfer::encoder::encode_native_call;
use ift_transfer::types::msgs::MsgTransfer;
use ift_transfer::types::packet::PacketData;
use ift_transfer::types::{Amount, Coin, Memo, NativeCall, SendCallConstructor};
use test_log::test;

const AMOUNT: u64 = 1_000;

fn timeout_after(chain: &MockChain, duration: Duration) -> Timestamp {
    chain
        .host_timestamp()
        .checked_add(duration)
        .expect("no overflow")
}

/// Bridged chains with one IFT transfer from `A` pending.
fn chains_with_pending_transfer() -> RelayerContext {
    let mut relayer = bridged_chains(false);
    let sender = dummy_account(CHAIN_A_PREFIX, 1);

    relayer
        .chain_a_mut()
        .fund(&sender, &Coin::new(ift_denom(), AMOUNT))
        .unwrap();

    let msg: MsgTransfer = MsgTransferConfig::builder()
        .sender(sender)
        .amount(AMOUNT)
        .timeout_timestamp(timeout_after(relayer.chain_a(), Duration::from_secs(600)))
        .build();
    relayer.chain_a_mut().send_transfer(msg).unwrap();

    relayer
}

/// The IFT state of a chain, as far as foreign traffic could disturb it.
fn ift_state(chain: &MockChain) -> (usize, usize, Amount) {
    (
        chain.ift.pending_transfer_count(),
        chain.ift.events.len(),
        chain.total_supply(&ift_denom()),
    )
}

#[test]
fn foreign_ack_is_ignored_by_ift() {
    let mut relayer = chains_with_pending_transfer();
    let before = ift_state(relayer.chain_a());

    let receiver = relayer.chain_b().foreign_app.address().to_string();
    let timeout = timeout_after(relayer.chain_a(), Duration::from_secs(600));
    let packet = relayer
        .chain_a_mut()
        .send_foreign_message(&client_id_on_a(), receiver, b"ping".to_vec(), timeout)
        .unwrap();

    assert!(!is_sent_by(&relayer.chain_a().ift_module_address(), &packet));

    let (ack, outcome) = relayer.relay_round_trip_from_a(&packet).unwrap();

    assert_eq!(outcome, CallbackOutcome::Ignored);
    assert!(AcknowledgementStatus::try_from(&ack)
        .unwrap()
        .is_successful());

    // the foreign application got both ends of its exchange
    assert_eq!(relayer.chain_b().foreign_app.received(), &[b"ping".to_vec()]);
    assert_eq!(relayer.chain_a().foreign_app.acknowledged().len(), 1);

    assert_eq!(ift_state(relayer.chain_a()), before);
    assert_eq!(
        relayer
            .chain_a()
            .pending_transfers(&ift_denom(), &client_id_on_a())
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn foreign_timeout_is_ignored_by_ift() {
    let mut relayer = chains_with_pending_transfer();
    let before = ift_state(relayer.chain_a());

    let receiver = relayer.chain_b().foreign_app.address().to_string();
    let timeout = timeout_after(relayer.chain_a(), Duration::from_secs(10));
    let packet = relayer
        .chain_a_mut()
        .send_foreign_message(&client_id_on_a(), receiver, b"ping".to_vec(), timeout)
        .unwrap();

    relayer.advance_time(Duration::from_secs(11));

    let outcome = relayer.relay_timeout_packet_on_a(&packet).unwrap();

    assert_eq!(outcome, CallbackOutcome::Ignored);
    assert_eq!(relayer.chain_a().foreign_app.timed_out(), &[packet]);
    assert_eq!(ift_state(relayer.chain_a()), before);
}

#[test]
fn undecodable_packet_is_foreign() {
    let mut relayer = chains_with_pending_transfer();
    let mut packet = relayer.chain_a().gmp.last_sent_packet().unwrap().clone();
    packet.data = b"not a gmp envelope".to_vec();

    let chain_a = relayer.chain_a_mut();
    let module_address = chain_a.ift_module_address();
    let before = ift_state(chain_a);

    let (extras, outcome) = dispatch_packet_callback(
        &mut chain_a.ift,
        &module_address,
        &packet,
        PacketCallback::Timeout,
        &dummy_account(CHAIN_A_PREFIX, 0xff),
    )
    .unwrap();

    assert_eq!(outcome, CallbackOutcome::Ignored);
    assert!(extras.events.is_empty());
    assert_eq!(ift_state(chain_a), before);
}

#[test]
fn ift_packet_from_unregistered_sender_is_rejected() {
    let mut relayer = bridged_chains(false);
    let receiver = dummy_account(CHAIN_B_PREFIX, 2);

    // a well-formed IFT payload, but sent by the foreign application rather
    // than the IFT module registered as counterparty
    let mut data = PacketData {
        denom: ift_denom(),
        amount: Amount::from(AMOUNT),
        sender: dummy_account(CHAIN_A_PREFIX, 1),
        receiver: receiver.clone(),
        memo: Memo::default(),
        call: NativeCall::default(),
    };
    data.call = encode_native_call(SendCallConstructor::Cosmos, &data).unwrap();

    let ift_on_b = relayer.chain_b().ift_module_address().to_string();
    let timeout = timeout_after(relayer.chain_a(), Duration::from_secs(600));
    let packet = relayer
        .chain_a_mut()
        .send_foreign_message(&client_id_on_a(), ift_on_b, data.encode().unwrap(), timeout)
        .unwrap();

    let ack = relayer.relay_recv_packet_on_b(&packet).unwrap();
    let status = AcknowledgementStatus::try_from(&ack).unwrap();

    assert!(!status.is_successful());
    assert!(status.to_string().contains("counterparty"));
    assert!(relayer.chain_b().balance(&receiver, &ift_denom()).is_zero());
    assert!(relayer.chain_b().total_supply(&ift_denom()).is_zero());

    // the error acknowledgement goes back to the foreign application only
    let (_, outcome) = relayer.relay_ack_packet_on_a(&packet).unwrap();
    assert_eq!(outcome, CallbackOutcome::Ignored);
    assert_eq!(relayer.chain_a().foreign_app.acknowledged().len(), 1);
}

#[test]
fn unknown_gmp_receiver_gets_error_ack() {
    let mut relayer = bridged_chains(false);

    let timeout = timeout_after(relayer.chain_b(), Duration::from_secs(600));
    let packet = relayer
        .chain_b_mut()
        .send_foreign_message(
            &client_id_on_b(),
            Signer::from("cosmos1nobody").to_string(),
            b"ping".to_vec(),
            timeout,
        )
        .unwrap();

    let (ack, outcome) = relayer.relay_round_trip_from_b(&packet).unwrap();

    assert!(!AcknowledgementStatus::try_from(&ack)
        .unwrap()
        .is_successful());
    assert_eq!(outcome, CallbackOutcome::Ignored);
    assert!(relayer.chain_a().foreign_app.received().is_empty());
}
