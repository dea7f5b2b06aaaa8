use core::time::Duration;
use std::thread;

use ift_primitives::Sequence;
use ift_testkit::context::SharedChain;
use ift_testkit::fixtures::ift::{
    bridged_chains, client_id_on_a, ift_denom, MsgTransferConfig, CHAIN_A_PREFIX,
};
use ift_testkit::utils::dummy_account;
use ift_transfer::types::msgs::MsgTransfer;
use ift_transfer::types::{Amount, Coin};
use test_log::test;

const SENDERS: u8 = 4;
const TRANSFERS_PER_SENDER: u64 = 5;
const AMOUNT: u64 = 10;

fn send_from(chain: &SharedChain, seed: u8) -> Sequence {
    let mut chain = chain.lock();

    let timeout = chain
        .host_timestamp()
        .checked_add(Duration::from_secs(600))
        .expect("no overflow");

    let msg: MsgTransfer = MsgTransferConfig::builder()
        .sender(dummy_account(CHAIN_A_PREFIX, seed))
        .amount(AMOUNT)
        .timeout_timestamp(timeout)
        .build();

    let (sequence, _) = chain.send_transfer(msg).expect("transfer succeeds");
    sequence
}

#[test]
fn transfers_from_many_threads_get_distinct_sequences() {
    let (mut chain_a, _) = bridged_chains(false).into_chains();

    for seed in 1..=SENDERS {
        chain_a
            .fund(
                &dummy_account(CHAIN_A_PREFIX, seed),
                &Coin::new(ift_denom(), AMOUNT * TRANSFERS_PER_SENDER),
            )
            .unwrap();
    }

    let shared = chain_a.into_shared();

    let mut sequences: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = (1..=SENDERS)
            .map(|seed| {
                let shared = &shared;
                scope.spawn(move || {
                    (0..TRANSFERS_PER_SENDER)
                        .map(|_| send_from(shared, seed).value())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().expect("sender thread panicked"))
            .collect()
    });

    let total = u64::from(SENDERS) * TRANSFERS_PER_SENDER;

    sequences.sort_unstable();
    assert_eq!(sequences, (1..=total).collect::<Vec<_>>());

    let chain_a = shared.lock();
    assert_eq!(
        chain_a
            .pending_transfers(&ift_denom(), &client_id_on_a())
            .unwrap()
            .len() as u64,
        total
    );
    assert_eq!(
        chain_a
            .next_sequence(&ift_denom(), &client_id_on_a())
            .unwrap(),
        Sequence::from(total + 1)
    );
    for seed in 1..=SENDERS {
        assert_eq!(
            chain_a.balance(&dummy_account(CHAIN_A_PREFIX, seed), &ift_denom()),
            Amount::zero()
        );
    }
}
