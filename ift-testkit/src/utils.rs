use ift_primitives::{Signer, Timestamp};
use ift_transfer::types::bech32_account;

/// Returns a `Timestamp` representation of beginning of year 2023.
///
/// Used as the default genesis time of mock chains, so that two chains
/// built from the same config agree on the time.
pub fn year_2023() -> Timestamp {
    // Sun Jan 01 2023 00:00:00 GMT+0000
    Timestamp::from_unix_seconds(1_672_531_200).expect("should be a valid time")
}

/// A well-formed 20-byte user account on the chain using `prefix`, distinct
/// for every `seed`.
pub fn dummy_account(prefix: &str, seed: u8) -> Signer {
    bech32_account(prefix, [seed; 20])
}
