//! Implementation of the Interoperable Fungible Token (IFT) data structures.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod address;
mod amount;
mod coin;
mod constructor;
mod denom;
mod pending;
mod registration;

pub use address::*;
pub use amount::*;
pub use coin::*;
pub use constructor::*;
pub use denom::*;
pub use pending::*;
pub use registration::*;
pub mod error;
pub mod events;
pub mod msgs;
pub mod packet;
/// Re-exports `U256` from `primitive-types` crate for convenience.
pub use primitive_types::U256;

/// Module identifier for the IFT application.
pub const MODULE_ID_STR: &str = "ift";

/// The successful string used for creating an acknowledgement status,
/// equivalent to `base64::encode(0x01)`.
pub const ACK_SUCCESS_B64: &str = "AQ==";

use ift_gmp_types::acknowledgement::StatusValue;

/// Returns a successful acknowledgement status for the IFT application.
pub fn ack_success_b64() -> StatusValue {
    StatusValue::new(ACK_SUCCESS_B64).expect("ack status value is never supposed to be empty")
}
