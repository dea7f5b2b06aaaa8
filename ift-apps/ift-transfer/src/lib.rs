//! Implementation of the Interoperable Fungible Token (IFT) transfer
//! lifecycle.
//!
//! Tokens leave a chain through [`handler::send_transfer`], which burns or
//! escrows them, records a pending transfer and emits a GMP packet. The
//! destination processes the packet in [`module::on_recv_packet_execute`].
//! The source chain resolves the pending transfer once the transport delivers
//! an acknowledgement or a timeout, through
//! [`callback::dispatch_packet_callback`].
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod callback;
pub mod config;
pub mod context;
pub mod encoder;
pub mod handler;
pub mod module;
pub mod query;

/// Re-exports IFT data structures from the `ift-transfer-types` crate.
pub mod types {
    #[doc(inline)]
    pub use ift_transfer_types::*;
}
