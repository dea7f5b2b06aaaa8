//! Data structures of the generic message passing (GMP) transport.
//!
//! The transport itself (proof verification, relaying, delivery guarantees)
//! lives outside of this workspace; these types describe what it hands to
//! applications and what applications hand back.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod acknowledgement;
pub mod commitment;
pub mod error;
pub mod gmp;
pub mod packet;
