//! Mock host chains, a mock GMP transport and a relayer for exercising the
//! IFT application end to end.
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces, rust_2018_idioms)]

pub mod context;
pub mod fixtures;
pub mod relayer;
pub mod testapp;
pub mod utils;
