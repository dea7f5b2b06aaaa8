//! In-memory implementations of the contexts a host provides to IFT.
pub mod dummy_app;
pub mod gmp;
pub mod ift;
