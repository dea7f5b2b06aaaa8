//! Messages accepted by the IFT application.
mod mint;
mod register;
mod transfer;

pub use mint::*;
pub use register::*;
pub use transfer::*;
