mod error;
mod event;
mod identifiers;
mod signer;
mod timestamp;

pub use error::*;
pub use event::*;
pub use identifiers::*;
pub use signer::*;
pub use timestamp::*;
