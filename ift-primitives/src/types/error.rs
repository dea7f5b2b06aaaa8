//! Foundational error types shared by the IFT crates.

use displaydoc::Display;

use crate::prelude::*;

/// Errors that originate from host implementations.
#[derive(Debug, Display)]
pub enum HostError {
    /// invalid data: `{description}`
    InvalidData { description: String },
    /// missing data: `{description}`
    MissingData { description: String },
    /// failed to store data: `{description}`
    FailedToStoreData { description: String },
    /// failed to retrieve data from store: `{description}`
    FailedToRetrieveFromStore { description: String },
    /// failed to parse data: `{description}`
    FailedToParseData { description: String },
    /// other error: `{description}`
    Other { description: String },
}

impl HostError {
    pub fn invalid_data<T: ToString>(description: T) -> Self {
        Self::InvalidData {
            description: description.to_string(),
        }
    }

    pub fn missing_data<T: ToString>(description: T) -> Self {
        Self::MissingData {
            description: description.to_string(),
        }
    }

    pub fn failed_to_store<T: ToString>(description: T) -> Self {
        Self::FailedToStoreData {
            description: description.to_string(),
        }
    }

    pub fn failed_to_retrieve<T: ToString>(description: T) -> Self {
        Self::FailedToRetrieveFromStore {
            description: description.to_string(),
        }
    }

    pub fn failed_to_parse<T: ToString>(description: T) -> Self {
        Self::FailedToParseData {
            description: description.to_string(),
        }
    }
}

/// Errors that arise when parsing identifiers.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum IdentifierError {
    /// id `{id}` has invalid length; must be between [`{min}`,`{max}`]
    InvalidLength { id: String, min: u64, max: u64 },
    /// id `{id}` can only contain alphanumeric characters or `.`, `_`, `+`, `-`, `#`, - `[`, `]`, `<`, `>`
    InvalidCharacter { id: String },
    /// identifier cannot be empty
    Empty,
    /// failed to parse `{value}` as a sequence: `{reason}`
    InvalidStringAsSequence { value: String, reason: String },
}

/// Errors that arise when constructing or manipulating timestamps.
#[derive(Debug, Display, PartialEq, Eq)]
pub enum TimestampError {
    /// timestamp overflowed
    Overflow,
    /// failed to parse `{value}` as nanoseconds: `{reason}`
    InvalidString { value: String, reason: String },
}

#[cfg(feature = "std")]
impl std::error::Error for HostError {}

#[cfg(feature = "std")]
impl std::error::Error for IdentifierError {}

#[cfg(feature = "std")]
impl std::error::Error for TimestampError {}
