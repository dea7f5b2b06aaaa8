//! Defines the representation of timestamps used by IFT hosts.

use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;
use core::time::Duration;

use crate::prelude::*;
use crate::TimestampError;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// A point in time expressed as nanoseconds since the Unix epoch.
///
/// Hosts report their block time as a `Timestamp`, and packets carry their
/// expiry as one. The zero value is a valid timestamp (the epoch); whether a
/// zero timeout is acceptable is decided by the message validation, not here.
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshSerialize, borsh::BorshDeserialize)
)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const fn from_nanoseconds(nanoseconds: u64) -> Self {
        Self(nanoseconds)
    }

    pub fn from_unix_seconds(secs: u64) -> Result<Self, TimestampError> {
        secs.checked_mul(NANOS_PER_SEC)
            .map(Self)
            .ok_or(TimestampError::Overflow)
    }

    pub fn nanoseconds(self) -> u64 {
        self.0
    }

    /// Returns the timestamp advanced by `duration`.
    pub fn checked_add(self, duration: Duration) -> Result<Self, TimestampError> {
        let nanos = u64::try_from(duration.as_nanos()).map_err(|_| TimestampError::Overflow)?;
        self.0
            .checked_add(nanos)
            .map(Self)
            .ok_or(TimestampError::Overflow)
    }

    /// Computes the duration elapsed since `earlier`, or `None` if `earlier`
    /// is in the future relative to `self`.
    pub fn duration_since(&self, earlier: &Self) -> Option<Duration> {
        self.0.checked_sub(earlier.0).map(Duration::from_nanos)
    }

    /// Returns `true` if `self` is at or after the given deadline.
    pub fn has_reached(&self, deadline: &Self) -> bool {
        self >= deadline
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|e| TimestampError::InvalidString {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> u64 {
        ts.0
    }
}
