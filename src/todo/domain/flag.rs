//! Completion flag for todo records.

use super::ParseDoneFlagError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-valued completion flag, stored and serialised as the integers 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DoneFlag {
    /// Work item is still open.
    Pending,
    /// Work item is finished.
    Done,
}

impl DoneFlag {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_i16(self) -> i16 {
        match self {
            Self::Pending => 0,
            Self::Done => 1,
        }
    }
}

impl From<DoneFlag> for u8 {
    fn from(flag: DoneFlag) -> Self {
        match flag {
            DoneFlag::Pending => 0,
            DoneFlag::Done => 1,
        }
    }
}

impl TryFrom<u8> for DoneFlag {
    type Error = ParseDoneFlagError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Done),
            other => Err(ParseDoneFlagError(i64::from(other))),
        }
    }
}

impl TryFrom<i16> for DoneFlag {
    type Error = ParseDoneFlagError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Pending),
            1 => Ok(Self::Done),
            other => Err(ParseDoneFlagError(i64::from(other))),
        }
    }
}

impl fmt::Display for DoneFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i16())
    }
}
