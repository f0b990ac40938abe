//! Scalar codecs for the API's string-encoded numbers and timestamps.
//!
//! Etherscan transports every number as a JSON string, including values
//! too large for 64 bits (wei balances) and unix timestamps. The wrappers
//! here decode those strings once, at the envelope boundary, so endpoint
//! records carry real numeric types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Arbitrary-precision integer carried as a decimal string on the wire.
///
/// An empty string decodes to zero: the API leaves some balance fields
/// blank instead of writing `"0"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigInt(num_bigint::BigInt);

impl BigInt {
    pub fn into_inner(self) -> num_bigint::BigInt {
        self.0
    }

    pub fn as_inner(&self) -> &num_bigint::BigInt {
        &self.0
    }
}

impl From<num_bigint::BigInt> for BigInt {
    fn from(value: num_bigint::BigInt) -> Self {
        BigInt(value)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        BigInt(num_bigint::BigInt::from(value))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        BigInt(num_bigint::BigInt::from(value))
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Ok(BigInt::default());
        }
        s.parse::<num_bigint::BigInt>()
            .map(BigInt)
            .map_err(|_| Error::MalformedNumber(s.to_owned()))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Absolute point in time carried as decimal unix seconds on the wire.
///
/// Stores the seconds value itself, so the full `i64` range decodes and
/// re-encodes unchanged. Calendar conversion happens only on demand in
/// [`UnixTime::datetime`], which is where chrono's narrower range can
/// come up empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixTime(i64);

impl UnixTime {
    pub fn from_secs(secs: i64) -> Self {
        UnixTime(secs)
    }

    pub fn secs(self) -> i64 {
        self.0
    }

    /// Calendar view of the timestamp. `None` for values outside
    /// chrono's representable range (roughly ±262,000 years).
    pub fn datetime(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.0, 0).single()
    }
}

impl From<DateTime<Utc>> for UnixTime {
    fn from(value: DateTime<Utc>) -> Self {
        UnixTime(value.timestamp())
    }
}

impl FromStr for UnixTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        s.parse()
            .map(UnixTime)
            .map_err(|_| Error::MalformedTimestamp(s.to_owned()))
    }
}

impl fmt::Display for UnixTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.secs())
    }
}

impl Serialize for UnixTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.secs())
    }
}

impl<'de> Deserialize<'de> for UnixTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Deserialize a `u64` carried as a decimal JSON string.
pub(crate) mod dec_u64 {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Deserialize an `f64` carried as a decimal JSON string.
pub(crate) mod dec_f64 {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Deserialize a comma-joined list of floats, e.g. the gas oracle's
/// `gasUsedRatio` field. An empty string is an empty list.
pub(crate) mod ratio_list {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(Vec::new());
        }
        text.split(',')
            .map(|part| part.trim().parse().map_err(serde::de::Error::custom))
            .collect()
    }
}
