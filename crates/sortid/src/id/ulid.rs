use crate::{Error, RandSource, ThreadRandom};
use core::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A 128-bit time-ordered identifier.
///
/// - 48 bits timestamp (milliseconds since the Unix epoch)
/// - 80 bits random
///
/// ```text
///  Bit Index:  127            80 79           0
///              +----------------+-------------+
///  Field:      | timestamp (48) | random (80) |
///              +----------------+-------------+
///              |<-- MSB -- 128 bits -- LSB -->|
/// ```
///
/// Ordering of `Ulid` values is numeric, which matches both chronological
/// order and the lexicographic order of their canonical text form.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Ulid {
    id: u128,
}

impl Ulid {
    pub const TIMESTAMP_BITS: u32 = 48;
    pub const RANDOM_BITS: u32 = 80;

    pub const RANDOM_SHIFT: u32 = 0;
    pub const TIMESTAMP_SHIFT: u32 = Self::RANDOM_SHIFT + Self::RANDOM_BITS;

    pub const TIMESTAMP_MASK: u128 = (1 << Self::TIMESTAMP_BITS) - 1;
    pub const RANDOM_MASK: u128 = (1 << Self::RANDOM_BITS) - 1;

    /// Packs a timestamp and a random component into an ID.
    ///
    /// Timestamps past [`Self::max_timestamp`] saturate at it, so a later time
    /// never encodes to an earlier ID. Random bits beyond the field's width are
    /// discarded.
    #[must_use]
    pub const fn from_components(timestamp: u64, random: u128) -> Self {
        let timestamp = if timestamp > Self::max_timestamp() {
            Self::max_timestamp()
        } else {
            timestamp
        };
        let t = (timestamp as u128) << Self::TIMESTAMP_SHIFT;
        let r = (random & Self::RANDOM_MASK) << Self::RANDOM_SHIFT;
        Self { id: t | r }
    }

    /// Extracts the timestamp (milliseconds since the Unix epoch).
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        ((self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK) as u64
    }

    /// Extracts the random component.
    #[must_use]
    pub const fn random(&self) -> u128 {
        (self.id >> Self::RANDOM_SHIFT) & Self::RANDOM_MASK
    }

    #[must_use]
    pub const fn max_timestamp() -> u64 {
        Self::TIMESTAMP_MASK as u64
    }

    #[must_use]
    pub const fn max_random() -> u128 {
        Self::RANDOM_MASK
    }

    #[must_use]
    pub const fn to_raw(&self) -> u128 {
        self.id
    }

    /// Every `u128` is a valid layout, so this never fails.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self { id: raw }
    }

    /// Returns true if the random component can be incremented without
    /// spilling into the timestamp.
    #[must_use]
    pub const fn has_random_room(&self) -> bool {
        self.random() < Self::max_random()
    }

    /// Returns a new ID with the same timestamp and the random component
    /// incremented by one.
    #[must_use]
    pub const fn increment_random(&self) -> Self {
        Self::from_components(self.timestamp(), self.random() + 1)
    }

    /// Generates a non-monotonic ID from the current system time and the
    /// built-in [`ThreadRandom`] source.
    ///
    /// This does not keep state, so two IDs created in the same millisecond
    /// are ordered only by chance. Use [`crate::IdService`] when ordering
    /// within a millisecond matters.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(SystemTime::now())
    }

    /// Generates an ID for the given timestamp using [`ThreadRandom`].
    #[must_use]
    pub fn from_timestamp(timestamp: u64) -> Self {
        Self::from_timestamp_and_rand(timestamp, &ThreadRandom)
    }

    /// Generates an ID for the given timestamp using a custom [`RandSource`].
    #[must_use]
    pub fn from_timestamp_and_rand<R>(timestamp: u64, rng: &R) -> Self
    where
        R: RandSource,
    {
        Self::from_components(timestamp, rng.rand())
    }

    /// Generates an ID from a `SystemTime`. Times before the Unix epoch clamp
    /// to zero; times past the 48-bit range clamp to [`Self::max_timestamp`].
    #[must_use]
    pub fn from_datetime(datetime: SystemTime) -> Self {
        let timestamp = datetime
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO)
            .as_millis();
        Self::from_timestamp(u64::try_from(timestamp).unwrap_or(u64::MAX))
    }

    /// Returns the embedded timestamp as a [`SystemTime`].
    ///
    /// Precision is whole milliseconds.
    #[must_use]
    pub fn datetime(&self) -> SystemTime {
        UNIX_EPOCH + Duration::from_millis(self.timestamp())
    }
}

impl fmt::Display for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encode().as_str())
    }
}

impl fmt::Debug for Ulid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ulid")
            .field("id", &format_args!("{}", self.encode()))
            .field("timestamp", &self.timestamp())
            .field("random", &format_args!("0x{:x}", self.random()))
            .finish()
    }
}

impl core::str::FromStr for Ulid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl TryFrom<&str> for Ulid {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::decode(s)
    }
}

impl PartialEq<str> for Ulid {
    fn eq(&self, other: &str) -> bool {
        Self::decode(other).is_ok_and(|id| id == *self)
    }
}

impl PartialEq<&str> for Ulid {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl From<Ulid> for String {
    fn from(val: Ulid) -> Self {
        val.encode().as_str().to_owned()
    }
}

impl From<Ulid> for u128 {
    fn from(val: Ulid) -> Self {
        val.to_raw()
    }
}

impl From<u128> for Ulid {
    fn from(raw: u128) -> Self {
        Self::from_raw(raw)
    }
}
