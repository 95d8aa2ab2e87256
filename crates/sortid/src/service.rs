//! The identifier service: generate, validate, and interpret IDs.
//!
//! [`IdService::global`] returns a lazily-initialized, process-wide instance
//! backed by the system clock and the thread-local RNG. The free functions at
//! the crate root delegate to it.

use core::cmp::Ordering;
use std::sync::LazyLock;
use std::time::{Duration, SystemTime};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{LockMonoUlidGenerator, RandSource, Result, SystemClock, ThreadRandom, TimeSource, Ulid};

static GLOBAL: LazyLock<IdService> = LazyLock::new(IdService::default);

/// Generates time-ordered IDs and interprets their text form.
///
/// All methods take `&self`; the only shared mutable state is the generator's
/// last issued ID, which sits behind a mutex.
#[derive(Debug)]
pub struct IdService<T = SystemClock, R = ThreadRandom>
where
    T: TimeSource,
    R: RandSource,
{
    generator: LockMonoUlidGenerator<T, R>,
    time: T,
}

impl IdService {
    /// Returns the process-wide service.
    pub fn global() -> &'static Self {
        &GLOBAL
    }
}

impl Default for IdService {
    fn default() -> Self {
        Self::new(SystemClock, ThreadRandom)
    }
}

impl<T, R> IdService<T, R>
where
    T: TimeSource + Clone,
    R: RandSource,
{
    /// Builds a service over an explicit clock and random source.
    ///
    /// The same clock stamps new IDs and serves as "now" for [`Self::age`].
    pub fn new(time: T, rng: R) -> Self {
        Self {
            generator: LockMonoUlidGenerator::new(time.clone(), rng),
            time,
        }
    }
}

impl<T, R> IdService<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Generates a new ID.
    ///
    /// IDs from one service are strictly increasing, including those created
    /// within the same millisecond, and concurrent callers never receive the
    /// same value.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Ulid {
        self.generator.next_ulid()
    }

    /// Returns `true` if `token` is a structurally valid ID: 26 characters of
    /// the Crockford base32 alphabet (either case) whose leading character
    /// does not overflow 128 bits.
    ///
    /// Validity says nothing about whether this process issued the ID.
    #[must_use]
    pub fn is_valid(&self, token: &str) -> bool {
        Ulid::decode(token).is_ok()
    }

    /// Parses `token` into a [`Ulid`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFormat`] if `token` is not valid.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), err(level = "debug")))]
    pub fn parse(&self, token: &str) -> Result<Ulid> {
        Ulid::decode(token)
    }

    /// Returns the creation time embedded in `token`, at millisecond
    /// precision.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFormat`] if `token` is not valid.
    pub fn extract_timestamp(&self, token: &str) -> Result<SystemTime> {
        Ok(self.parse(token)?.datetime())
    }

    /// Returns how long ago `token` was created, measured against this
    /// service's clock.
    ///
    /// IDs stamped in the future (clock skew between hosts, hand-crafted
    /// tokens) report an age of zero.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFormat`] if `token` is not valid.
    pub fn age(&self, token: &str) -> Result<Duration> {
        let id = self.parse(token)?;
        let now = self.time.current_millis();
        Ok(Duration::from_millis(now.saturating_sub(id.timestamp())))
    }

    /// Orders two tokens chronologically.
    ///
    /// IDs are compared by embedded timestamp; IDs from the same millisecond
    /// fall back to the byte order of the tokens as given. For canonical
    /// (upper-case) tokens that is the order of their random bits.
    ///
    /// Use `as i8` on the result for a `-1`/`0`/`1` value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFormat`] if either token is not valid.
    pub fn compare(&self, a: &str, b: &str) -> Result<Ordering> {
        let a_id = self.parse(a)?;
        let b_id = self.parse(b)?;
        Ok(a_id
            .timestamp()
            .cmp(&b_id.timestamp())
            .then_with(|| a.cmp(b)))
    }
}

/// Generates a new ID using [`IdService::global`].
pub fn generate() -> Ulid {
    IdService::global().generate()
}

/// Validates `token` using [`IdService::global`].
#[must_use]
pub fn is_valid(token: &str) -> bool {
    IdService::global().is_valid(token)
}

/// Extracts the creation time of `token` using [`IdService::global`].
///
/// # Errors
///
/// Returns [`crate::Error::InvalidFormat`] if `token` is not valid.
pub fn extract_timestamp(token: &str) -> Result<SystemTime> {
    IdService::global().extract_timestamp(token)
}

/// Computes the age of `token` using [`IdService::global`].
///
/// # Errors
///
/// Returns [`crate::Error::InvalidFormat`] if `token` is not valid.
pub fn age(token: &str) -> Result<Duration> {
    IdService::global().age(token)
}

/// Orders two tokens chronologically using [`IdService::global`].
///
/// # Errors
///
/// Returns [`crate::Error::InvalidFormat`] if either token is not valid.
pub fn compare(a: &str, b: &str) -> Result<Ordering> {
    IdService::global().compare(a, b)
}
