use core::cmp::Ordering;
use core::time::Duration;
use parking_lot::Mutex;
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{IdGenStatus, RandSource, TimeSource, Ulid};

/// A lock-based *monotonic* ID generator suitable for multi-threaded
/// environments.
///
/// The last issued ID lives behind an [`Arc<Mutex<_>>`], so clones of a
/// generator share state and never hand out the same value twice.
///
/// - A new millisecond starts from a fresh random component.
/// - Within the same millisecond the random component is incremented, so IDs
///   issued by one generator are strictly increasing.
/// - If the clock is behind the last issued timestamp, the generator reports
///   [`IdGenStatus::Pending`] until it catches up.
///
/// `parking_lot` mutexes do not poison, so generation is infallible.
pub struct LockMonoUlidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    state: Arc<Mutex<Ulid>>,
    time: T,
    rng: R,
}

impl<T, R> LockMonoUlidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new generator with the provided time source and RNG.
    ///
    /// # Example
    /// ```
    /// use sortid::{IdGenStatus, LockMonoUlidGenerator, SystemClock, ThreadRandom};
    ///
    /// let generator = LockMonoUlidGenerator::new(SystemClock, ThreadRandom);
    ///
    /// let id = loop {
    ///     match generator.next_id() {
    ///         IdGenStatus::Ready { id } => break id,
    ///         IdGenStatus::Pending { .. } => std::thread::yield_now(),
    ///     }
    /// };
    /// assert_eq!(id.to_string().len(), 26);
    /// ```
    pub fn new(time: T, rng: R) -> Self {
        Self::from_components(0, 0, time, rng)
    }

    /// Creates a generator whose last issued ID is `(timestamp, random)`.
    ///
    /// Useful for resuming after a known ID or for pinning state in tests.
    /// Prefer [`Self::new`] otherwise.
    pub fn from_components(timestamp: u64, random: u128, time: T, rng: R) -> Self {
        Self {
            state: Arc::new(Mutex::new(Ulid::from_components(timestamp, random))),
            time,
            rng,
        }
    }

    /// Attempts to generate a new ID without blocking.
    ///
    /// Returns [`IdGenStatus::Pending`] when the random component is
    /// exhausted for the current millisecond or the clock has moved
    /// backwards.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn next_id(&self) -> IdGenStatus {
        // Readings past the 48-bit range pin to the last representable
        // millisecond so the Equal branch keeps IDs increasing there.
        let now = self.time.current_millis().min(Ulid::max_timestamp());
        let mut id = self.state.lock();
        let current_ts = id.timestamp();

        match now.cmp(&current_ts) {
            Ordering::Equal => {
                if id.has_random_room() {
                    *id = id.increment_random();
                    IdGenStatus::Ready { id: *id }
                } else {
                    IdGenStatus::Pending { yield_for: 1 }
                }
            }
            Ordering::Greater => {
                *id = Ulid::from_components(now, self.rng.rand());
                IdGenStatus::Ready { id: *id }
            }
            Ordering::Less => Self::cold_clock_behind(now, current_ts),
        }
    }

    /// Generates a new ID, waiting out any [`IdGenStatus::Pending`] result.
    pub fn next_ulid(&self) -> Ulid {
        loop {
            match self.next_id() {
                IdGenStatus::Ready { id } => break id,
                IdGenStatus::Pending { yield_for } => {
                    std::thread::sleep(Duration::from_millis(yield_for));
                }
            }
        }
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(now: u64, current_ts: u64) -> IdGenStatus {
        let yield_for = current_ts - now;
        #[cfg(feature = "tracing")]
        tracing::debug!(now, current_ts, yield_for, "clock behind last issued id");
        IdGenStatus::Pending { yield_for }
    }
}

impl<T, R> Clone for LockMonoUlidGenerator<T, R>
where
    T: TimeSource + Clone,
    R: RandSource + Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            time: self.time.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl<T, R> core::fmt::Debug for LockMonoUlidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LockMonoUlidGenerator")
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}
