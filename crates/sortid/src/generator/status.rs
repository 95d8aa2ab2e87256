use crate::Ulid;

/// Represents the result of attempting to generate a new ID.
///
/// - [`IdGenStatus::Ready`] indicates a new ID was successfully generated.
/// - [`IdGenStatus::Pending`] means the generator cannot produce a new ID
///   until the clock advances by `yield_for` milliseconds.
///
/// This allows non-blocking generation loops and clean backoff strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdGenStatus {
    /// A unique ID was generated and is ready to use.
    Ready {
        /// The generated ID.
        id: Ulid,
    },
    /// No ID could be generated: either the random component is exhausted for
    /// the current millisecond, or the clock is behind the last issued ID.
    Pending {
        /// Milliseconds to wait before trying again.
        yield_for: u64,
    },
}
