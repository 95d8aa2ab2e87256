/// A trait for random sources that return the random component of an ID.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Only the low 80 bits of the returned value are
/// used.
///
/// # Example
/// ```
/// use sortid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn rand(&self) -> u128 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
pub trait RandSource {
    /// Returns a random integer.
    fn rand(&self) -> u128;
}
