use thiserror::Error;

/// A result type defaulting to this crate's [`enum@Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced by the identifier service.
///
/// Generation never fails; only operations that interpret a caller-provided
/// token can produce an error.
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The token is not a well-formed identifier.
    #[error("invalid identifier format: {0}")]
    InvalidFormat(#[from] FormatError),
}

impl Error {
    /// Returns the structural reason behind an [`Error::InvalidFormat`].
    #[must_use]
    pub const fn format_error(&self) -> Option<&FormatError> {
        match self {
            Self::InvalidFormat(err) => Some(err),
        }
    }
}

/// Why a token failed structural validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    /// The token is not exactly 26 bytes long.
    #[error("expected 26 characters, got {len}")]
    InvalidLength { len: usize },

    /// The token contains a byte outside the Crockford base32 alphabet.
    #[error("invalid byte 0x{byte:02x} at index {index}")]
    InvalidAscii { byte: u8, index: usize },

    /// The leading character encodes more than 128 bits.
    #[error("value overflows 128 bits")]
    Overflow,
}

/// Validation failures reported by [`crate::Record::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("ID cannot be empty")]
    EmptyId,

    #[error("ID is not a valid ULID: {0}")]
    InvalidId(String),

    #[error("name cannot be empty")]
    EmptyName,

    #[error("value cannot be negative")]
    NegativeValue,
}
