use super::{ENCODED_LEN, decode_base32, encode_base32};
use crate::{Result, Ulid};
use core::fmt;

impl Ulid {
    /// Returns a formatter holding the Crockford base32 representation of the
    /// ID.
    ///
    /// The formatter is a stack-allocated view that implements
    /// [`core::fmt::Display`] and [`AsRef<str>`].
    ///
    /// # Example
    ///
    /// ```
    /// use sortid::Ulid;
    ///
    /// let id = Ulid::from_raw(2_424_242_424_242_424_242);
    /// assert_eq!(id.encode(), "000000000000023953MG16DJDJ");
    /// ```
    pub const fn encode(&self) -> Base32UlidFormatter {
        Base32UlidFormatter {
            buf: encode_base32(self.to_raw()),
        }
    }

    /// Decodes a 26-character Crockford base32 string into an ID.
    ///
    /// Lower-case input is accepted. The result always satisfies the layout, so
    /// a successful decode is a structurally valid identifier.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidFormat`] if the input has the wrong
    /// length, contains characters outside the alphabet, or overflows 128
    /// bits.
    ///
    /// # Example
    ///
    /// ```
    /// use sortid::Ulid;
    ///
    /// let id = Ulid::decode("01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap();
    /// assert_eq!(id.timestamp(), 1_469_922_850_259);
    ///
    /// assert!(Ulid::decode("invalid-id").is_err());
    /// ```
    pub fn decode(s: impl AsRef<str>) -> Result<Self> {
        let raw = decode_base32(s.as_ref())?;
        Ok(Self::from_raw(raw))
    }
}

/// Owns the encoded bytes of a [`Ulid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base32UlidFormatter {
    buf: [u8; ENCODED_LEN],
}

impl Base32UlidFormatter {
    /// Returns a `&str` view of the base32 encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: `self.buf` holds only Crockford base32 ASCII characters
        unsafe { core::str::from_utf8_unchecked(&self.buf) }
    }

    /// Consumes the formatter and returns the raw buffer.
    #[must_use]
    pub const fn into_inner(self) -> [u8; ENCODED_LEN] {
        self.buf
    }
}

impl fmt::Display for Base32UlidFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Base32UlidFormatter {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Base32UlidFormatter {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Base32UlidFormatter {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<String> for Base32UlidFormatter {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == other.as_str()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, FormatError, Ulid};

    #[test]
    fn ulid_display() {
        let ulid = Ulid::decode("01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap();
        assert_eq!(format!("{ulid}"), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
        assert_eq!(ulid.to_string(), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
    }

    #[test]
    fn ulid_max() {
        let id = Ulid::from_components(Ulid::max_timestamp(), Ulid::max_random());
        let encoded = id.encode();
        assert_eq!(encoded, "7ZZZZZZZZZZZZZZZZZZZZZZZZZ");

        let decoded = Ulid::decode(encoded).unwrap();
        assert_eq!(decoded.timestamp(), Ulid::max_timestamp());
        assert_eq!(decoded.random(), Ulid::max_random());
        assert_eq!(id, decoded);
    }

    #[test]
    fn ulid_known() {
        let id = Ulid::from_components(1_469_922_850_259, 1_012_768_647_078_601_740_696_923);
        let encoded = id.encode();
        assert_eq!(encoded, "01ARZ3NDEKTSV4RRFFQ69G5FAV");
        assert_eq!(Ulid::decode(encoded).unwrap(), id);

        let id = Ulid::from_components(1_611_559_180_765, 885_339_478_614_498_720_052_741);
        let encoded = id.encode();
        assert_eq!(encoded, "01EWW6K6EXQDX5JV0E9CAHPXG5");
        assert_eq!(Ulid::decode(encoded).unwrap(), id);
    }

    #[test]
    fn ulid_zero() {
        let id = Ulid::from_components(0, 0);
        assert_eq!(id.encode(), "00000000000000000000000000");
        assert_eq!(id.encode().into_inner(), [b'0'; 26]);
    }

    #[test]
    fn ulid_decode_errors_are_invalid_format() {
        assert_eq!(
            Ulid::decode(""),
            Err(Error::InvalidFormat(FormatError::InvalidLength { len: 0 }))
        );
        assert_eq!(
            Ulid::decode("ABCDEFGHIJKLMNOPQRSTUVWXYZ"),
            Err(Error::InvalidFormat(FormatError::InvalidAscii {
                byte: b'I',
                index: 8
            }))
        );
        assert_eq!(
            Ulid::decode("8ZZZZZZZZZZZZZZZZZZZZZZZZZ"),
            Err(Error::InvalidFormat(FormatError::Overflow))
        );
    }
}
