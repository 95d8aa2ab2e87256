use crate::FormatError;

const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: u32 = 5;

/// Number of characters needed to encode a `u128` (ceil(128 / 5)).
pub const ENCODED_LEN: usize = 26;

/// Largest value the leading character may hold. The 26 characters carry 130
/// bits, so only the low 3 bits of the first character fit in a `u128`.
const MAX_LEADING: u8 = 0b111;

/// Lookup table for Crockford base32 decoding.
///
/// Lower-case letters decode like their upper-case forms. The Crockford
/// aliases (`I`, `L`, `O`, `U`) are rejected so that every accepted token has
/// exactly one canonical spelling up to case.
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    while i < 32 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_uppercase() {
            lut[(c + 32) as usize] = i; // lowercase letter
        }
        i += 1;
    }
    lut
};

/// Encodes a `u128` into its fixed-width, upper-case Crockford base32 form.
#[must_use]
pub const fn encode_base32(value: u128) -> [u8; ENCODED_LEN] {
    let mut buf = [0_u8; ENCODED_LEN];
    let mut i = 0;
    while i < ENCODED_LEN {
        let shift = BITS_PER_CHAR * (ENCODED_LEN - 1 - i) as u32;
        buf[i] = ALPHABET[((value >> shift) & 0x1F) as usize];
        i += 1;
    }
    buf
}

/// Decodes a 26-character Crockford base32 string into a `u128`.
///
/// # Errors
///
/// - [`FormatError::InvalidLength`] if the input is not 26 bytes long
/// - [`FormatError::InvalidAscii`] on the first byte outside the alphabet
/// - [`FormatError::Overflow`] if the leading character is above `7`
pub fn decode_base32(encoded: &str) -> Result<u128, FormatError> {
    let bytes = encoded.as_bytes();
    if bytes.len() != ENCODED_LEN {
        return Err(FormatError::InvalidLength { len: bytes.len() });
    }

    let mut acc = 0_u128;
    for (index, &byte) in bytes.iter().enumerate() {
        let val = LOOKUP[byte as usize];
        if val == NO_VALUE {
            return Err(FormatError::InvalidAscii { byte, index });
        }
        acc = (acc << BITS_PER_CHAR) | u128::from(val);
    }

    // Checked after the alphabet scan so a bad character anywhere is reported
    // as such rather than as an overflow.
    if LOOKUP[bytes[0] as usize] > MAX_LEADING {
        return Err(FormatError::Overflow);
    }

    Ok(acc)
}
