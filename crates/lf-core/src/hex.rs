//! Two-digit hexadecimal ↔ 8-bit channel codec.
//!
//! Only lowercase digits are accepted. Uppercase input is rejected the
//! same way as any other stray character: the scanner never matches it,
//! and callers outside the scanner get an explicit error.

use crate::error::CoreError;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Decode a single lowercase hex digit to its value in [0, 15].
///
/// # Errors
/// Returns [`CoreError::InvalidHexDigit`] for anything outside `0-9a-f`.
///
/// # Example
/// ```
/// use lf_core::hex::decode_hex_digit;
/// assert_eq!(decode_hex_digit('c').unwrap(), 12);
/// assert!(decode_hex_digit('C').is_err());
/// ```
pub fn decode_hex_digit(digit: char) -> Result<u8, CoreError> {
    match digit {
        '0'..='9' => Ok(digit as u8 - b'0'),
        'a'..='f' => Ok(digit as u8 - b'a' + 10),
        _ => Err(CoreError::InvalidHexDigit { digit }),
    }
}

/// Decode exactly two lowercase hex digits to a channel value.
///
/// # Errors
/// Returns [`CoreError::InvalidHexLength`] if `pair` is not two characters
/// long, or [`CoreError::InvalidHexDigit`] on the first bad character.
///
/// # Example
/// ```
/// use lf_core::hex::decode_hex_byte;
/// assert_eq!(decode_hex_byte("0a").unwrap(), 10);
/// assert_eq!(decode_hex_byte("ff").unwrap(), 255);
/// ```
pub fn decode_hex_byte(pair: &str) -> Result<u8, CoreError> {
    let mut chars = pair.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(hi), Some(lo), None) => Ok(16 * decode_hex_digit(hi)? + decode_hex_digit(lo)?),
        _ => Err(CoreError::InvalidHexLength {
            expected: 2,
            found: pair.chars().count(),
        }),
    }
}

/// Encode a channel value as two lowercase hex digits, zero padded.
///
/// # Example
/// ```
/// use lf_core::hex::encode_hex_byte;
/// assert_eq!(encode_hex_byte(5), "05");
/// assert_eq!(encode_hex_byte(171), "ab");
/// ```
#[must_use]
pub fn encode_hex_byte(value: u8) -> String {
    let mut out = String::with_capacity(2);
    push_hex_byte(&mut out, value);
    out
}

/// Append the two-digit form of `value` to `out`.
#[inline]
pub fn push_hex_byte(out: &mut String, value: u8) {
    out.push(char::from(DIGITS[usize::from(value >> 4)]));
    out.push(char::from(DIGITS[usize::from(value & 0x0f)]));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_roundtrip_all_bytes() {
        for n in 0..=255u8 {
            let hex = encode_hex_byte(n);
            assert_eq!(hex.len(), 2, "{n} encodé en {hex}");
            assert_eq!(decode_hex_byte(&hex).unwrap(), n);
        }
    }

    #[test]
    fn leading_zero_is_preserved() {
        let value = decode_hex_byte("0a").unwrap();
        assert_eq!(value, 10);
        assert_eq!(encode_hex_byte(value), "0a");
    }

    #[test]
    fn high_nibble_comes_first() {
        assert_eq!(encode_hex_byte(0x1f), "1f");
        assert_eq!(decode_hex_byte("1f").unwrap(), 31);
    }

    #[test]
    fn rejects_uppercase_and_garbage() {
        assert_eq!(
            decode_hex_byte("A0"),
            Err(CoreError::InvalidHexDigit { digit: 'A' })
        );
        assert_eq!(
            decode_hex_byte("0g"),
            Err(CoreError::InvalidHexDigit { digit: 'g' })
        );
        assert_eq!(
            decode_hex_digit('#'),
            Err(CoreError::InvalidHexDigit { digit: '#' })
        );
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            decode_hex_byte("a"),
            Err(CoreError::InvalidHexLength { expected: 2, found: 1 })
        ));
        assert!(matches!(
            decode_hex_byte("abc"),
            Err(CoreError::InvalidHexLength { expected: 2, found: 3 })
        ));
    }
}
