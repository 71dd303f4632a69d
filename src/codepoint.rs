//! UTF-8 codepoint decoding.
//!
//! The remote glyph catalog is keyed by the lowercase hexadecimal Unicode
//! scalar value of the emoji, so the first step of the pipeline is turning
//! the raw UTF-8 bytes of the input character into that scalar.
//!
//! The decoder accepts the full historical 1 through 6 byte encoding forms,
//! not just the modern 4-byte-max subset, because legacy inputs may still
//! carry the 5/6-byte forms.

use crate::error::{Error, Result};

/// Decodes the leading UTF-8 encoded character of `bytes` into its Unicode
/// scalar value.
///
/// Accepts the permissive historical encoding: 1 through 6 byte sequences.
/// Fails with [`Error::Decode`] when the lead byte matches no recognized
/// length prefix (a continuation byte in lead position, or `0xFE`/`0xFF`),
/// or when a required continuation byte is missing or out of range.
///
/// Trailing bytes beyond the first encoded character are ignored; for
/// multi-codepoint emoji sequences this yields the first scalar.
pub fn decode_scalar(bytes: &[u8]) -> Result<u32> {
    let lead = *bytes
        .first()
        .ok_or_else(|| Error::Decode("empty input, expected one UTF-8 character".into()))?;

    let (len, seed) = match lead {
        0x00..=0x7F => (1, u32::from(lead)),
        0xC0..=0xDF => (2, u32::from(lead - 0xC0)),
        0xE0..=0xEF => (3, u32::from(lead - 0xE0)),
        0xF0..=0xF7 => (4, u32::from(lead - 0xF0)),
        0xF8..=0xFB => (5, u32::from(lead - 0xF8)),
        0xFC..=0xFD => (6, u32::from(lead - 0xFC)),
        _ => {
            return Err(Error::Decode(format!(
                "byte 0x{lead:02x} is not a recognized UTF-8 lead byte"
            )));
        }
    };

    let mut scalar = seed;
    for i in 1..len {
        let cont = bytes
            .get(i)
            .copied()
            .filter(|b| (0x80..=0xBF).contains(b))
            .ok_or_else(|| {
                Error::Decode(format!(
                    "missing continuation byte {i} of a {len}-byte sequence"
                ))
            })?;
        scalar = (scalar << 6) | u32::from(cont - 0x80);
    }

    Ok(scalar)
}

/// Decodes the first character of an emoji string. See [`decode_scalar`].
pub fn decode_char(emoji: &str) -> Result<u32> {
    decode_scalar(emoji.as_bytes())
}

/// Renders a scalar value as the lookup key used by the remote glyph
/// catalog: lowercase hexadecimal with no `0x` or `\u` prefix.
pub fn hex_key(scalar: u32) -> String {
    format!("{scalar:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_all_historical_lengths() {
        // 1 byte: 'a'
        assert_eq!(decode_scalar(b"a").unwrap(), 0x61);
        // 2 bytes: U+00E9
        assert_eq!(decode_scalar(&[0xC3, 0xA9]).unwrap(), 0xE9);
        // 3 bytes: U+20AC
        assert_eq!(decode_scalar(&[0xE2, 0x82, 0xAC]).unwrap(), 0x20AC);
        // 4 bytes: U+1F600
        assert_eq!(decode_scalar(&[0xF0, 0x9F, 0x98, 0x80]).unwrap(), 0x1F600);
        // 5 bytes: legacy encoding of 0x200000
        assert_eq!(
            decode_scalar(&[0xF8, 0x88, 0x80, 0x80, 0x80]).unwrap(),
            0x20_0000
        );
        // 6 bytes: legacy encoding of 0x4000000
        assert_eq!(
            decode_scalar(&[0xFC, 0x84, 0x80, 0x80, 0x80, 0x80]).unwrap(),
            0x400_0000
        );
    }

    #[test]
    fn decodes_from_str_input() {
        assert_eq!(decode_char("😀").unwrap(), 0x1F600);
        // Multi-codepoint sequence: first scalar wins.
        assert_eq!(decode_char("1️⃣").unwrap(), '1' as u32);
    }

    #[test]
    fn rejects_unrecognized_lead_bytes() {
        for lead in [0x80u8, 0xBF, 0xFE, 0xFF] {
            let err = decode_scalar(&[lead, 0x80, 0x80]).unwrap_err();
            assert!(matches!(err, Error::Decode(_)), "lead 0x{lead:02x}");
        }
    }

    #[test]
    fn rejects_missing_continuation() {
        assert!(matches!(
            decode_scalar(&[0xC3]),
            Err(Error::Decode(_))
        ));
        assert!(matches!(
            decode_scalar(&[0xF0, 0x9F, 0x98]),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn rejects_non_continuation_in_tail() {
        // 'A' is not in the 0x80..=0xBF continuation range.
        assert!(matches!(
            decode_scalar(&[0xC3, 0x41]),
            Err(Error::Decode(_))
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(decode_scalar(&[]), Err(Error::Decode(_))));
    }

    #[test]
    fn hex_key_is_lowercase_without_prefix() {
        assert_eq!(hex_key(0x1F600), "1f600");
        assert_eq!(hex_key(0x61), "61");
        assert_eq!(hex_key(0xE9), "e9");
    }
}
