//! Bitfield Codec
//!
//! Renders a small unsigned integer as a fixed-length string over a
//! 64-symbol URL-safe alphabet, 6 bits per symbol, least-significant
//! bits in the first symbol. The alphabet is part of the wire contract
//! and must never be reordered.

/// URL-safe alphabet, index = symbol value
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Bits carried per symbol
const BITS_PER_SYMBOL: u32 = 6;

/// Longest symbol string the 32-bit accumulator can hold
const MAX_SYMBOLS: usize = (u32::BITS / BITS_PER_SYMBOL) as usize;

/// Encode `bits` as exactly `width` symbols, low bits first
///
/// Bits beyond `width * 6` are dropped; callers reserve them as zero.
pub fn encode(bits: u32, width: usize) -> String {
    (0..width)
        .map(|i| ALPHABET[((bits >> (BITS_PER_SYMBOL * i as u32)) & 0x3F) as usize] as char)
        .collect()
}

/// Decode a symbol string back to its integer value
///
/// A character outside the alphabet is an error; the caller must treat
/// the surrounding record as malformed rather than defaulting to zero.
/// Strings past the accumulator's capacity are rejected the same way,
/// since they can only come from hand-built wire input.
pub fn decode(s: &str) -> Result<u32, String> {
    if s.len() > MAX_SYMBOLS {
        return Err(format!("flag field too long: {} symbols", s.len()));
    }
    let mut bits = 0u32;
    for (i, ch) in s.bytes().enumerate() {
        let value = ALPHABET
            .iter()
            .position(|&b| b == ch)
            .ok_or_else(|| format!("invalid flag character {:?}", ch as char))?;
        bits |= (value as u32) << (BITS_PER_SYMBOL * i as u32);
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_low_bits_in_first_symbol() {
        // 1 fits entirely in the first symbol
        assert_eq!(encode(1, 2), "BA");
        // 64 is value 1 in the second symbol
        assert_eq!(encode(64, 2), "AB");
    }

    #[test]
    fn zero_is_all_first_symbol() {
        assert_eq!(encode(0, 2), "AA");
    }

    #[test]
    fn max_width_two_value() {
        assert_eq!(encode(4095, 2), "__");
        assert_eq!(decode("__").unwrap(), 4095);
    }

    #[test]
    fn round_trips_every_twelve_bit_value() {
        for bits in 0..4096u32 {
            assert_eq!(decode(&encode(bits, 2)).unwrap(), bits);
        }
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        assert!(decode("A!").is_err());
        assert!(decode("|A").is_err());
        assert!(decode("A=").is_err());
    }

    #[test]
    fn over_length_input_is_rejected_not_a_panic() {
        // 5 symbols (30 bits) still fit
        assert_eq!(decode("AAAAA").unwrap(), 0);
        assert!(decode("AAAAAA").is_err());
        assert!(decode("AAAAAAA").is_err());
    }

    #[test]
    fn extra_width_drops_high_bits() {
        // width 1 keeps only the low 6 bits
        assert_eq!(encode(0b111_000001, 1), "B");
    }
}
