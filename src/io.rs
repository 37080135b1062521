/*!
Exact-bit byte readers and writers for the encoded storage format
(spec §6.1): a 2-byte signed unbiased exponent and a 14-byte trailing
significand, each writable big- or little-endian, plus the bit-length
helpers a variable-width serializer would use to pack them tighter.

Alongside the literal spec interface this module adds the whole-value
16-byte round trip (`to_be_bytes`/`from_be_bytes`/`to_le_bytes`/
`from_le_bytes`), the natural counterpart to [`Float128::to_bits`] and
the convention every `f32`/`f64`-shaped type in the ecosystem exposes.
*/

use crate::repr::{Class, Float128, BIAS};

/// Number of bytes [`write_exponent_be`]/[`write_exponent_le`] always
/// write.
pub const fn get_exponent_byte_count() -> usize {
    2
}

/// Number of bytes [`write_significand_be`]/[`write_significand_le`]
/// always write.
pub const fn get_significand_byte_count() -> usize {
    14
}

fn unbiased_exponent_field(x: Float128) -> i16 {
    (x.raw_exp_code() as i32 - BIAS) as i16
}

/// The significand as stored on the wire: the 112-bit trailing field,
/// with no implicit bit (the implicit bit is reconstructible from the
/// exponent field, so storing it would waste a bit in the 14-byte
/// budget spec §6.1 specifies).
fn wire_significand(x: Float128) -> u128 {
    x.raw_trailing()
}

/// Writes the unbiased exponent of `x` into `buf[..2]` in big-endian
/// order. Returns the number of bytes written (always 2).
///
/// # Panics
///
/// Panics if `buf` is shorter than 2 bytes.
pub fn write_exponent_be(x: Float128, buf: &mut [u8]) -> usize {
    buf[..2].copy_from_slice(&unbiased_exponent_field(x).to_be_bytes());
    2
}

/// As [`write_exponent_be`], little-endian.
pub fn write_exponent_le(x: Float128, buf: &mut [u8]) -> usize {
    buf[..2].copy_from_slice(&unbiased_exponent_field(x).to_le_bytes());
    2
}

/// Writes the 112-bit trailing significand of `x` into `buf[..14]`,
/// most-significant byte first.
///
/// # Panics
///
/// Panics if `buf` is shorter than 14 bytes.
pub fn write_significand_be(x: Float128, buf: &mut [u8]) -> usize {
    let sig = wire_significand(x) << 16; // left-align the 112 bits within a 128-bit word
    let bytes = sig.to_be_bytes();
    buf[..14].copy_from_slice(&bytes[..14]);
    14
}

/// As [`write_significand_be`], little-endian (least-significant byte
/// first).
pub fn write_significand_le(x: Float128, buf: &mut [u8]) -> usize {
    let sig = wire_significand(x);
    let bytes = sig.to_le_bytes();
    buf[..14].copy_from_slice(&bytes[..14]);
    14
}

/// Reads back an exponent written by [`write_exponent_be`].
pub fn read_exponent_be(buf: &[u8]) -> i16 {
    i16::from_be_bytes([buf[0], buf[1]])
}

/// Reads back an exponent written by [`write_exponent_le`].
pub fn read_exponent_le(buf: &[u8]) -> i16 {
    i16::from_le_bytes([buf[0], buf[1]])
}

/// Reads back a trailing significand written by [`write_significand_be`].
pub fn read_significand_be(buf: &[u8]) -> u128 {
    let mut bytes = [0u8; 16];
    bytes[2..16].copy_from_slice(&buf[..14]);
    u128::from_be_bytes(bytes) >> 16
}

/// Reads back a trailing significand written by [`write_significand_le`].
pub fn read_significand_le(buf: &[u8]) -> u128 {
    let mut bytes = [0u8; 16];
    bytes[..14].copy_from_slice(&buf[..14]);
    u128::from_le_bytes(bytes)
}

/// Reconstructs a `Float128` from an exponent/significand pair and a
/// sign, the inverse of writing both fields with the same endianness.
pub fn from_exponent_significand(sign: bool, exponent: i16, trailing: u128) -> Float128 {
    let biased = (exponent as i32 + BIAS) as u32;
    Float128::from_fields(sign, biased, trailing)
}

/// Bit length of the unbiased exponent's magnitude (spec §6.1:
/// `15 - leading_zeros(|exponent|)`), the number of bits a
/// variable-width encoder would actually need to spend on it. `0` for
/// an exponent of exactly zero.
pub fn get_exponent_shortest_bit_length(x: Float128) -> u32 {
    let magnitude = (unbiased_exponent_field(x) as i32).unsigned_abs();
    if magnitude == 0 {
        0
    } else {
        32 - magnitude.leading_zeros()
    }
}

/// Bit length of the 113-bit significand-with-implicit-bit (spec
/// §6.1: `113 - leading_zeros(significand_with_implicit)`). `0` for a
/// zero value.
pub fn get_significand_bit_length(x: Float128) -> u32 {
    let c = match x.classify() {
        Class::Normal(_, _, c) => c,
        Class::Subnormal(_, c) => c,
        _ => 0,
    };
    if c == 0 {
        0
    } else {
        128 - c.leading_zeros()
    }
}

/// The full 16-byte big-endian encoding, most-significant byte first
/// (the natural counterpart to [`Float128::to_bits`]).
pub fn to_be_bytes(x: Float128) -> [u8; 16] {
    x.to_bits().to_be_bytes()
}

/// The full 16-byte little-endian encoding.
pub fn to_le_bytes(x: Float128) -> [u8; 16] {
    x.to_bits().to_le_bytes()
}

/// Inverse of [`to_be_bytes`].
pub fn from_be_bytes(buf: [u8; 16]) -> Float128 {
    Float128::from_bits(u128::from_be_bytes(buf))
}

/// Inverse of [`to_le_bytes`].
pub fn from_le_bytes(buf: [u8; 16]) -> Float128 {
    Float128::from_bits(u128::from_le_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ONE;

    #[test]
    fn byte_counts_are_fixed() {
        assert_eq!(get_exponent_byte_count(), 2);
        assert_eq!(get_significand_byte_count(), 14);
    }

    #[test]
    fn exponent_round_trips_be_and_le() {
        let mut be = [0u8; 2];
        let mut le = [0u8; 2];
        write_exponent_be(ONE, &mut be);
        write_exponent_le(ONE, &mut le);
        assert_eq!(read_exponent_be(&be), 0);
        assert_eq!(read_exponent_le(&le), 0);
    }

    #[test]
    fn significand_round_trips_be_and_le() {
        let mut be = [0u8; 14];
        let mut le = [0u8; 14];
        write_significand_be(ONE, &mut be);
        write_significand_le(ONE, &mut le);
        let rebuilt = read_significand_be(&be);
        assert_eq!(read_significand_le(&le), rebuilt);
    }

    #[test]
    fn full_byte_round_trip() {
        assert_eq!(from_be_bytes(to_be_bytes(ONE)), ONE);
        assert_eq!(from_le_bytes(to_le_bytes(ONE)), ONE);
    }

    #[test]
    fn exponent_and_significand_reconstruct_the_value() {
        let mut exp_buf = [0u8; 2];
        let mut sig_buf = [0u8; 14];
        write_exponent_be(ONE, &mut exp_buf);
        write_significand_be(ONE, &mut sig_buf);
        let exponent = read_exponent_be(&exp_buf);
        let trailing = read_significand_be(&sig_buf);
        let rebuilt = from_exponent_significand(ONE.is_sign_negative(), exponent, trailing);
        assert_eq!(rebuilt, ONE);
    }

    #[test]
    fn significand_bit_length_of_one_is_113() {
        assert_eq!(get_significand_bit_length(ONE), 113);
    }

    #[test]
    fn significand_bit_length_of_zero_is_zero() {
        assert_eq!(get_significand_bit_length(Float128::zero(false)), 0);
    }
}
