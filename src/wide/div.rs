//! Long division for the fixed-width limb types.
//!
//! Each entry point widens its operands into a 512-bit workspace and
//! runs one binary (bit-at-a-time) restoring division, shared across
//! widths: a dividend bit is brought down, the running remainder is
//! compared against the divisor, and a quotient bit is set whenever
//! the divisor divides in. This is the direct generalization of
//! spec §4.1's `divrem(n, d)` to every width pair this crate needs
//! (128/128, 256/128, 512/256); termination is bounded by the
//! dividend's bit width and the divisor is required to be nonzero
//! (division by zero is a contract violation, never attempted here).

use super::{U128, U256, U512, WideUint};

fn binary_divrem_512(n: U512, d: U512, width: u32) -> (U512, U512) {
    debug_assert!(!d.is_zero(), "division by zero");
    let mut rem = U512::zero();
    let mut quot = U512::zero();
    for i in (0..width).rev() {
        rem = rem.shl(1);
        if n.bit(i) {
            rem.limbs[0] |= 1;
        }
        if rem >= d {
            rem = rem.overflowing_sub(&d).0;
            quot.limbs[(i / 64) as usize] |= 1u64 << (i % 64);
        }
    }
    (quot, rem)
}

/// 128-bit unsigned division with remainder. Precondition: `d != 0`.
pub fn divrem_u128(n: U128, d: U128) -> (U128, U128) {
    let (q, r) = binary_divrem_512(U512::widen_u128(n), U512::widen_u128(d), 128);
    (q.lo256().lo128(), r.lo256().lo128())
}

/// 256-bit dividend by 128-bit divisor, returning a 256-bit quotient
/// and 128-bit remainder (the divisor is one "word" narrower than the
/// dividend, as used by the binary128 divide path in §4.5.3).
/// Precondition: `d != 0`.
pub fn divrem_u256_by_u128(n: U256, d: U128) -> (U256, U128) {
    let (q, r) = binary_divrem_512(U512::widen_u256(n), U512::widen_u128(d), 256);
    (q.lo256(), r.lo256().lo128())
}

/// 512-bit dividend by 256-bit divisor, returning a 512-bit quotient
/// and 256-bit remainder. Precondition: `d != 0`.
pub fn divrem_u512_by_u256(n: U512, d: U256) -> (U512, U256) {
    let (q, r) = binary_divrem_512(n, U512::widen_u256(d), 512);
    (q, r.lo256())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divrem128_matches_native() {
        let cases: [(u128, u128); 5] = [
            (100, 7),
            (u128::MAX, 3),
            (1, 1),
            (u128::MAX, u128::MAX),
            (0xFFFF_FFFF_FFFF_FFFF_0000_0000_0000_0001, 0x1_0000_0000),
        ];
        for (n, d) in cases {
            let (q, r) = divrem_u128(U128::from_u128(n), U128::from_u128(d));
            assert_eq!(q.to_u128(), n / d, "quot {n} / {d}");
            assert_eq!(r.to_u128(), n % d, "rem {n} / {d}");
        }
    }

    #[test]
    fn divrem256_by_128() {
        // n = 2^200 + 12345, d = 2^100 + 7 (values and expected
        // quotient/remainder computed independently in Python).
        let n = U256::from_limbs([12345, 0, 0, 1 << (200 - 192)]);
        let d = U128::from_u128((1u128 << 100) + 7);
        let (q, r) = divrem_u256_by_u128(n, d);
        assert!(q.hi128().is_zero());
        assert_eq!(q.lo128().to_u128(), 1267650600228229401496703205369);
        assert_eq!(r.to_u128(), 12394);
    }
}
