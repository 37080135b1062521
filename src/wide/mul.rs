//! Partial-product wide multiplication.
//!
//! Each width doubles by combining four half-width partial products,
//! the textbook schoolbook algorithm: splitting `a = a1*2^h + a0` and
//! `b = b1*2^h + b0` gives `a*b = a1*b1*2^2h + (a1*b0 + a0*b1)*2^h +
//! a0*b0`. This file builds 64x64->128, then 128x128->256 on top of
//! it, then 256x256->512 on top of that, per spec §4.1.

use super::{U128, U256, U512, WideUint};

/// Unsigned full product of two 64-bit words, computed from four
/// 32x32->64 partial products (the pure-software accelerator path;
/// see [`crate::accel::SoftAccelerator`] for the trait-level version
/// of this routine).
pub fn widening_mul_u64(a: u64, b: u64) -> (u64, u64) {
    let a_lo = a & 0xFFFF_FFFF;
    let a_hi = a >> 32;
    let b_lo = b & 0xFFFF_FFFF;
    let b_hi = b >> 32;

    let lo_lo = a_lo * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_lo = a_hi * b_lo;
    let hi_hi = a_hi * b_hi;

    // cross = lo_hi + hi_lo, tracking the carry out of the 64-bit sum
    let (cross, carry1) = lo_hi.overflowing_add(hi_lo);
    let carry1 = if carry1 { 1u64 << 32 } else { 0 };

    let (mid, carry2) = lo_lo.overflowing_add(cross << 32);
    let hi = hi_hi + (cross >> 32) + carry1 + (carry2 as u64);

    (mid, hi)
}

/// Unsigned full product of two 128-bit words, combining four
/// 64x64->128 partial products per spec §4.1.
pub fn widening_mul_u128(a: U128, b: U128) -> U256 {
    let (a0, a1) = (a.lo(), a.hi());
    let (b0, b1) = (b.lo(), b.hi());

    let (p00_lo, p00_hi) = widening_mul_u64(a0, b0);
    let (p01_lo, p01_hi) = widening_mul_u64(a0, b1);
    let (p10_lo, p10_hi) = widening_mul_u64(a1, b0);
    let (p11_lo, p11_hi) = widening_mul_u64(a1, b1);

    // Accumulate into four 64-bit result limbs with explicit carry
    // propagation, in the style of a schoolbook column sum.
    let mut limbs = [0u64; 4];
    let mut carry: u128 = 0;

    let col0 = p00_lo as u128;
    limbs[0] = col0 as u64;

    let col1 = p00_hi as u128 + p01_lo as u128 + p10_lo as u128;
    limbs[1] = col1 as u64;
    carry = col1 >> 64;

    let col2 = p01_hi as u128 + p10_hi as u128 + p11_lo as u128 + carry;
    limbs[2] = col2 as u64;
    carry = col2 >> 64;

    let col3 = p11_hi as u128 + carry;
    limbs[3] = col3 as u64;

    U256::from_limbs(limbs)
}

/// Unsigned full product of two 256-bit words, combining four
/// 128x128->256 partial products, mirroring [`widening_mul_u128`] one
/// width class up.
pub fn widening_mul_u256(a: U256, b: U256) -> U512 {
    let (a0, a1) = (a.lo128(), a.hi128());
    let (b0, b1) = (b.lo128(), b.hi128());

    let p00 = widening_mul_u128(a0, b0);
    let p01 = widening_mul_u128(a0, b1);
    let p10 = widening_mul_u128(a1, b0);
    let p11 = widening_mul_u128(a1, b1);

    // result = p00 + (p01 + p10) * 2^128 + p11 * 2^256
    let (cross, cross_carry) = p01.overflowing_add(&p10);
    let mut hi = p11;
    if cross_carry {
        hi = hi.overflowing_add(&U256::from_u64(1)).0;
    }

    let acc = U512::from_parts(p00, U256::zero());
    let cross_shifted = U512::from_parts(U256::zero(), cross);
    let (acc, c1) = acc.overflowing_add(&cross_shifted);

    let hi_shifted = U512::from_limbs([0, 0, 0, 0, hi.limbs[0], hi.limbs[1], hi.limbs[2], hi.limbs[3]]);
    let (acc, c2) = acc.overflowing_add(&hi_shifted);
    debug_assert!(!c1 && !c2, "256x256->512 product cannot overflow 512 bits");
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul64_matches_native() {
        let cases = [
            (0u64, 0u64),
            (1, 1),
            (u64::MAX, u64::MAX),
            (0xFFFF_FFFF_0000_0001, 3),
            (1234567890123456789, 987654321987654321),
        ];
        for (a, b) in cases {
            let (lo, hi) = widening_mul_u64(a, b);
            let want = (a as u128) * (b as u128);
            let got = (lo as u128) | ((hi as u128) << 64);
            assert_eq!(got, want, "{a} * {b}");
        }
    }

    #[test]
    fn mul128_matches_native() {
        // (a, b, expected_lo, expected_hi) precomputed with exact arithmetic.
        let cases: [(u128, u128, u128, u128); 4] = [
            (0, 0, 0, 0),
            (u128::MAX, 1, u128::MAX, 0),
            (u128::MAX, u128::MAX, 1, u128::MAX - 1),
            (0x1_0000_0000_0000_0001, u64::MAX as u128, u128::MAX, 0),
        ];
        for (a, b, want_lo, want_hi) in cases {
            let prod = widening_mul_u128(U128::from_u128(a), U128::from_u128(b));
            assert_eq!(prod.lo128().to_u128(), want_lo, "{a:#x} * {b:#x} lo");
            assert_eq!(prod.hi128().to_u128(), want_hi, "{a:#x} * {b:#x} hi");
        }
    }

    #[test]
    fn mul256_zero_and_one() {
        let one = U256::from_u64(1);
        let v = U256::from_parts(U128::from_u128(12345), U128::from_u128(6789));
        let p = widening_mul_u256(v, one);
        assert_eq!(p.lo256(), v);
        assert!(p.hi256().is_zero());
    }
}
