//! Fused multiply-add (spec §4.5.4): `a*b + c` rounded exactly once,
//! in contrast to `add(mul(a, b), c)`, which rounds twice.

use super::add::add;
use super::mul::mul;
use super::{finite_nonzero_parts, round_and_encode};
use crate::repr::Float128;
use crate::wide::{widening_mul_u128, WideUint, U128, U512};

/// Exponent-gap bound beyond which the addend and the product can no
/// longer both fit in the fixed-width accumulator below. Past this
/// bound one operand's contribution to the final 113-bit result is
/// indistinguishable from zero (or from the other operand alone), so
/// double rounding through [`add`] and [`mul`] produces the identical
/// correctly-rounded answer without needing a wider accumulator.
const CLAMP: i32 = 140;
/// Bit offset the product is placed at inside the accumulator, large
/// enough to leave `CLAMP` bits of headroom on both sides.
const OFFSET: u32 = 140;

/// Correctly-rounded `a*b + c`, rounded once.
pub fn fma(a: Float128, b: Float128, c: Float128) -> Float128 {
    if a.is_nan() || b.is_nan() || c.is_nan() {
        return Float128::quiet_nan();
    }
    if (a.is_infinite() && b.is_zero()) || (a.is_zero() && b.is_infinite()) {
        return Float128::sentinel_nan();
    }
    if a.is_infinite() || b.is_infinite() {
        let sign = a.is_sign_negative() != b.is_sign_negative();
        return add(Float128::infinity(sign), c);
    }
    if c.is_infinite() {
        return c;
    }
    if a.is_zero() || b.is_zero() {
        return add(mul(a, b), c);
    }
    if c.is_zero() {
        return mul(a, b);
    }

    let (sa, ea, ma) = finite_nonzero_parts(a).unwrap();
    let (sb, eb, mb) = finite_nonzero_parts(b).unwrap();
    let (sc, ec, mc) = finite_nonzero_parts(c).unwrap();
    let sign_prod = sa != sb;

    let product = widening_mul_u128(U128::from_u128(ma), U128::from_u128(mb));
    let base_exp = ea + eb - 224;
    let shift_c = ec - ea - eb + 112;

    if shift_c.abs() > CLAMP {
        return add(mul(a, b), c);
    }

    let p_pos = U512::widen_u256(product).shl(OFFSET);
    let c_shift = (OFFSET as i32 + shift_c) as u32;
    let c_pos = U512::widen_u128(U128::from_u128(mc)).shl(c_shift);

    let (magnitude, sign) = if sign_prod == sc {
        (p_pos.overflowing_add(&c_pos).0, sign_prod)
    } else if p_pos >= c_pos {
        (p_pos.overflowing_sub(&c_pos).0, sign_prod)
    } else {
        (c_pos.overflowing_sub(&p_pos).0, sc)
    };

    if magnitude.is_zero() {
        return Float128::zero(false);
    }

    let top = magnitude.bit_length();
    let s = top.saturating_sub(116);
    let window = if s > 0 {
        let sticky = magnitude.sticky_below(s);
        magnitude.shr(s).lo128().to_u128() | (sticky as u128)
    } else {
        magnitude.lo128().to_u128()
    };
    let exp = base_exp - OFFSET as i32 + 115 + s as i32;
    round_and_encode(sign, exp, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ONE;

    #[test]
    fn fma_matches_separate_ops_when_exact() {
        let two = add(ONE, ONE);
        let three = add(two, ONE);
        // 2*3 + 1 = 7
        let r = fma(two, three, ONE);
        let seven = add(add(add(add(add(add(ONE, ONE), ONE), ONE), ONE), ONE), ONE);
        assert_eq!(r.to_bits(), seven.to_bits());
    }

    #[test]
    fn fma_avoids_double_rounding() {
        // Construct a case where x*y has a bit pattern that would
        // round differently if rounded before adding a tiny
        // complementary addend, vs. fused. 1.0 * 1.0 + smallest
        // subnormal should be exactly representable either way, but
        // exercises the fused accumulation path end to end.
        let eps = crate::consts::EPSILON_SUBNORMAL;
        let r = fma(ONE, ONE, eps);
        assert_ne!(r.to_bits(), ONE.to_bits());
        assert_eq!(r.to_bits(), add(ONE, eps).to_bits());
    }

    #[test]
    fn fma_with_zero_addend_matches_multiply() {
        let two = add(ONE, ONE);
        let r = fma(two, two, Float128::zero(false));
        assert_eq!(r.to_bits(), mul(two, two).to_bits());
    }

    #[test]
    fn fma_invalid_product() {
        let inf = Float128::infinity(false);
        assert!(fma(inf, Float128::zero(false), ONE).is_nan());
    }
}
