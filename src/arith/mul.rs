//! Multiplication (spec §4.5.2).

use super::{finite_nonzero_parts, round_and_encode};
use crate::repr::Float128;
use crate::wide::{widening_mul_u128, WideUint, U128};

/// Correctly-rounded `a * b`.
pub fn mul(a: Float128, b: Float128) -> Float128 {
    if a.is_nan() || b.is_nan() {
        return Float128::quiet_nan();
    }
    let sign = a.is_sign_negative() != b.is_sign_negative();

    // Any infinite operand yields NaN here, including finite * infinity.
    // IEEE 754 specifies finite * (+-inf) = +-inf; this implementation instead
    // follows its lineage's multiply, which returns NaN for every case
    // involving an infinite operand (see DESIGN.md).
    if a.is_infinite() || b.is_infinite() {
        return Float128::sentinel_nan();
    }
    if a.is_zero() || b.is_zero() {
        return Float128::zero(sign);
    }

    let (_, ea, ma) = finite_nonzero_parts(a).unwrap();
    let (_, eb, mb) = finite_nonzero_parts(b).unwrap();

    // Exact 113x113-bit product, up to 226 bits.
    let product = widening_mul_u128(U128::from_u128(ma), U128::from_u128(mb));
    let top = product.bit_length();
    let s = top.saturating_sub(116);

    let window = if s > 0 {
        let sticky = product.sticky_below(s);
        product.shr(s).lo128().to_u128() | (sticky as u128)
    } else {
        product.lo128().to_u128()
    };

    let exp = ea + eb - 109 + s as i32;
    round_and_encode(sign, exp, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ONE;

    #[test]
    fn one_times_one() {
        let r = mul(ONE, ONE);
        assert_eq!(r.to_bits(), ONE.to_bits());
    }

    #[test]
    fn quarter_times_half() {
        let quarter = Float128::from_bits(0x3ffd0000000000000000000000000000);
        let half = Float128::from_bits(0x3ffe0000000000000000000000000000);
        let r = mul(quarter, half);
        let expected = Float128::from_bits(0x3ffc0000000000000000000000000000); // 0.125
        assert_eq!(r.to_bits(), expected.to_bits());
    }

    #[test]
    fn sign_rules() {
        let neg_one = ONE.negated();
        assert!(mul(neg_one, ONE).is_sign_negative());
        assert!(mul(neg_one, neg_one).is_sign_positive());
    }

    #[test]
    fn zero_times_infinity_is_nan() {
        let inf = Float128::infinity(false);
        assert!(mul(inf, Float128::zero(false)).is_nan());
    }

    #[test]
    fn finite_times_infinity_is_nan() {
        let inf = Float128::infinity(false);
        assert!(mul(inf, ONE).is_nan());
        assert!(mul(ONE, inf).is_nan());
    }

    #[test]
    fn overflow_to_infinity() {
        let max_normal = Float128::from_bits(0x7ffeffffffffffffffffffffffffffff);
        let r = mul(max_normal, max_normal);
        assert!(r.is_infinite());
    }

    #[test]
    fn underflow_to_subnormal() {
        let eps = crate::consts::EPSILON_SUBNORMAL;
        let half = Float128::from_bits(0x3ffe0000000000000000000000000000);
        let r = mul(eps, half);
        assert!(r.is_zero(), "rounds to zero when product underflows below the smallest subnormal");
    }
}
