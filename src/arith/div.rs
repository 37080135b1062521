//! Division (spec §4.5.3).

use super::{finite_nonzero_parts, round_and_encode};
use crate::repr::Float128;
use crate::wide::{divrem_u256_by_u128, WideUint, U128, U256};

/// Left shift applied to the dividend's significand before the wide
/// integer division, giving the quotient comfortably more than 116
/// significant bits to round from regardless of how the operands'
/// magnitudes compare.
const DIVIDE_SHIFT: u32 = 120;

/// Correctly-rounded `a / b`.
pub fn div(a: Float128, b: Float128) -> Float128 {
    if a.is_nan() || b.is_nan() {
        return Float128::quiet_nan();
    }
    let sign = a.is_sign_negative() != b.is_sign_negative();

    if a.is_infinite() {
        return if b.is_infinite() {
            Float128::sentinel_nan()
        } else {
            Float128::infinity(sign)
        };
    }
    if b.is_infinite() {
        return Float128::zero(sign);
    }
    if b.is_zero() {
        return if a.is_zero() {
            Float128::sentinel_nan()
        } else {
            Float128::infinity(sign)
        };
    }
    if a.is_zero() {
        return Float128::zero(sign);
    }

    let (_, ea, ma) = finite_nonzero_parts(a).unwrap();
    let (_, eb, mb) = finite_nonzero_parts(b).unwrap();

    let dividend = U256::from_parts(U128::from_u128(ma), U128::zero()).shl(DIVIDE_SHIFT);
    let divisor = U128::from_u128(mb);
    let (quot, rem) = divrem_u256_by_u128(dividend, divisor);

    let top = quot.bit_length();
    let s = top.saturating_sub(116);
    let shift_sticky = s > 0 && quot.sticky_below(s);
    let mut window = if s > 0 {
        quot.shr(s).lo128().to_u128()
    } else {
        quot.lo128().to_u128()
    };
    if shift_sticky || !rem.is_zero() {
        window |= 1;
    }

    let exp = ea - eb - DIVIDE_SHIFT as i32 + 115 + s as i32;
    round_and_encode(sign, exp, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ONE;

    #[test]
    fn one_over_one() {
        let r = div(ONE, ONE);
        assert_eq!(r.to_bits(), ONE.to_bits());
    }

    #[test]
    fn two_over_one() {
        let two = super::super::add::add(ONE, ONE);
        let r = div(two, ONE);
        assert_eq!(r.to_bits(), two.to_bits());
    }

    #[test]
    fn one_over_four_equals_quarter() {
        let four = Float128::from_bits(0x40010000000000000000000000000000);
        let r = div(ONE, four);
        let quarter = Float128::from_bits(0x3ffd0000000000000000000000000000);
        assert_eq!(r.to_bits(), quarter.to_bits());
    }

    #[test]
    fn divide_by_zero_is_infinity() {
        let r = div(ONE, Float128::zero(false));
        assert!(r.is_infinite());
        assert!(r.is_sign_positive());
    }

    #[test]
    fn zero_over_zero_is_nan() {
        let r = div(Float128::zero(false), Float128::zero(true));
        assert!(r.is_nan());
    }

    #[test]
    fn infinity_over_infinity_is_nan() {
        let r = div(Float128::infinity(false), Float128::infinity(true));
        assert!(r.is_nan());
    }

    #[test]
    fn sign_of_quotient() {
        let neg_one = ONE.negated();
        assert!(div(neg_one, ONE).is_sign_negative());
        assert!(div(neg_one, neg_one).is_sign_positive());
    }
}
