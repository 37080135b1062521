//! Scale-by-power-of-two and adjacent-representable-value operations
//! (spec §4.5.6: `scaleB`, `bitIncrement`, `bitDecrement`).

use super::{finite_nonzero_parts, round_and_encode};
use crate::repr::{Float128, EXP_SENTINEL_CODE, SIG_BITS, SIG_MASK};

/// Correctly-rounded `x * 2^n`. Exact whenever the result's exponent
/// stays in range; otherwise rounds into the subnormal range or
/// flushes to a signed infinity exactly like any other operation that
/// goes through [`round_and_encode`].
pub fn scaleb(x: Float128, n: i32) -> Float128 {
    if x.is_nan() {
        return Float128::quiet_nan();
    }
    if x.is_infinite() || x.is_zero() {
        return x;
    }
    let (sign, e, m) = finite_nonzero_parts(x).unwrap();
    round_and_encode(sign, e.saturating_add(n), m << 3)
}

fn max_finite(sign: bool) -> Float128 {
    let mut bits = ((EXP_SENTINEL_CODE - 1) as u128) << SIG_BITS;
    bits |= SIG_MASK;
    if sign {
        bits |= 1u128 << 127;
    }
    Float128::from_bits(bits)
}

/// The next representable value strictly greater than `x` (spec
/// §4.5.6 `bitIncrement`; `nextUp` in IEEE 754 terms). NaN propagates;
/// `+∞` is a fixed point.
pub fn bit_increment(x: Float128) -> Float128 {
    if x.is_nan() {
        return Float128::quiet_nan();
    }
    if x.is_infinite() {
        return if x.is_sign_negative() { max_finite(true) } else { x };
    }
    if x.is_zero() {
        return Float128::from_bits(1);
    }
    let bits = x.to_bits();
    let new_bits = if x.is_sign_negative() { bits - 1 } else { bits + 1 };
    Float128::from_bits(new_bits)
}

/// The next representable value strictly less than `x` (spec §4.5.6
/// `bitDecrement`; `nextDown`). NaN propagates; `-∞` is a fixed point.
pub fn bit_decrement(x: Float128) -> Float128 {
    if x.is_nan() {
        return Float128::quiet_nan();
    }
    if x.is_infinite() {
        return if x.is_sign_positive() { max_finite(false) } else { x };
    }
    if x.is_zero() {
        return Float128::from_bits((1u128 << 127) | 1);
    }
    let bits = x.to_bits();
    let new_bits = if x.is_sign_positive() { bits - 1 } else { bits + 1 };
    Float128::from_bits(new_bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ONE;

    #[test]
    fn scaleb_exact_power_of_two() {
        let two = scaleb(ONE, 1);
        assert_eq!(two.to_bits(), crate::arith::add::add(ONE, ONE).to_bits());
    }

    #[test]
    fn scaleb_overflows_to_infinity() {
        let r = scaleb(ONE, 100_000);
        assert!(r.is_infinite());
    }

    #[test]
    fn scaleb_underflows_to_zero() {
        let r = scaleb(ONE, -100_000);
        assert!(r.is_zero());
    }

    #[test]
    fn increment_decrement_are_inverses_away_from_boundaries() {
        let up = bit_increment(ONE);
        assert_eq!(bit_decrement(up).to_bits(), ONE.to_bits());
    }

    #[test]
    fn increment_across_zero() {
        let up = bit_increment(Float128::zero(true));
        assert_eq!(up.to_bits(), 1);
        let down = bit_decrement(Float128::zero(false));
        assert_eq!(down.to_bits(), (1u128 << 127) | 1);
    }

    #[test]
    fn increment_at_infinity_boundary() {
        assert!(bit_increment(Float128::infinity(false)).is_infinite());
        assert!(!bit_increment(Float128::infinity(true)).is_infinite());
    }
}
