//! Rounding to an integer value (spec §4.5.7): `round`, `floor`,
//! `ceiling`, and `round(x, digits)`.

use super::finite_nonzero_parts;
use crate::consts::POW10;
use crate::error::{ArgumentError, Error};
use crate::repr::{Float128, IMPLICIT_BIT};

fn one(sign: bool) -> Float128 {
    Float128::encode_finite(sign, 0, IMPLICIT_BIT)
}

fn renormalize_carry(sign: bool, mut exp: i32, mut sig: u128) -> Float128 {
    if sig >= 1u128 << 113 {
        sig >>= 1;
        exp += 1;
    }
    Float128::encode_finite(sign, exp, sig)
}

/// Rounds `x` to the nearest integer value, breaking exact ties
/// according to `ties_even` (used internally by `round` and by
/// [`crate::arith::remainder::remainder`], which the IEEE 754 "round
/// to nearest, ties to even" quotient step requires regardless of
/// which tie-break the public `round` uses).
pub(crate) fn round_to_integer(x: Float128, ties_even: bool) -> Float128 {
    if !x.is_finite() || x.is_zero() {
        return x;
    }
    let (sign, e, m) = finite_nonzero_parts(x).unwrap();
    if e >= 112 {
        return x;
    }
    if e < -1 {
        return Float128::zero(sign);
    }
    if e == -1 {
        let tie = m == IMPLICIT_BIT;
        let round_up = if tie { !ties_even } else { true };
        return if round_up { one(sign) } else { Float128::zero(sign) };
    }
    let k = (112 - e) as u32;
    let frac_mask = (1u128 << k) - 1;
    let frac = m & frac_mask;
    let int_part = m & !frac_mask;
    if frac == 0 {
        return x;
    }
    let halfway = 1u128 << (k - 1);
    let round_up = match frac.cmp(&halfway) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => {
            if ties_even {
                (int_part >> k) & 1 == 1
            } else {
                true
            }
        }
    };
    let sig = if round_up { int_part + (1u128 << k) } else { int_part };
    if sig == 0 {
        return Float128::zero(sign);
    }
    renormalize_carry(sign, e, sig)
}

/// Rounds `x` to the nearest integer, ties to even (spec §4.5.7: "on
/// the binary representation", the same tie-break every other
/// rounding boundary in this crate uses).
pub fn round(x: Float128) -> Float128 {
    round_to_integer(x, true)
}

/// Rounds `x` toward negative infinity.
pub fn floor(x: Float128) -> Float128 {
    if !x.is_finite() || x.is_zero() {
        return x;
    }
    let (sign, e, m) = finite_nonzero_parts(x).unwrap();
    if e >= 112 {
        return x;
    }
    if e < 0 {
        return if sign { one(true) } else { Float128::zero(false) };
    }
    let k = (112 - e) as u32;
    let frac_mask = (1u128 << k) - 1;
    let frac = m & frac_mask;
    let int_part = m & !frac_mask;
    if frac == 0 {
        return x;
    }
    if !sign {
        Float128::encode_finite(false, e, int_part)
    } else {
        renormalize_carry(true, e, int_part + (1u128 << k))
    }
}

/// Rounds `x` toward positive infinity.
pub fn ceiling(x: Float128) -> Float128 {
    if !x.is_finite() || x.is_zero() {
        return x;
    }
    let (sign, e, m) = finite_nonzero_parts(x).unwrap();
    if e >= 112 {
        return x;
    }
    if e < 0 {
        return if sign { Float128::zero(true) } else { one(false) };
    }
    let k = (112 - e) as u32;
    let frac_mask = (1u128 << k) - 1;
    let frac = m & frac_mask;
    let int_part = m & !frac_mask;
    if frac == 0 {
        return x;
    }
    if sign {
        Float128::encode_finite(true, e, int_part)
    } else {
        renormalize_carry(false, e, int_part + (1u128 << k))
    }
}

/// Rounds `x` to `digits` decimal places (spec §4.5.7). `digits` must
/// be non-negative. Implemented as scale-round-unscale through the
/// power-of-ten table, matching the `round(x, n)` convenience found in
/// decimal-aware numeric libraries.
pub fn round_digits(x: Float128, digits: i32) -> Result<Float128, Error> {
    if digits < 0 {
        return Err(ArgumentError::NegativeDigits(digits).into());
    }
    if !x.is_finite() {
        return Ok(x);
    }
    let Some(&scale) = POW10.get(digits as usize) else {
        // Beyond the table's range the representable precision is
        // already exhausted at this magnitude; no digits can change.
        return Ok(x);
    };
    let scaled = super::mul::mul(x, scale);
    let rounded = round(scaled);
    Ok(super::div::div(rounded, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::add::add;
    use crate::consts::ONE;

    fn half() -> Float128 {
        Float128::from_bits(0x3ffe0000000000000000000000000000)
    }

    #[test]
    fn round_ties_to_even() {
        // 0.5 ties to the nearest even integer, which is zero.
        assert_eq!(round(half()).to_bits(), Float128::zero(false).to_bits());
        assert_eq!(round(half().negated()).to_bits(), Float128::zero(true).to_bits());
        // 1.5 ties to 2, also even.
        let one_and_half = add(ONE, half());
        let two = add(ONE, ONE);
        assert_eq!(round(one_and_half).to_bits(), two.to_bits());
    }

    #[test]
    fn round_ties_even_internal() {
        let two = add(ONE, ONE);
        let one_and_half = add(ONE, half());
        assert_eq!(round_to_integer(one_and_half, true).to_bits(), two.to_bits());
        assert_eq!(round_to_integer(half(), true).to_bits(), Float128::zero(false).to_bits());
    }

    #[test]
    fn floor_and_ceiling_small_fraction() {
        assert_eq!(floor(half()).to_bits(), Float128::zero(false).to_bits());
        assert_eq!(ceiling(half()).to_bits(), ONE.to_bits());
        assert_eq!(floor(half().negated()).to_bits(), ONE.negated().to_bits());
        assert_eq!(ceiling(half().negated()).to_bits(), Float128::zero(true).to_bits());
    }

    #[test]
    fn integers_are_fixed_points() {
        let two = add(ONE, ONE);
        assert_eq!(round(two).to_bits(), two.to_bits());
        assert_eq!(floor(two).to_bits(), two.to_bits());
        assert_eq!(ceiling(two).to_bits(), two.to_bits());
    }

    #[test]
    fn negative_digits_rejected() {
        assert!(round_digits(ONE, -1).is_err());
    }
}
