/*!
The [`Quad`] trait: a thin, uniform view over [`Float128`] shared by
every module that needs to inspect a value's sign, exponent, or
significand without reaching into `repr`/`classify` directly. It plays
the same role this crate's ancestry gives a universal `Number` trait —
one vocabulary every number format in the family answers to — cut down
to the one format this crate actually implements.
*/

use crate::repr::Float128;

/// A uniform view of a `binary128` value as `(-1)^s * c * 2^exp`,
/// where `c` is a non-negative integer significand (including the
/// implicit bit for normal values) and `exp` is the exponent such that
/// `c` is taken as an integer (not a `1.xxx` fraction).
pub trait Quad: Copy {
    /// Radix of the format. Always 2 for `binary128`.
    fn radix() -> usize {
        2
    }

    /// Returns true if the sign bit is set.
    fn sign(&self) -> bool;

    /// Viewing this value as `(-1)^s * c * 2^exp`, returns `exp`.
    /// `None` for zero, infinity, or NaN.
    fn exp(&self) -> Option<i32>;

    /// Viewing this value as `(-1)^s * c * 2^exp`, returns `c`.
    /// `None` for zero, infinity, or NaN.
    fn c(&self) -> Option<u128>;

    /// Returns true if this value is NaN.
    fn is_nan(&self) -> bool;

    /// Returns true if this value is positive or negative infinity.
    fn is_infinite(&self) -> bool;

    /// Returns true if this value is zero (either sign).
    fn is_zero(&self) -> bool;
}

impl Quad for Float128 {
    fn sign(&self) -> bool {
        Float128::is_sign_negative(*self)
    }

    fn exp(&self) -> Option<i32> {
        crate::arith::finite_nonzero_parts(*self).map(|(_, e, _)| e - 112)
    }

    fn c(&self) -> Option<u128> {
        crate::arith::finite_nonzero_parts(*self).map(|(_, _, c)| c)
    }

    fn is_nan(&self) -> bool {
        Float128::is_nan(*self)
    }

    fn is_infinite(&self) -> bool {
        Float128::is_infinite(*self)
    }

    fn is_zero(&self) -> bool {
        Float128::is_zero(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ONE;

    #[test]
    fn one_decomposes_to_unit_significand() {
        assert_eq!(Quad::exp(&ONE), Some(0));
        assert_eq!(Quad::c(&ONE), Some(crate::repr::IMPLICIT_BIT));
        assert!(!Quad::sign(&ONE));
    }

    #[test]
    fn special_values_have_no_exponent() {
        assert_eq!(Quad::exp(&Float128::zero(false)), None);
        assert_eq!(Quad::exp(&Float128::infinity(false)), None);
        assert_eq!(Quad::exp(&Float128::quiet_nan()), None);
    }
}
