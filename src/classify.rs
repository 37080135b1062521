/*!
Classification predicates (spec §4.4).

Each predicate is derived directly from the decoded fields of a
[`Float128`] per spec §3; none of them perform arithmetic.
*/

use crate::repr::{Class, Float128, IMPLICIT_BIT};

impl Float128 {
    /// `true` iff this value is NaN (quiet or sentinel).
    pub fn is_nan(self) -> bool {
        matches!(self.classify(), Class::Nan(_, _))
    }

    /// `true` iff this value is `+∞` or `-∞`.
    pub fn is_infinite(self) -> bool {
        matches!(self.classify(), Class::Infinity(_))
    }

    /// `true` iff this value is normal (nonzero, finite, full precision).
    pub fn is_normal(self) -> bool {
        matches!(self.classify(), Class::Normal(_, _, _))
    }

    /// `true` iff this value is subnormal.
    pub fn is_subnormal(self) -> bool {
        matches!(self.classify(), Class::Subnormal(_, _))
    }

    /// `true` iff this value is zero (either sign).
    pub fn is_zero(self) -> bool {
        matches!(self.classify(), Class::Zero(_))
    }

    /// `true` iff this value is finite (zero, subnormal, or normal).
    pub fn is_finite(self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// Sign bit, ignoring NaN payload semantics (`true` = negative bit set).
    pub fn is_sign_negative(self) -> bool {
        self.raw_sign()
    }

    /// Complement of [`Float128::is_sign_negative`].
    pub fn is_sign_positive(self) -> bool {
        !self.raw_sign()
    }

    /// `true` iff this value is negative in the IEEE 754 sense
    /// (excludes NaN and both zeros, per spec §3 I3/I5).
    pub fn is_negative(self) -> bool {
        match self.classify() {
            Class::Zero(_) | Class::Nan(_, _) => false,
            Class::Subnormal(s, _) | Class::Normal(s, _, _) | Class::Infinity(s) => s,
        }
    }

    /// `true` iff this value is positive (finite nonzero or `+∞`).
    pub fn is_positive(self) -> bool {
        match self.classify() {
            Class::Zero(_) | Class::Nan(_, _) => false,
            Class::Subnormal(s, _) | Class::Normal(s, _, _) | Class::Infinity(s) => !s,
        }
    }

    /// `true` iff the trailing significand's leading-zero count places
    /// the implicit one exactly at bit 112 — i.e. the value is a
    /// canonical encoding of a normal number (spec §4.4). Zero,
    /// subnormal, infinite, and NaN values are not canonical under
    /// this predicate.
    pub fn is_canonical(self) -> bool {
        if let Class::Normal(_, _, c) = self.classify() {
            c & IMPLICIT_BIT != 0
        } else {
            false
        }
    }

    /// `true` iff this value is an exact power of two (spec §4.4:
    /// zero trailing significand on a normal value, or exactly one
    /// bit set on a subnormal).
    pub fn is_pow2(self) -> bool {
        match self.classify() {
            Class::Normal(_, _, c) => c == IMPLICIT_BIT,
            Class::Subnormal(_, c) => c != 0 && (c & (c - 1)) == 0,
            _ => false,
        }
    }

    /// `true` iff this value equals its own `round()` (spec §4.4,
    /// §4.5.7).
    pub fn is_integer(self) -> bool {
        if !self.is_finite() {
            return false;
        }
        if self.is_zero() {
            return true;
        }
        self == self.round()
    }

    /// `true` iff this value is an even integer (unbiased exponent
    /// `>= 1`, combined with [`Float128::is_integer`]).
    pub fn is_even_integer(self) -> bool {
        self.is_integer() && self.unbiased_exp().map(|e| e >= 1).unwrap_or(self.is_zero())
    }

    /// `true` iff this value is an odd integer (unbiased exponent `<
    /// 1`, combined with [`Float128::is_integer`]).
    pub fn is_odd_integer(self) -> bool {
        self.is_integer() && self.unbiased_exp().map(|e| e < 1).unwrap_or(false)
    }

    /// Unbiased binary exponent `e` such that `v = (-1)^s * m * 2^(e -
    /// 112)` for some significand `m` with the implicit bit included;
    /// `None` for zero, infinity, or NaN (spec §3 "Derived attributes").
    pub(crate) fn unbiased_exp(self) -> Option<i32> {
        match self.classify() {
            Class::Normal(_, e, _) => Some(e),
            Class::Subnormal(_, _) => Some(crate::repr::EXP_MIN),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ONE;

    #[test]
    fn zero_and_infinity() {
        assert!(Float128::zero(false).is_zero());
        assert!(!Float128::zero(false).is_negative());
        assert!(Float128::infinity(true).is_infinite());
        assert!(Float128::infinity(true).is_negative());
    }

    #[test]
    fn nan_predicates() {
        assert!(Float128::quiet_nan().is_nan());
        assert!(Float128::sentinel_nan().is_nan());
        assert!(!Float128::quiet_nan().is_finite());
    }

    #[test]
    fn pow2_and_canonical() {
        assert!(ONE.is_pow2());
        assert!(ONE.is_canonical());
        assert!(!Float128::zero(false).is_pow2());
    }

    #[test]
    fn integer_predicates() {
        assert!(ONE.is_integer());
        assert!(ONE.is_odd_integer());
        assert!(!ONE.is_even_integer());
    }
}
