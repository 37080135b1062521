/*!
Conversions to and from narrower IEEE 754 binary formats (`binary16`,
`binary32`, `binary64`) and the full range of Rust integer widths
(spec §4.6).

Widening conversions (narrow float or any integer into `Float128`) are
exact — `Float128`'s 112-bit trailing significand always has enough
room. Narrowing conversions round to nearest, ties to even, exactly
like the arithmetic core, and integer conversions to a fixed width
saturate to the target's range rather than wrap (spec §4.6 "the
specification requires saturation").
*/

use crate::arith::{finite_nonzero_parts, shift_right_sticky};
use crate::error::ConversionError;
use crate::repr::Float128;
use crate::wide::{WideUint, U128, U256};

/// Builds a `Float128` from an exact integer value `v * 2^e_offset`,
/// rounding to nearest-even only in the (never-hit, for this module's
/// callers) case where `v` needs more than 113 significant bits.
pub(crate) fn encode_scaled(sign: bool, v: u128, e_offset: i32) -> Float128 {
    if v == 0 {
        return Float128::zero(sign);
    }
    let top = 128 - v.leading_zeros();
    let s = top.saturating_sub(116);
    let window = if s > 0 {
        let (shifted, sticky) = shift_right_sticky(v, s);
        shifted | (sticky as u128)
    } else {
        v << (116 - top)
    };
    let exp = (top - 1) as i32 + e_offset;
    crate::arith::round_and_encode(sign, exp, window)
}

fn encode_magnitude(sign: bool, v: u128) -> Float128 {
    encode_scaled(sign, v, 0)
}

/// Truncated-toward-zero magnitude of a finite `Float128`, or
/// [`Magnitude::Overflow`] when it does not fit in a `u128`.
enum Magnitude {
    Value(u128),
    Overflow,
}

fn decompose(x: Float128) -> (bool, Magnitude) {
    if x.is_infinite() {
        return (x.is_sign_negative(), Magnitude::Overflow);
    }
    if x.is_zero() {
        return (x.is_sign_negative(), Magnitude::Value(0));
    }
    let (sign, e, m) = finite_nonzero_parts(x).unwrap();
    if e >= 112 {
        let shift = (e - 112) as u32;
        if shift >= 256 {
            return (sign, Magnitude::Overflow);
        }
        let wide = U256::from_parts(U128::from_u128(m), U128::zero()).shl(shift);
        if !wide.hi128().is_zero() {
            (sign, Magnitude::Overflow)
        } else {
            (sign, Magnitude::Value(wide.lo128().to_u128()))
        }
    } else {
        let k = (112 - e) as u32;
        if k >= 113 {
            (sign, Magnitude::Value(0))
        } else {
            (sign, Magnitude::Value(m >> k))
        }
    }
}

fn unsigned_checked(x: Float128, max: u128) -> Result<u128, ConversionError> {
    if x.is_nan() {
        return Err(ConversionError);
    }
    match decompose(x) {
        (_, Magnitude::Value(0)) => Ok(0),
        (false, Magnitude::Value(v)) if v <= max => Ok(v),
        _ => Err(ConversionError),
    }
}

fn unsigned_saturating(x: Float128, max: u128) -> u128 {
    if x.is_nan() {
        return 0;
    }
    match decompose(x) {
        (_, Magnitude::Value(0)) => 0,
        (true, _) => 0,
        (false, Magnitude::Value(v)) => v.min(max),
        (false, Magnitude::Overflow) => max,
    }
}

fn signed_checked(x: Float128, max_pos: u128, max_neg: u128) -> Result<i128, ConversionError> {
    if x.is_nan() {
        return Err(ConversionError);
    }
    match decompose(x) {
        (_, Magnitude::Value(0)) => Ok(0),
        (true, Magnitude::Value(v)) if v <= max_neg => Ok(-(v as i128)),
        (false, Magnitude::Value(v)) if v <= max_pos => Ok(v as i128),
        _ => Err(ConversionError),
    }
}

fn signed_saturating(x: Float128, max_pos: u128, max_neg: u128, min_val: i128, max_val: i128) -> i128 {
    if x.is_nan() {
        return 0;
    }
    match decompose(x) {
        (_, Magnitude::Value(0)) => 0,
        (true, Magnitude::Value(v)) => {
            if v <= max_neg {
                -(v as i128)
            } else {
                min_val
            }
        }
        (true, Magnitude::Overflow) => min_val,
        (false, Magnitude::Value(v)) => {
            if v <= max_pos {
                v as i128
            } else {
                max_val
            }
        }
        (false, Magnitude::Overflow) => max_val,
    }
}

/// Generic conversion contract between `Float128` and a primitive
/// integer type, dispatched by the target's type class (signed vs.
/// unsigned, and its width), matching spec §4.6's generic
/// `convert_from`/`convert_to_*` dispatch.
pub trait ConvertInt: Copy + Sized {
    /// Widens `self` to `Float128`. Always exact.
    fn to_float128(self) -> Float128;
    /// Narrows `x` to `Self`, failing if `x` is NaN or outside range.
    fn try_from_float128(x: Float128) -> Result<Self, ConversionError>;
    /// Narrows `x` to `Self`, saturating to the type's range (NaN maps
    /// to `0`).
    fn saturating_from_float128(x: Float128) -> Self;
    /// Narrows `x` to `Self`, truncating any fractional part toward
    /// zero and otherwise behaving like
    /// [`ConvertInt::saturating_from_float128`] (spec §4.6: "the
    /// specification requires saturation to the target's range" even
    /// for the truncating entry point).
    fn truncating_from_float128(x: Float128) -> Self {
        Self::saturating_from_float128(x)
    }
}

macro_rules! impl_convert_unsigned {
    ($ty:ty) => {
        impl ConvertInt for $ty {
            fn to_float128(self) -> Float128 {
                encode_magnitude(false, self as u128)
            }
            fn try_from_float128(x: Float128) -> Result<Self, ConversionError> {
                unsigned_checked(x, <$ty>::MAX as u128).map(|v| v as $ty)
            }
            fn saturating_from_float128(x: Float128) -> Self {
                unsigned_saturating(x, <$ty>::MAX as u128) as $ty
            }
        }
    };
}

macro_rules! impl_convert_signed {
    ($ty:ty) => {
        impl ConvertInt for $ty {
            fn to_float128(self) -> Float128 {
                encode_magnitude(self < 0, (self as i128).unsigned_abs())
            }
            fn try_from_float128(x: Float128) -> Result<Self, ConversionError> {
                let v = signed_checked(x, <$ty>::MAX as u128, (<$ty>::MIN as i128).unsigned_abs())?;
                Ok(v as $ty)
            }
            fn saturating_from_float128(x: Float128) -> Self {
                let v = signed_saturating(
                    x,
                    <$ty>::MAX as u128,
                    (<$ty>::MIN as i128).unsigned_abs(),
                    <$ty>::MIN as i128,
                    <$ty>::MAX as i128,
                );
                v as $ty
            }
        }
    };
}

impl_convert_unsigned!(u8);
impl_convert_unsigned!(u16);
impl_convert_unsigned!(u32);
impl_convert_unsigned!(u64);
impl_convert_unsigned!(u128);
impl_convert_signed!(i8);
impl_convert_signed!(i16);
impl_convert_signed!(i32);
impl_convert_signed!(i64);
impl_convert_signed!(i128);

/// Converts any supported integer to `Float128` (spec §4.6 `convert_from`).
pub fn convert_from<T: ConvertInt>(v: T) -> Float128 {
    v.to_float128()
}

/// Checked narrowing conversion (spec §4.6 `convert_to_checked`).
pub fn convert_to_checked<T: ConvertInt>(x: Float128) -> Result<T, ConversionError> {
    T::try_from_float128(x)
}

/// Saturating narrowing conversion (spec §4.6 `convert_to_saturating`).
pub fn convert_to_saturating<T: ConvertInt>(x: Float128) -> T {
    T::saturating_from_float128(x)
}

/// Truncating narrowing conversion (spec §4.6 `convert_to_truncating`).
pub fn convert_to_truncating<T: ConvertInt>(x: Float128) -> T {
    T::truncating_from_float128(x)
}

fn pack(sign: bool, biased: u32, trailing: u128, exp_bits: u32, sig_bits: u32) -> u64 {
    let mut bits = (trailing as u64) | ((biased as u64) << sig_bits);
    if sign {
        bits |= 1u64 << (exp_bits + sig_bits);
    }
    bits
}

fn from_narrow(bits: u64, exp_bits: u32, sig_bits: u32) -> Float128 {
    let bias = (1i32 << (exp_bits - 1)) - 1;
    let sentinel = (1u32 << exp_bits) - 1;
    let sign = (bits >> (exp_bits + sig_bits)) & 1 == 1;
    let biased = ((bits >> sig_bits) & ((1u64 << exp_bits) - 1)) as u32;
    let trailing = (bits & ((1u64 << sig_bits) - 1)) as u128;

    if biased == sentinel {
        return if trailing == 0 {
            Float128::infinity(sign)
        } else if sign {
            Float128::sentinel_nan()
        } else {
            Float128::quiet_nan()
        };
    }
    if biased == 0 {
        if trailing == 0 {
            return Float128::zero(sign);
        }
        return encode_scaled(sign, trailing, 1 - bias - sig_bits as i32);
    }
    let sig = trailing | (1u128 << sig_bits);
    let unbiased = biased as i32 - bias;
    encode_scaled(sign, sig, unbiased - sig_bits as i32)
}

fn to_narrow(x: Float128, exp_bits: u32, sig_bits: u32) -> u64 {
    let bias = (1i32 << (exp_bits - 1)) - 1;
    let exp_max = bias;
    let exp_min = 1 - bias;
    let sentinel = (1u32 << exp_bits) - 1;
    let sign = x.is_sign_negative();

    if x.is_nan() {
        return pack(false, sentinel, 1u128 << (sig_bits - 1), exp_bits, sig_bits);
    }
    if x.is_infinite() {
        return pack(sign, sentinel, 0, exp_bits, sig_bits);
    }
    if x.is_zero() {
        return pack(sign, 0, 0, exp_bits, sig_bits);
    }

    let (sign, e, m) = finite_nonzero_parts(x).unwrap();
    if e > exp_max {
        return pack(sign, sentinel, 0, exp_bits, sig_bits);
    }

    let drop = 112 - sig_bits;
    let mut out_e = e;
    let mut shift = drop as i32;
    if e < exp_min {
        shift += exp_min - e;
        out_e = exp_min;
    }
    let shift = shift.max(0) as u32;

    let guard = if shift == 0 {
        false
    } else if shift - 1 < 113 {
        (m >> (shift - 1)) & 1 == 1
    } else {
        false
    };
    let sticky_rest = if shift <= 1 {
        false
    } else {
        let n = shift - 1;
        if n >= 113 {
            m != 0
        } else {
            (m & ((1u128 << n) - 1)) != 0
        }
    };
    let kept = if shift >= 128 { 0 } else { m >> shift };
    let round_up = guard && (sticky_rest || (kept & 1 != 0));
    let mut sig = kept;
    if round_up {
        sig += 1;
    }

    let threshold = 1u128 << sig_bits;
    let carry_threshold = 1u128 << (sig_bits + 1);
    if sig >= carry_threshold {
        sig >>= 1;
        out_e += 1;
    }
    if out_e > exp_max {
        return pack(sign, sentinel, 0, exp_bits, sig_bits);
    }

    if sig >= threshold {
        let biased = (out_e + bias) as u32;
        pack(sign, biased, sig - threshold, exp_bits, sig_bits)
    } else {
        pack(sign, 0, sig, exp_bits, sig_bits)
    }
}

/// Converts a `binary16` bit pattern to `Float128` (exact).
pub fn from_binary16(bits: u16) -> Float128 {
    from_narrow(bits as u64, 5, 10)
}

/// Rounds to `binary16`, ties to even.
pub fn to_binary16(x: Float128) -> u16 {
    to_narrow(x, 5, 10) as u16
}

/// Converts a `binary32` bit pattern to `Float128` (exact).
pub fn from_binary32(bits: u32) -> Float128 {
    from_narrow(bits as u64, 8, 23)
}

/// Rounds to `binary32`, ties to even.
pub fn to_binary32(x: Float128) -> u32 {
    to_narrow(x, 8, 23) as u32
}

/// Converts a `binary64` bit pattern to `Float128` (exact).
pub fn from_binary64(bits: u64) -> Float128 {
    from_narrow(bits, 11, 52)
}

/// Rounds to `binary64`, ties to even.
pub fn to_binary64(x: Float128) -> u64 {
    to_narrow(x, 11, 52)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ONE;

    #[test]
    fn integer_roundtrip() {
        assert_eq!(convert_from::<u32>(42).to_bits(), convert_from::<i64>(42).to_bits());
        assert_eq!(convert_to_checked::<u8>(convert_from(200u32)), Ok(200u8));
        assert_eq!(convert_to_checked::<i8>(convert_from(-5i32)), Ok(-5i8));
    }

    #[test]
    fn negative_to_unsigned_is_out_of_range() {
        let x = convert_from(-1i32);
        assert!(convert_to_checked::<u32>(x).is_err());
        assert_eq!(convert_to_saturating::<u32>(x), 0);
    }

    #[test]
    fn overflow_saturates() {
        let big = crate::consts::POW10[37];
        assert_eq!(convert_to_saturating::<u64>(big), u64::MAX);
        assert_eq!(convert_to_saturating::<i64>(big), i64::MAX);
    }

    #[test]
    fn checked_rejects_nan_and_overflow() {
        assert!(convert_to_checked::<u8>(Float128::quiet_nan()).is_err());
        assert!(convert_to_checked::<u8>(convert_from(1000u32)).is_err());
    }

    #[test]
    fn binary64_roundtrip_one() {
        let bits = to_binary64(ONE);
        assert_eq!(bits, 1.0f64.to_bits());
        assert_eq!(from_binary64(bits).to_bits(), ONE.to_bits());
    }

    #[test]
    fn binary32_roundtrip_small_fraction() {
        let half = Float128::from_bits(0x3ffe0000000000000000000000000000);
        let bits = to_binary32(half);
        assert_eq!(bits, 0.5f32.to_bits());
        assert_eq!(from_binary32(bits).to_bits(), half.to_bits());
    }

    #[test]
    fn binary16_overflow_to_infinity() {
        let big = crate::consts::POW10[10];
        let bits = to_binary16(big);
        assert_eq!(bits, 0x7c00); // +inf in binary16
    }

    #[test]
    fn binary64_infinity_and_nan() {
        assert_eq!(to_binary64(Float128::infinity(false)), f64::INFINITY.to_bits());
        assert!(f64::from_bits(to_binary64(Float128::quiet_nan())).is_nan());
    }
}
