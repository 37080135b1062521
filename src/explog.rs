/*!
Logarithms, exponentials, and `pow` (spec §4.8). Built entirely from
[`crate::arith`] primitives and a recursive binary-logarithm core
(`log2_frac`), itself derived from [`crate::consts::E`]/[`crate::consts::TEN`]
rather than any new bootstrap table. Every entry point here is bounded
to a fixed iteration count (spec §5: "Transcendental iterations are
bounded at a fixed iteration count"), so none of them can loop forever.
*/

use crate::consts::{E, ONE, TEN};
use crate::number::Quad;
use crate::repr::Float128;

const NEWTON_ITERS: u32 = 25;
const LOG2_DEPTH: u32 = 25;

fn two() -> Float128 {
    ONE.add(ONE)
}

/// The unbiased binary exponent of `x` as if it were written `c *
/// 2^ilogb(x)` with `c` in `[1, 2)` (spec §4.8 "ilogb"); `None` for
/// zero, infinity, or NaN.
pub fn ilogb(x: Float128) -> Option<i32> {
    let exp = x.exp()?;
    let c = x.c()?;
    let bit_len = 128 - c.leading_zeros();
    Some(exp + (bit_len as i32 - 1))
}

/// Binary expansion of `log2(y)` for `y` in `[1, 2)`, computed by
/// repeated squaring: at each level, squaring `y` either keeps it
/// under `2` (next bit `0`) or pushes it to `[2, 4)` (next bit `1`,
/// and the next level continues on `y^2 / 2`).
fn log2_frac(y: Float128, depth: u32) -> Float128 {
    if depth == 0 {
        return Float128::zero(false);
    }
    let y2 = y.mul(y);
    if y2 >= two() {
        let rest = log2_frac(y2.div(two()), depth - 1);
        ONE.add(rest).scaleb(-1)
    } else {
        log2_frac(y2, depth - 1).scaleb(-1)
    }
}

/// `log2(x)` (spec §4.8): sentinel NaN for `x <= 0`.
pub fn log2(x: Float128) -> Float128 {
    if x.is_nan() {
        return Float128::quiet_nan();
    }
    if x.is_infinite() {
        return if x.is_sign_negative() { Float128::sentinel_nan() } else { x };
    }
    if !x.is_positive() {
        return Float128::sentinel_nan();
    }
    let n = match ilogb(x) {
        Some(n) => n,
        None => return Float128::sentinel_nan(),
    };
    let y = x.scaleb(-n);
    let n_val = crate::convert::convert_from(n);
    if y == ONE {
        n_val
    } else {
        n_val.add(log2_frac(y, LOG2_DEPTH))
    }
}

/// `log(x) = log2(x) / log2(e)` (spec §4.8).
pub fn log(x: Float128) -> Float128 {
    log2(x).div(log2(E))
}

/// `log10(x) = log2(x) / log2(10)` (spec §4.8).
pub fn log10(x: Float128) -> Float128 {
    log2(x).div(log2(TEN))
}

/// `log(x) / log(base)`.
pub fn log_base(x: Float128, base: Float128) -> Float128 {
    log2(x).div(log2(base))
}

fn exp_generic(y: Float128, base: Float128, base_log2: Float128) -> Float128 {
    if y.is_nan() {
        return Float128::quiet_nan();
    }
    if y.is_zero() {
        return ONE;
    }
    if y.is_infinite() {
        return if y.is_sign_negative() { Float128::zero(false) } else { Float128::infinity(false) };
    }
    let trunc = if y.is_sign_negative() { y.ceiling() } else { y.floor() };
    let mut x = ONE;
    let mut k = trunc;
    let mut steps = 0u32;
    while !k.is_zero() && steps < 20_000 {
        if k.is_sign_negative() {
            x = x.div(base);
            k = k.add(ONE);
        } else {
            x = x.mul(base);
            k = k.sub(ONE);
        }
        if x.is_infinite() || x.is_zero() {
            return x;
        }
        steps += 1;
    }
    let frac = y.sub(trunc);
    for _ in 0..NEWTON_ITERS {
        // ln(x) expressed as log2(x) / log2(base)'s inverse scaling:
        // the correction term needs log_base(x), i.e. log2(x)/base_log2.
        let log_x = log2(x).div(base_log2);
        x = x.add(x.mul(frac.sub(log_x)));
    }
    x
}

/// `exp(y) = e^y` (spec §4.8).
pub fn exp(y: Float128) -> Float128 {
    exp_generic(y, E, log2(E))
}

/// `exp2(y) = 2^y`.
pub fn exp2(y: Float128) -> Float128 {
    exp_generic(y, two(), ONE)
}

/// `exp10(y) = 10^y`.
pub fn exp10(y: Float128) -> Float128 {
    exp_generic(y, TEN, log2(TEN))
}

/// `pow(x, y) = exp(y * log(x))` (spec §4.8).
pub fn pow(x: Float128, y: Float128) -> Float128 {
    if x.is_nan() || y.is_nan() {
        return Float128::quiet_nan();
    }
    if y.is_zero() {
        return ONE;
    }
    exp(y.mul(log(x)))
}
