/*!
Binary-to-decimal formatting (spec §4.7, §6.2): the inverse of
[`crate::parse`]. [`Format`] is the configuration object both modules
share — decimal separator, NaN/infinity tokens, and the negative-number
pattern (spec §6.2).

The digit-extraction algorithm below works entirely in `Float128`
arithmetic (`floor`, `mul`, `div` by ten) rather than building an
arbitrary-precision decimal integer, extracting one decimal digit per
step the way the spec's "repeated multiplication by 10" description
reads. Scaling a value into the `[1, 10)` range first requires
multiplying or dividing by `10^n` for exponents far outside the
`POW10` table (spec §3's table only reaches `10^37`); beyond that this
crate chains multiplications through `POW10[37]`, which compounds
rounding error at the extremes of the exponent range the same way
[`crate::arith::remainder`] documents for huge operand ratios.
*/

use core::fmt;

use crate::consts::{ONE, POW10, TEN};
use crate::error::{ArgumentError, Error};
use crate::number::Quad;
use crate::repr::Float128;

/// Configuration for [`Format::format`] and [`crate::parse::Format`]'s
/// parsing counterpart (spec §6.2).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Format {
    pub(crate) nan_token: String,
    pub(crate) inf_token: String,
    pub(crate) neg_inf_token: String,
    pub(crate) decimal_separator: char,
    pub(crate) negative_sign: String,
    pub(crate) negative_pattern: u8,
    pub(crate) precision: u32,
}

impl Default for Format {
    fn default() -> Self {
        Format {
            nan_token: "NaN".to_string(),
            inf_token: "Infinity".to_string(),
            neg_inf_token: "-Infinity".to_string(),
            decimal_separator: '.',
            negative_sign: "-".to_string(),
            negative_pattern: 1,
            precision: 38,
        }
    }
}

impl Format {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_nan_token(mut self, token: impl Into<String>) -> Self {
        self.nan_token = token.into();
        self
    }

    pub fn with_inf_token(mut self, token: impl Into<String>) -> Self {
        self.inf_token = token.into();
        self
    }

    pub fn with_neg_inf_token(mut self, token: impl Into<String>) -> Self {
        self.neg_inf_token = token.into();
        self
    }

    pub fn with_decimal_separator(mut self, sep: char) -> Self {
        self.decimal_separator = sep;
        self
    }

    pub fn with_negative_sign(mut self, sign: impl Into<String>) -> Self {
        self.negative_sign = sign.into();
        self
    }

    /// Negative-number pattern (spec §6.2): `0` parentheses, `1`
    /// leading sign, `2` leading sign with a space, `3` trailing
    /// sign, `4` trailing sign with a space. Values outside `0..=4`
    /// are accepted here and rejected only when actually formatting
    /// or parsing (spec §7 "invalid negative pattern").
    pub fn with_negative_pattern(mut self, pattern: u8) -> Self {
        self.negative_pattern = pattern;
        self
    }

    /// Number of significant decimal digits produced by [`Format::format`]
    /// (default 38, spec §4.7).
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = digits;
        self
    }

    fn check_pattern(&self) -> Result<(), Error> {
        if self.negative_pattern > 4 {
            return Err(ArgumentError::InvalidNegativePattern(self.negative_pattern).into());
        }
        Ok(())
    }

    pub(crate) fn apply_sign(&self, magnitude: &str, negative: bool) -> String {
        if !negative {
            return magnitude.to_string();
        }
        match self.negative_pattern {
            0 => format!("({magnitude})"),
            1 => format!("{}{}", self.negative_sign, magnitude),
            2 => format!("{} {}", self.negative_sign, magnitude),
            3 => format!("{}{}", magnitude, self.negative_sign),
            4 => format!("{} {}", magnitude, self.negative_sign),
            _ => unreachable!("validated by check_pattern"),
        }
    }

    /// Formats `x` (spec §4.7 binary-to-decimal algorithm, steps 1-7).
    pub fn format(&self, x: Float128) -> Result<String, Error> {
        self.check_pattern()?;
        if x.is_nan() {
            return Ok(self.nan_token.clone());
        }
        if x.is_infinite() {
            return Ok(if x.is_sign_negative() {
                self.neg_inf_token.clone()
            } else {
                self.inf_token.clone()
            });
        }
        if x.is_zero() {
            return Ok(self.apply_sign("0", x.is_sign_negative()));
        }
        let (mut digits, exp10) = digits_of(x.abs(), self.precision);
        while digits.len() > 1 && *digits.last().unwrap() == 0 {
            digits.pop();
        }
        let body = render(&digits, exp10, self.decimal_separator);
        Ok(self.apply_sign(&body, x.is_sign_negative()))
    }

    /// As [`Format::format`], but collapses any failure to `None`
    /// (spec §7 "tryFormat").
    pub fn try_format(&self, x: Float128) -> Option<String> {
        self.format(x).ok()
    }
}

impl fmt::Display for Float128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Format::default().format(*self) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => write!(f, "NaN"),
        }
    }
}

/// Scales `x` by `10^e10` by chaining through [`POW10`], dividing or
/// multiplying `POW10[37]` repeatedly for magnitudes beyond the
/// table's single-step range. Shared with [`crate::parse`].
pub(crate) fn scale_pow10(x: Float128, e10: i32) -> Float128 {
    if !x.is_finite() || x.is_zero() || e10 == 0 {
        return x;
    }
    let mut result = x;
    if e10 > 0 {
        let mut n = e10;
        while n > 37 {
            result = result.mul(POW10[37]);
            n -= 37;
        }
        if n > 0 {
            result = result.mul(POW10[n as usize]);
        }
    } else {
        let mut n = -e10;
        while n > 37 {
            result = result.div(POW10[37]);
            n -= 37;
        }
        if n > 0 {
            result = result.div(POW10[n as usize]);
        }
    }
    result
}

const LOG10_2_NUM: i64 = 1233;
const LOG10_2_DEN: i64 = 4096;

/// A first guess at `floor(log10(x))` for positive finite nonzero `x`,
/// corrected to an exact answer by the caller's scale-and-check loop.
fn estimate_decimal_exponent(x: Float128) -> i32 {
    let exp = x.exp().unwrap_or(0) as i64;
    let c = x.c().unwrap_or(1u128 << 112);
    let bit_len = 128 - c.leading_zeros();
    let log2_approx = exp + (bit_len as i64 - 1);
    (log2_approx * LOG10_2_NUM).div_euclid(LOG10_2_DEN) as i32
}

/// Extracts up to `precision` significant decimal digits of positive
/// finite nonzero `x`, plus the decimal exponent of the first digit
/// (i.e. the leading digit is at the `10^exp10` place). The last digit
/// returned has already absorbed a round-half-up correction against
/// one further digit (spec §4.7 step 6).
fn digits_of(x: Float128, precision: u32) -> (Vec<u8>, i32) {
    let mut exp10 = estimate_decimal_exponent(x);
    let mut mantissa = scale_pow10(x, -exp10);
    let mut guard = 0;
    while guard < 128 {
        if mantissa >= TEN {
            mantissa = mantissa.div(TEN);
            exp10 += 1;
        } else if mantissa < ONE {
            mantissa = mantissa.mul(TEN);
            exp10 -= 1;
        } else {
            break;
        }
        guard += 1;
    }

    let total = precision as usize + 1;
    let mut digits = Vec::with_capacity(total);
    for _ in 0..total {
        let whole = mantissa.floor();
        let d = crate::convert::convert_to_truncating::<u8>(whole);
        digits.push(d);
        mantissa = mantissa.sub(whole).mul(TEN);
    }

    let round_up = digits[precision as usize] >= 5;
    digits.truncate(precision as usize);
    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                exp10 += 1;
                digits.truncate(precision as usize);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }
    (digits, exp10)
}

fn digit_char(d: u8) -> char {
    (b'0' + d) as char
}

/// Lays out `digits` (leading digit at the `10^exp10` place) as a
/// decimal string, switching to scientific notation for large-
/// magnitude exponents (spec §4.7 step 4: "for large exponents (>= 20
/// digits) use scientific notation").
fn render(digits: &[u8], exp10: i32, sep: char) -> String {
    if exp10 >= 20 || exp10 < -1 {
        let mantissa = if digits.len() == 1 {
            digit_char(digits[0]).to_string()
        } else {
            let frac: String = digits[1..].iter().copied().map(digit_char).collect();
            format!("{}{sep}{frac}", digit_char(digits[0]))
        };
        return format!("{mantissa}E{exp10:+}");
    }
    if exp10 >= 0 {
        let e = exp10 as usize;
        let whole: String = (0..=e).map(|i| digit_char(digits.get(i).copied().unwrap_or(0))).collect();
        if digits.len() > e + 1 {
            let frac: String = digits[e + 1..].iter().copied().map(digit_char).collect();
            format!("{whole}{sep}{frac}")
        } else {
            whole
        }
    } else {
        let frac: String = digits.iter().copied().map(digit_char).collect();
        format!("0{sep}{frac}")
    }
}
