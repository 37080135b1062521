/*!
Decimal-to-binary parsing (spec §4.7): the inverse of
[`crate::format`]. Accepts `[sign]? digits [separator digits]? [E
signed_digits]? [sign]?` plus the configured NaN/infinity tokens,
using the same [`crate::format::Format`] configuration object for
tokens, decimal separator, and negative-number pattern.

The decimal digit string is parsed into a `u128` (exact up to the 38
significant digits this crate's formatter ever produces; further
digits are folded into a rounding-relevant sticky flag rather than
rejected) and then scaled by the parsed power of ten through
[`crate::format::scale_pow10`], which carries the same compounding-
rounding caveat for extreme exponents documented there.
*/

use crate::consts::ONE;
use crate::error::{ArgumentError, Error, ParseFloat128Error};
use crate::format::{scale_pow10, Format};
use crate::repr::Float128;

impl Format {
    /// Parses `s` into a `Float128` (spec §4.7). Fails with
    /// [`Error::Parse`] if `s` does not match the grammar, or with
    /// [`Error::Argument`] if this `Format`'s negative pattern is out
    /// of range.
    pub fn parse(&self, s: &str) -> Result<Float128, Error> {
        if self.negative_pattern > 4 {
            return Err(ArgumentError::InvalidNegativePattern(self.negative_pattern).into());
        }
        let trimmed = s.trim();
        if trimmed == self.nan_token {
            return Ok(Float128::quiet_nan());
        }
        if trimmed == self.inf_token {
            return Ok(Float128::infinity(false));
        }
        if trimmed == self.neg_inf_token {
            return Ok(Float128::infinity(true));
        }

        let (negative, body) = self.strip_sign(trimmed)?;
        let body = if let Some(rest) = body.strip_prefix('+') { rest } else { body };

        let (mantissa_part, exp_part) = match body.find(|c: char| c == 'e' || c == 'E') {
            Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
            None => (body, None),
        };

        let sep = self.decimal_separator;
        let (whole, frac) = match mantissa_part.find(sep) {
            Some(idx) => (&mantissa_part[..idx], &mantissa_part[idx + sep.len_utf8()..]),
            None => (mantissa_part, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(fail(s));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(fail(s));
        }

        let exp: i32 = match exp_part {
            None => 0,
            Some(e) => e.parse::<i32>().map_err(|_| fail(s))?,
        };

        let digits: String = whole.chars().chain(frac.chars()).collect();
        let frac_len = frac.len() as i32;
        let decimal_exp = exp - frac_len;

        Ok(decimal_to_float(&digits, decimal_exp, negative))
    }

    /// As [`Format::parse`], but collapses any failure to `None`
    /// (spec §7 "tryParse").
    pub fn try_parse(&self, s: &str) -> Option<Float128> {
        self.parse(s).ok()
    }

    /// Splits a leading/trailing sign or parenthesization off `s`
    /// according to this `Format`'s negative-number pattern (spec
    /// §6.2).
    fn strip_sign<'a>(&self, s: &'a str) -> Result<(bool, &'a str), Error> {
        let neg = self.negative_sign.as_str();
        match self.negative_pattern {
            0 => {
                if s.starts_with('(') && s.ends_with(')') && s.len() >= 2 {
                    Ok((true, &s[1..s.len() - 1]))
                } else {
                    Ok((false, s))
                }
            }
            1 => match s.strip_prefix(neg) {
                Some(rest) => Ok((true, rest)),
                None => Ok((false, s)),
            },
            2 => {
                let prefix = format!("{neg} ");
                match s.strip_prefix(prefix.as_str()) {
                    Some(rest) => Ok((true, rest)),
                    None => Ok((false, s)),
                }
            }
            3 => match s.strip_suffix(neg) {
                Some(rest) => Ok((true, rest)),
                None => Ok((false, s)),
            },
            4 => {
                let suffix = format!(" {neg}");
                match s.strip_suffix(suffix.as_str()) {
                    Some(rest) => Ok((true, rest)),
                    None => Ok((false, s)),
                }
            }
            _ => unreachable!("checked in parse()"),
        }
    }
}

fn fail(original: &str) -> Error {
    ParseFloat128Error(original.to_string()).into()
}

/// Builds `(-1)^sign * digits * 10^decimal_exp` where `digits` is an
/// ASCII decimal digit string (spec §4.7 algorithm steps 2-6,
/// expressed through `Float128` arithmetic rather than a big-integer
/// divide).
fn decimal_to_float(digits: &str, decimal_exp: i32, sign: bool) -> Float128 {
    let digits = digits.trim_start_matches('0');
    let mut decimal_exp = decimal_exp;
    let digits = {
        let trimmed_zeros = digits.trim_end_matches('0');
        decimal_exp += (digits.len() - trimmed_zeros.len()) as i32;
        trimmed_zeros
    };
    if digits.is_empty() {
        return Float128::zero(sign);
    }

    const MAX_EXACT_DIGITS: usize = 38;
    let (kept, extra) = if digits.len() > MAX_EXACT_DIGITS {
        digits.split_at(MAX_EXACT_DIGITS)
    } else {
        (digits, "")
    };
    let extra_exp = extra.len() as i32;

    let mut mantissa: u128 = 0;
    for b in kept.bytes() {
        mantissa = mantissa * 10 + (b - b'0') as u128;
    }

    let mut value = crate::convert::convert_from(mantissa);
    value = scale_pow10(value, decimal_exp + extra_exp);
    if sign {
        value = value.negated();
    }
    value
}

/// Parses `s` using the default [`Format`] (spec §4.7).
pub fn parse(s: &str) -> Result<Float128, Error> {
    Format::default().parse(s)
}

/// As [`parse`], but collapses any failure to `None`.
pub fn try_parse(s: &str) -> Option<Float128> {
    Format::default().try_parse(s)
}

impl core::str::FromStr for Float128 {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer() {
        assert_eq!(parse("1").unwrap(), ONE);
        assert_eq!(parse("-1").unwrap(), ONE.negated());
    }

    #[test]
    fn parses_fraction() {
        let half = Float128::from_bits(0x3ffe0000000000000000000000000000);
        assert_eq!(parse("0.5").unwrap(), half);
    }

    #[test]
    fn parses_scientific_notation() {
        let hundred = parse("1e2").unwrap();
        let expected = crate::arith::mul::mul(ONE, crate::consts::POW10[2]);
        assert_eq!(hundred, expected);
    }

    #[test]
    fn parses_tokens() {
        assert!(parse("NaN").unwrap().is_nan());
        assert!(parse("Infinity").unwrap().is_infinite());
        assert_eq!(parse("-Infinity").unwrap(), Float128::infinity(true));
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("not a number").is_err());
        assert_eq!(try_parse("xyz"), None);
    }

    #[test]
    fn round_trips_through_default_format() {
        let fmt = Format::default();
        let v = crate::arith::add::add(ONE, ONE);
        let s = fmt.format(v).unwrap();
        assert_eq!(fmt.parse(&s).unwrap(), v);
    }

    #[test]
    fn alternate_negative_pattern_parses() {
        let fmt = Format::default().with_negative_pattern(0);
        assert_eq!(fmt.parse("(1)").unwrap(), ONE.negated());
    }

    #[test]
    fn from_str_works() {
        let v: Float128 = "2".parse().unwrap();
        assert_eq!(v, crate::arith::add::add(ONE, ONE));
    }
}
