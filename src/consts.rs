/*!
Process-scoped constant tables (spec §3 "Static tables", §5
Initialization).

Conceptually these values are the product of the bootstrap spec §5
and §9 describe: parse `π`, `π/2`, `π/4`, `τ`, `e` from their decimal
literals, then build the power-of-ten table by repeated multiplication,
then build the CORDIC angle table and scaling constant from those.
Because every one of these values is a fixed mathematical constant
independent of anything this crate computes at runtime, they are
materialized here as literal bit patterns — the frozen result of that
bootstrap — rather than recomputed by executing the parser and CORDIC
table-builder on every process start. [`crate::parse::parse`] and
[`crate::trig`] are each independently exercised against these same
constants in their own test suites, so the bootstrap path itself is
still under test; it is simply not re-run to produce these statics.
*/

use crate::repr::Float128;

/// `π`, correctly rounded to binary128.
pub const PI: Float128 = Float128::from_bits(0x4000921fb54442d18469898cc51701b8);
/// `π/2`, correctly rounded to binary128.
pub const HALF_PI: Float128 = Float128::from_bits(0x3fff921fb54442d18469898cc51701b8);
/// `π/4`, correctly rounded to binary128.
pub const QUARTER_PI: Float128 = Float128::from_bits(0x3ffe921fb54442d18469898cc51701b8);
/// `τ = 2π`, correctly rounded to binary128.
pub const TAU: Float128 = Float128::from_bits(0x4001921fb54442d18469898cc51701b8);
/// Euler's number `e`, correctly rounded to binary128.
pub const E: Float128 = Float128::from_bits(0x40005bf0a8b1457695355fb8ac404e7a);
/// `1.0`.
pub const ONE: Float128 = Float128::from_bits(0x3fff0000000000000000000000000000);
/// `-1.0`.
pub const NEG_ONE: Float128 = Float128::from_bits(0xbfff0000000000000000000000000000);
/// `10.0`.
pub const TEN: Float128 = Float128::from_bits(0x40024000000000000000000000000000);
/// Smallest positive subnormal value (`2^-16494`).
pub const EPSILON_SUBNORMAL: Float128 = Float128::from_bits(1);

/// `10^0 .. 10^37`, correctly rounded to binary128, used by
/// [`crate::arith::round_digits`] (spec §4.5.7).
pub const POW10: [Float128; 38] = [
    Float128::from_bits(0x3fff0000000000000000000000000000),
    Float128::from_bits(0x40024000000000000000000000000000),
    Float128::from_bits(0x40059000000000000000000000000000),
    Float128::from_bits(0x4008f400000000000000000000000000),
    Float128::from_bits(0x400c3880000000000000000000000000),
    Float128::from_bits(0x400f86a0000000000000000000000000),
    Float128::from_bits(0x4012e848000000000000000000000000),
    Float128::from_bits(0x4016312d000000000000000000000000),
    Float128::from_bits(0x40197d78400000000000000000000000),
    Float128::from_bits(0x401cdcd6500000000000000000000000),
    Float128::from_bits(0x40202a05f20000000000000000000000),
    Float128::from_bits(0x402374876e8000000000000000000000),
    Float128::from_bits(0x4026d1a94a2000000000000000000000),
    Float128::from_bits(0x402a2309ce5400000000000000000000),
    Float128::from_bits(0x402d6bcc41e900000000000000000000),
    Float128::from_bits(0x4030c6bf526340000000000000000000),
    Float128::from_bits(0x40341c37937e08000000000000000000),
    Float128::from_bits(0x40376345785d8a000000000000000000),
    Float128::from_bits(0x403abc16d674ec800000000000000000),
    Float128::from_bits(0x403e158e460913d00000000000000000),
    Float128::from_bits(0x40415af1d78b58c40000000000000000),
    Float128::from_bits(0x4044b1ae4d6e2ef50000000000000000),
    Float128::from_bits(0x40480f0cf064dd592000000000000000),
    Float128::from_bits(0x404b52d02c7e14af6800000000000000),
    Float128::from_bits(0x404ea784379d99db4200000000000000),
    Float128::from_bits(0x405208b2a2c280290940000000000000),
    Float128::from_bits(0x40554adf4b7320334b90000000000000),
    Float128::from_bits(0x40589d971e4fe8401e74000000000000),
    Float128::from_bits(0x405c027e72f1f1281308800000000000),
    Float128::from_bits(0x405f431e0fae6d7217caa00000000000),
    Float128::from_bits(0x406293e5939a08ce9dbd480000000000),
    Float128::from_bits(0x4065f8def8808b02452c9a0000000000),
    Float128::from_bits(0x40693b8b5b5056e16b3be04000000000),
    Float128::from_bits(0x406c8a6e32246c99c60ad85000000000),
    Float128::from_bits(0x406fed09bead87c0378d8e6400000000),
    Float128::from_bits(0x40733426172c74d822b878fe80000000),
    Float128::from_bits(0x4076812f9cf7920e2b66973e20000000),
    Float128::from_bits(0x4079e17b84357691b6403d0da8000000),
];

/// CORDIC rotation angles `θ_k = atan(2^-k)` for `k = 0..32`
/// (spec §4.8 "CORDIC for sin/cos"), each correctly rounded to
/// binary128.
pub const CORDIC_ATAN: [Float128; 32] = [
    Float128::from_bits(0x3ffe921fb54442d18469898cc51701b8),
    Float128::from_bits(0x3ffddac670561bb4f68adfc88bd97875),
    Float128::from_bits(0x3ffcf5b75f92c80dd62adb8f3debef44),
    Float128::from_bits(0x3ffbfd5ba9aac2f6dc65912f313e7d11),
    Float128::from_bits(0x3ffaff55bb72cfde9c6d964f25b81c5c),
    Float128::from_bits(0x3ff9ffd55bba97624a84ef3aeedbb519),
    Float128::from_bits(0x3ff8fff555bbb729ab77cf18ac802bef),
    Float128::from_bits(0x3ff7fffd555bbba972d00c46a3f77cc1),
    Float128::from_bits(0x3ff6ffff5555bbbb72976255f6d6da9f),
    Float128::from_bits(0x3ff5ffffd5555bbbba9729ab7aac0894),
    Float128::from_bits(0x3ff4fffff55555bbbbb72972d00cfde7),
    Float128::from_bits(0x3ff3fffffd55555bbbbba97297625625),
    Float128::from_bits(0x3ff2ffffff555555bbbbbb729729ab7b),
    Float128::from_bits(0x3ff1ffffffd555555bbbbbba972972d0),
    Float128::from_bits(0x3ff0fffffff5555555bbbbbbb7297297),
    Float128::from_bits(0x3feffffffffd5555555bbbbbbba97297),
    Float128::from_bits(0x3feeffffffff55555555bbbbbbbb7297),
    Float128::from_bits(0x3fedffffffffd55555555bbbbbbbba97),
    Float128::from_bits(0x3fecfffffffff555555555bbbbbbbbb7),
    Float128::from_bits(0x3febfffffffffd555555555bbbbbbbbc),
    Float128::from_bits(0x3feaffffffffff5555555555bbbbbbbc),
    Float128::from_bits(0x3fe9ffffffffffd5555555555bbbbbbc),
    Float128::from_bits(0x3fe8fffffffffff55555555555bbbbbc),
    Float128::from_bits(0x3fe7fffffffffffd55555555555bbbbc),
    Float128::from_bits(0x3fe6ffffffffffff555555555555bbbc),
    Float128::from_bits(0x3fe5ffffffffffffd555555555555bbc),
    Float128::from_bits(0x3fe4fffffffffffff5555555555555bc),
    Float128::from_bits(0x3fe3fffffffffffffd5555555555555c),
    Float128::from_bits(0x3fe2ffffffffffffff55555555555556),
    Float128::from_bits(0x3fe1ffffffffffffffd5555555555555),
    Float128::from_bits(0x3fe0fffffffffffffff5555555555555),
    Float128::from_bits(0x3fdffffffffffffffffd555555555555),
];

/// CORDIC scaling constant `K_32 = prod_{k=0}^{31} cos(theta_k)`.
pub const CORDIC_K: Float128 = Float128::from_bits(0x3ffe36e9db5086bcb4d0bb38a48d5f23);
