/*!
The accelerator seam: a narrow capability for the two wide-integer
primitives the arithmetic core leans on most heavily, `bigmul64` and
`divrem128`.

This is a zero-cost substitution point (spec §4.2, §9): the arithmetic
core is written once against the [`Accelerator`] trait, and a backend
is selected at compile time. [`NativeAccelerator`] routes through the
host's native `u128` (which on every supported target lowers to either
a hardware wide-multiply instruction or the same kind of software
routine [`SoftAccelerator`] implements by hand); [`SoftAccelerator`]
never touches `u128` arithmetic and instead builds both primitives out
of 32-bit partial products and the [`crate::wide`] long-division
routine. Selecting one over the other never changes an observable
`Float128` result.
*/

use crate::wide::{divrem_u128 as wide_divrem_u128, widening_mul_u64, U128};

/// Capability exposing the two wide-integer primitives the arithmetic
/// core is built from.
pub trait Accelerator {
    /// Unsigned full product of two 64-bit words, returned as `(lo, hi)`.
    fn bigmul64(&self, a: u64, b: u64) -> (u64, u64);

    /// Unsigned 128-bit division with remainder, returned as `(q, r)`.
    /// Precondition: `d != 0`.
    fn divrem128(&self, n: u128, d: u128) -> (u128, u128);
}

/// Backend that delegates to the host's native 128-bit integer
/// arithmetic. On every target Rust supports, `u128` multiplication
/// and division already compile to either a hardware wide-multiply
/// instruction or a compiler-provided software routine, so this is
/// the "use a host primitive if available" half of the seam.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeAccelerator;

impl Accelerator for NativeAccelerator {
    fn bigmul64(&self, a: u64, b: u64) -> (u64, u64) {
        let p = (a as u128) * (b as u128);
        (p as u64, (p >> 64) as u64)
    }

    fn divrem128(&self, n: u128, d: u128) -> (u128, u128) {
        (n / d, n % d)
    }
}

/// Pure-software backend. Never relies on a native wide integer type:
/// `bigmul64` is four 32x32->64 partial products (see
/// [`crate::wide::widening_mul_u64`]) and `divrem128` is the
/// [`crate::wide`] binary long-division routine over [`U128`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftAccelerator;

impl Accelerator for SoftAccelerator {
    fn bigmul64(&self, a: u64, b: u64) -> (u64, u64) {
        widening_mul_u64(a, b)
    }

    fn divrem128(&self, n: u128, d: u128) -> (u128, u128) {
        let (q, r) = wide_divrem_u128(U128::from_u128(n), U128::from_u128(d));
        (q.to_u128(), r.to_u128())
    }
}

/// The accelerator backend used by the arithmetic core unless the
/// `soft-accelerator` feature is enabled. Selecting the feature swaps
/// every computation over to [`SoftAccelerator`] with no change in
/// observable results (see the crate-level property tests).
#[cfg(not(feature = "soft-accelerator"))]
pub type DefaultAccelerator = NativeAccelerator;

/// See [`DefaultAccelerator`] (soft-accelerator feature enabled).
#[cfg(feature = "soft-accelerator")]
pub type DefaultAccelerator = SoftAccelerator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_backends_agree() {
        let native = NativeAccelerator;
        let soft = SoftAccelerator;
        let pairs = [(0u64, 0u64), (1, 1), (u64::MAX, u64::MAX), (12345, 67890)];
        for (a, b) in pairs {
            assert_eq!(native.bigmul64(a, b), soft.bigmul64(a, b));
        }

        let dpairs: [(u128, u128); 3] = [(100, 7), (u128::MAX, 3), (1, 1)];
        for (n, d) in dpairs {
            assert_eq!(native.divrem128(n, d), soft.divrem128(n, d));
        }
    }
}
