/*!
A self-contained software implementation of IEEE 754-2019 `binary128`
(quadruple-precision) floating point, usable on 64-bit-only hosts with
no dependency on a native wide-integer type.

This is the API documentation.

The crate exposes a single value type, [`Float128`][crate::repr::Float128],
and a uniform view trait over it, [`Quad`][crate::number::Quad]. Every
[`Float128`][crate::repr::Float128] operation — arithmetic, conversion,
parsing, formatting, transcendentals — is built from the leaf-first
layers below, mirroring the module order of this crate's own lineage:

- [`wide`] — fixed-width 128/256/512-bit unsigned integers with no
  arbitrary-precision backing.
- [`accel`] — the accelerator seam: the two wide-integer primitives the
  arithmetic core is built from, swappable between a native-`u128`
  backend and a pure-software one.
- [`repr`] — the 128-bit bit layout, encode/decode.
- [`classify`] — classification predicates.
- [`arith`] — the correctly-rounded arithmetic core.
- [`convert`] — narrower IEEE formats and integer widths, both ways.
- [`parse`] / [`format`] — decimal text in and out.
- [`trig`], [`explog`], [`roots`] — the transcendental functions.
- [`io`] — exact-bit big/little-endian byte readers and writers.
- [`number`] — the [`Quad`][crate::number::Quad] trait.
- [`error`] — the error taxonomy for the handful of fallible entry points.
*/

pub mod accel;
pub mod arith;
pub mod classify;
pub mod consts;
pub mod convert;
pub mod error;
pub mod explog;
pub mod format;
pub mod io;
pub mod number;
pub mod ops;
pub mod parse;
pub mod repr;
pub mod roots;
pub mod trig;
pub mod wide;

pub use crate::error::Error;
pub use crate::number::Quad;
pub use crate::repr::Float128;
