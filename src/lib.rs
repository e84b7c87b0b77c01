//! # complex-plane: Immutable complex number arithmetic for Rust
//!
//! A small, `no_std`-capable complex number value type, generic over the
//! floating-point precision of its components.
//!
//! ## What is a complex number?
//!
//! A complex number is an ordered pair `(real, imaginary)` representing
//! `real + imaginary·i`, where `i² = -1`. This crate provides the full
//! arithmetic surface of that value: addition, subtraction, multiplication,
//! division, reciprocal, conjugate, modulus, integer powers, and a polar
//! "rotation" factory producing the unit complex number at a given angle.
//!
//! ## Quick Start
//!
//! ```rust
//! use complex_plane::prelude::*;
//!
//! let a = Complex::new(1.0, -1.0);
//! let b = Complex::new(1.0, 1.0);
//!
//! // Division is fallible: a zero divisor is a domain error.
//! let q = a.divide(b)?;
//! assert_eq!(q, Complex::new(0.0, -1.0));
//!
//! // Operator syntax is available for the infallible operations.
//! assert_eq!(a + b, Complex::new(2.0, 0.0));
//! assert_eq!(a * b, Complex::new(2.0, 0.0));
//! # Result::<(), ComplexError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `divide` and `reciprocal` return `Result<Complex<T>, ComplexError>`.
//! A zero divisor (or zero receiver, for `reciprocal`) has no multiplicative
//! inverse, so both operations fail fast instead of producing NaN-valued
//! sentinels:
//!
//! ```rust
//! use complex_plane::prelude::*;
//!
//! let zero = Complex::<f64>::zero();
//! assert_eq!(Complex::one().divide(zero), Err(ComplexError::DivisionByZero));
//! assert_eq!(zero.reciprocal(), Err(ComplexError::ReciprocalOfZero));
//! ```
//!
//! Every other operation is total: NaN and infinite components are neither
//! validated nor clamped and simply propagate IEEE-754 semantics.
//!
//! ## Value Semantics
//!
//! `Complex<T>` is `Copy` and immutable: every operation returns a new value,
//! no method mutates its receiver. Equality is componentwise and exact (no
//! epsilon); tolerance belongs in test assertions, not in the type.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features and
//! enable `libm` for the float math intrinsics:
//!
//! ```toml
//! [dependencies]
//! complex-plane = { version = "0.1", default-features = false, features = ["libm"] }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Algebra - the complex value type and its operations.
mod algebra;

// Standard prelude.
pub mod prelude {
    pub use crate::algebra::complex::Complex;
    pub use crate::primitives::errors::ComplexError;
}
