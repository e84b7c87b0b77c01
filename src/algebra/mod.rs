//! Layer 2: Algebra
//!
//! # Purpose
//!
//! This layer provides the complex number value type and its arithmetic:
//! - The `Complex` type, constructors, accessors, equality, and rendering
//! - Componentwise and multiplicative operations, including the fallible
//!   inversions (`divide`, `reciprocal`)
//! - Polar-form helpers: modulus, squared modulus, and the rotation factory
//!
//! # Architecture
//!
//! ```text
//! Layer 2: Algebra ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// The complex value type: construction, accessors, equality, display.
pub mod complex;

/// Arithmetic operations and operator trait implementations.
pub mod ops;

/// Polar-form operations: modulus, squared modulus, rotation.
pub mod polar;
