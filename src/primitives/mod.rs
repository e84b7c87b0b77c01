//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the basic building blocks shared by the rest of the
//! crate. For a value-type library this is small: the error type signalled
//! by the fallible arithmetic operations.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: Algebra
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for complex arithmetic.
pub mod errors;
