//! Error types for complex arithmetic.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur during complex
//! arithmetic. Only the inversion operations can fail: zero has no
//! multiplicative inverse.
//!
//! ## Design notes
//!
//! * **Fail-fast**: A zero divisor is signalled immediately as an `Err`,
//!   never smuggled through as a NaN-valued result.
//! * **No-std**: The type is `core`-only; `std::error::Error` is implemented
//!   when the `std` feature is enabled.
//! * **Cheap**: Both variants are unit variants, so the error is `Copy` and
//!   carries no allocation.
//!
//! ## Invariants
//!
//! * Each variant maps to exactly one operation (`divide`, `reciprocal`).
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the zero checks itself.
//! * This module does not provide error recovery or fallback values.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for complex arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexError {
    /// The divisor passed to `divide` has zero squared modulus.
    DivisionByZero,

    /// The receiver of `reciprocal` has zero squared modulus.
    ReciprocalOfZero,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ComplexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DivisionByZero => {
                write!(f, "Division by zero: divisor has zero squared modulus")
            }
            Self::ReciprocalOfZero => {
                write!(f, "Reciprocal of zero: value has zero squared modulus")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ComplexError {}
