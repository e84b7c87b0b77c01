//! The complex number value type.
//!
//! ## Purpose
//!
//! This module defines `Complex<T>`, an immutable pair of floating-point
//! components representing `re + im·i`, together with its constructors,
//! accessors, equality, hashing, and textual rendering.
//!
//! ## Design notes
//!
//! * **Value semantics**: `Complex<T>` is `Copy`; every operation returns a
//!   new value and no method mutates its receiver.
//! * **Generic precision**: The component type is any `num_traits::Float`
//!   (ordinarily `f64`), so the same code serves `f32` callers.
//! * **Exact equality**: `PartialEq` is derived componentwise IEEE-754
//!   equality. Tolerance belongs in assertions, not in the type.
//! * **Hashing**: `Hash` is implemented for the concrete `f32`/`f64`
//!   instantiations via bit patterns, with `-0.0` normalized to `0.0` so
//!   that values comparing equal hash identically.
//!
//! ## Key concepts
//!
//! * **Well-known constants**: `zero()` (additive identity), `one()`
//!   (multiplicative identity), and `i()` (the imaginary unit) are exposed
//!   as constructors because the generic component type precludes associated
//!   constants.
//! * **Real-axis projection**: `from_real(value)` builds `(value, 0)`; the
//!   result depends only on `value`.
//!
//! ## Invariants
//!
//! * Components are never validated or clamped: NaN and infinity propagate
//!   IEEE-754 semantics.
//! * Equal values (including `0.0` vs `-0.0`) produce equal hashes.
//!
//! ## Non-goals
//!
//! * This module does not implement the arithmetic (see `algebra::ops`).
//! * This module does not provide polar conversions (see `algebra::polar`).

// External dependencies
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use num_traits::Float;

// ============================================================================
// Complex Type
// ============================================================================

/// An immutable complex number `re + im·i` with `Float` components.
///
/// # Examples
///
/// ```rust
/// use complex_plane::prelude::*;
///
/// let c = Complex::new(-12.0, 10.0);
/// assert_eq!(c.re(), -12.0);
/// assert_eq!(c.im(), 10.0);
/// assert_eq!(c.to_string(), "Complex{real=-12.0, imaginary=10.0}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    /// Real component.
    pub(crate) re: T,

    /// Imaginary component.
    pub(crate) im: T,
}

impl<T: Float> Complex<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a complex number from its real and imaginary components.
    #[inline]
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Create a complex number on the real axis: `(value, 0)`.
    ///
    /// The imaginary component is always zero; the result depends only on
    /// `value`.
    #[inline]
    pub fn from_real(value: T) -> Self {
        Self::new(value, T::zero())
    }

    /// The additive identity `(0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// The multiplicative identity `(1, 0)`.
    #[inline]
    pub fn one() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// The imaginary unit `(0, 1)`.
    #[inline]
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the real component.
    #[inline]
    pub fn re(&self) -> T {
        self.re
    }

    /// Get the imaginary component.
    #[inline]
    pub fn im(&self) -> T {
        self.im
    }
}

// ============================================================================
// Default Implementation
// ============================================================================

/// The default complex number is zero.
impl<T: Float> Default for Complex<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

/// Renders as `Complex{real=<R>, imaginary=<I>}`.
///
/// Components use their `Debug` form so integral doubles keep a trailing
/// `.0` (`1.0`, `-12.0`), keeping the rendering stable for string-based
/// consumers.
impl<T: Float + Debug> Display for Complex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Complex{{real={:?}, imaginary={:?}}}", self.re, self.im)
    }
}

// ============================================================================
// Hash Implementations
// ============================================================================

// Normalize -0.0 to 0.0 so that values comparing equal hash identically.
#[inline]
fn bits_f64(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

#[inline]
fn bits_f32(v: f32) -> u32 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

impl Hash for Complex<f64> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        bits_f64(self.re).hash(state);
        bits_f64(self.im).hash(state);
    }
}

impl Hash for Complex<f32> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        bits_f32(self.re).hash(state);
        bits_f32(self.im).hash(state);
    }
}
