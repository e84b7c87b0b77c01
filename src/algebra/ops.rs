//! Arithmetic operations for the complex value type.
//!
//! ## Purpose
//!
//! This module implements the arithmetic surface of `Complex<T>`: negation,
//! conjugation, the componentwise and multiplicative operations, the
//! fallible inversions, and integer powers. Operator traits (`Neg`, `Add`,
//! `Sub`, `Mul`) and the `num_traits` identity traits delegate to the named
//! methods.
//!
//! ## Design notes
//!
//! * **Named methods are primary**: `add`, `subtract`, `multiply`, `divide`
//!   carry the semantics; the `core::ops` impls are thin delegations for
//!   operator syntax.
//! * **Fallible inversions**: `divide` and `reciprocal` return `Result`
//!   because zero has no multiplicative inverse. Infallible operations never
//!   return `Result`.
//! * **Division strategy**: `a / b` is computed as
//!   `a * conjugate(b) / squared_modulus(b)`, scaling componentwise by the
//!   real denominator.
//!
//! ## Key concepts
//!
//! * **Conjugate**: `(re, -im)`; conjugation is an involution.
//! * **Reciprocal**: `conjugate / squared_modulus`, the multiplicative
//!   inverse.
//! * **Integer power**: literal repeated self-multiplication, so the
//!   floating-point rounding of `pow(n)` matches an n-fold `multiply` chain
//!   exactly.
//!
//! ## Invariants
//!
//! * `subtract` preserves operand order: `a.subtract(b)` is `a - b`.
//! * `pow(0)` is the multiplicative identity for every base.
//! * No operation mutates its receiver.
//!
//! ## Non-goals
//!
//! * No `core::ops::Div` impl: division is fallible and a `Result`-valued
//!   `/` operator would be surprising. Use `divide`.
//! * No negative exponents: the `u32` exponent makes the non-negativity
//!   precondition a type-level guarantee.

// Internal dependencies
use crate::algebra::complex::Complex;
use crate::primitives::errors::ComplexError;

// External dependencies
use core::ops::{Add, Mul, Neg, Sub};
use num_traits::{Float, One, Zero};

// ============================================================================
// Named Arithmetic Methods
// ============================================================================

impl<T: Float> Complex<T> {
    /// Negate both components: `(-re, -im)`.
    #[inline]
    pub fn negate(self) -> Self {
        Self::new(-self.re, -self.im)
    }

    /// The complex conjugate: `(re, -im)`.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Componentwise sum.
    #[inline]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }

    /// Componentwise difference `self - other`.
    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.re - other.re, self.im - other.im)
    }

    /// Complex product: `(ac - bd, ad + bc)` for `a+bi` and `c+di`.
    #[inline]
    pub fn multiply(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// Complex quotient `self / other`.
    ///
    /// Computed as `self * conjugate(other) / squared_modulus(other)`.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::DivisionByZero`] when `other` has zero
    /// squared modulus.
    pub fn divide(self, other: Self) -> Result<Self, ComplexError> {
        let denom = other.squared_modulus();
        if denom == T::zero() {
            return Err(ComplexError::DivisionByZero);
        }

        let num = self.multiply(other.conjugate());
        Ok(Self::new(num.re / denom, num.im / denom))
    }

    /// The multiplicative inverse: `conjugate / squared_modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`ComplexError::ReciprocalOfZero`] when `self` has zero
    /// squared modulus.
    pub fn reciprocal(self) -> Result<Self, ComplexError> {
        let denom = self.squared_modulus();
        if denom == T::zero() {
            return Err(ComplexError::ReciprocalOfZero);
        }

        let conj = self.conjugate();
        Ok(Self::new(conj.re / denom, conj.im / denom))
    }

    /// Raise to a non-negative integer power by repeated multiplication.
    ///
    /// `pow(0)` is the multiplicative identity; for `p >= 1` the result is
    /// `self` multiplied by itself `p - 1` additional times, so rounding
    /// matches an explicit `multiply` chain exactly.
    pub fn pow(self, p: u32) -> Self {
        if p == 0 {
            return Self::one();
        }

        let mut acc = self;
        for _ in 1..p {
            acc = acc.multiply(self);
        }
        acc
    }
}

// ============================================================================
// Operator Trait Implementations
// ============================================================================

impl<T: Float> Neg for Complex<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<T: Float> Add for Complex<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Complex::add(self, rhs)
    }
}

impl<T: Float> Sub for Complex<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl<T: Float> Mul for Complex<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

// ============================================================================
// Identity Trait Implementations
// ============================================================================

impl<T: Float> Zero for Complex<T> {
    #[inline]
    fn zero() -> Self {
        Complex::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re == T::zero() && self.im == T::zero()
    }
}

impl<T: Float> One for Complex<T> {
    #[inline]
    fn one() -> Self {
        Complex::one()
    }
}
