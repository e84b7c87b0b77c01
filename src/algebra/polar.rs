//! Polar-form operations.
//!
//! This module provides the magnitude accessors and the rotation factory,
//! the polar-coordinate view of the complex plane.

// Internal dependencies
use crate::algebra::complex::Complex;

// External dependencies
use num_traits::Float;

impl<T: Float> Complex<T> {
    /// The squared Euclidean magnitude `re² + im²`.
    ///
    /// Always non-negative for finite components; cheaper than `modulus`
    /// because it avoids the square root.
    #[inline]
    pub fn squared_modulus(self) -> T {
        self.re * self.re + self.im * self.im
    }

    /// The Euclidean magnitude `sqrt(re² + im²)`.
    #[inline]
    pub fn modulus(self) -> T {
        self.squared_modulus().sqrt()
    }

    /// The unit complex number at angle `theta` radians: `(cos θ, sin θ)`.
    ///
    /// Multiplying by `rotation(theta)` rotates a value by `theta` around
    /// the origin.
    #[inline]
    pub fn rotation(theta: T) -> Self {
        Self::new(theta.cos(), theta.sin())
    }
}
