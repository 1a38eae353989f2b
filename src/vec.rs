//! 2D vector value type for the simulation.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// 2D vector with value semantics. Every operation returns a new vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Unit vector in the same direction.
    ///
    /// Returns the zero vector when the length is zero, so a coincident pair
    /// of positions never turns into NaN.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == F::zero() {
            Self::zero()
        } else {
            self.scale(F::one() / len)
        }
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Component-wise multiplication.
    pub fn component_mul(self, other: Self) -> Self {
        Vec2 { x: self.x * other.x, y: self.y * other.y }
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Vec2 { x: self.x.min(other.x), y: self.y.min(other.y) }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Vec2 { x: self.x.max(other.x), y: self.y.max(other.y) }
    }

    /// Component-wise clamp into the box spanned by `lo` and `hi`.
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// Squared distance between two points.
    pub fn distance_sq(self, other: Self) -> F {
        (self - other).length_sq()
    }

    pub fn is_zero(self) -> bool {
        self.x == F::zero() && self.y == F::zero()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}
