//! Tolerant floating point equality.
//!
//! Two values are equal when their difference is within an absolute bound
//! (meaningful near zero) or within a bound proportional to the larger
//! magnitude, floored at 1 (meaningful far from zero). The relative test
//! grows with magnitude, so a fixed difference such as `1.0` eventually
//! compares equal once both operands are large enough.
//!
//! Non-finite inputs follow IEEE arithmetic without special casing:
//! - a NaN operand never compares equal, not even to itself;
//! - an infinity never equals the same infinity (`inf - inf` is NaN);
//! - an infinity equals every other non-NaN value, including the opposite
//!   infinity, because both the difference and the relative bound are
//!   infinite. Check `is_finite` first when that matters.

use crate::number_traits::Float;

pub const DEFAULT_EPSILON_REL: f32 = 1e-4;
pub const DEFAULT_EPSILON_ABS: f32 = f32::EPSILON;

/// Pair of thresholds used by [`float_equal_tol`] and [`ApproxEq`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance<T = f32> {
    pub relative: T,
    pub absolute: T,
}

impl<T> Tolerance<T> {
    pub const fn new(relative: T, absolute: T) -> Self {
        Self { relative, absolute }
    }

    #[must_use]
    pub fn with_relative(self, relative: T) -> Self {
        Self { relative, ..self }
    }

    #[must_use]
    pub fn with_absolute(self, absolute: T) -> Self {
        Self { absolute, ..self }
    }
}

impl<T> Default for Tolerance<T>
where
    T: Float,
{
    fn default() -> Self {
        Self::new(T::default_epsilon_rel(), T::epsilon())
    }
}

pub fn float_equal_abs_with<T: Float>(a: T, b: T, epsilon_abs: T) -> bool {
    (a - b).abs() <= epsilon_abs
}

pub fn float_equal_abs<T: Float>(a: T, b: T) -> bool {
    float_equal_abs_with(a, b, T::epsilon())
}

/// `|a - b| <= max(1, |a|, |b|) * epsilon_rel`
pub fn float_equal_rel_with<T: Float>(a: T, b: T, epsilon_rel: T) -> bool {
    let magnitude = T::one().max(a.abs()).max(b.abs());
    (a - b).abs() <= magnitude * epsilon_rel
}

pub fn float_equal_rel<T: Float>(a: T, b: T) -> bool {
    float_equal_rel_with(a, b, T::default_epsilon_rel())
}

pub fn float_equal_with<T: Float>(a: T, b: T, epsilon_rel: T, epsilon_abs: T) -> bool {
    float_equal_abs_with(a, b, epsilon_abs) || float_equal_rel_with(a, b, epsilon_rel)
}

pub fn float_equal_tol<T: Float>(a: T, b: T, tolerance: &Tolerance<T>) -> bool {
    float_equal_with(a, b, tolerance.relative, tolerance.absolute)
}

pub fn float_equal<T: Float>(a: T, b: T) -> bool {
    float_equal_with(a, b, T::default_epsilon_rel(), T::epsilon())
}

pub trait ApproxEq<T: Float = f32> {
    fn approx_eq_with(&self, other: &Self, tolerance: &Tolerance<T>) -> bool;

    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, &Tolerance::default())
    }
}

impl ApproxEq<f32> for f32 {
    fn approx_eq_with(&self, other: &Self, tolerance: &Tolerance<f32>) -> bool {
        float_equal_tol(*self, *other, tolerance)
    }
}

impl ApproxEq<f64> for f64 {
    fn approx_eq_with(&self, other: &Self, tolerance: &Tolerance<f64>) -> bool {
        float_equal_tol(*self, *other, tolerance)
    }
}
