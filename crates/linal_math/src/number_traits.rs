use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::float_cmp::{DEFAULT_EPSILON_ABS, DEFAULT_EPSILON_REL};

pub trait One {
    fn one() -> Self;
}

impl One for i32 {
    fn one() -> Self {
        1
    }
}

impl One for f32 {
    fn one() -> Self {
        1.0
    }
}

impl One for f64 {
    fn one() -> Self {
        1.0
    }
}

pub trait Zero {
    fn zero() -> Self;
}

impl Zero for i32 {
    fn zero() -> Self {
        0
    }
}

impl Zero for f32 {
    fn zero() -> Self {
        0.0
    }
}

impl Zero for f64 {
    fn zero() -> Self {
        0.0
    }
}

pub trait NumericOps:
    Sized
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Neg<Output = Self>
    + PartialOrd
{
}

impl NumericOps for f32 {}

impl NumericOps for f64 {}

/// Floating point scalars the comparison predicates are defined over.
pub trait Float: Debug + Display + Copy + Zero + One + NumericOps {
    /// Gap between 1.0 and the next representable value.
    fn epsilon() -> Self;
    /// Relative tolerance used when the caller does not supply one.
    fn default_epsilon_rel() -> Self;
    #[must_use]
    fn abs(self) -> Self;
    #[must_use]
    fn max(self, other: Self) -> Self;
}

impl Float for f32 {
    fn epsilon() -> Self {
        DEFAULT_EPSILON_ABS
    }

    fn default_epsilon_rel() -> Self {
        DEFAULT_EPSILON_REL
    }

    fn abs(self) -> Self {
        self.abs()
    }

    fn max(self, other: Self) -> Self {
        self.max(other)
    }
}

impl Float for f64 {
    fn epsilon() -> Self {
        f64::EPSILON
    }

    fn default_epsilon_rel() -> Self {
        1e-4
    }

    fn abs(self) -> Self {
        self.abs()
    }

    fn max(self, other: Self) -> Self {
        self.max(other)
    }
}
