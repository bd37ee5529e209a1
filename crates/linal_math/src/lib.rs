#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod float_cmp;
pub mod matrix;
mod number_traits;
pub mod vector;

pub use number_traits::{Float, NumericOps, One, Zero};
