#![warn(clippy::pedantic)]

pub use linal_math as math;

pub mod prelude {
    pub use linal_math::error::{MathError, Result};
    pub use linal_math::float_cmp::{
        float_equal, float_equal_abs, float_equal_abs_with, float_equal_rel,
        float_equal_rel_with, float_equal_tol, float_equal_with, ApproxEq, Tolerance,
    };
    pub use linal_math::matrix::{Identity, Matrix3, Matrix3d, Matrix3f};
    pub use linal_math::vector::{Vector3, Vector3d, Vector3f};
    pub use linal_math::{Float, One, Zero};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_composes_matrices_and_comparisons() {
        let m = Matrix3f::new(
            Vector3::new(2.0, 0.0, 0.0),
            Vector3::new(0.0, 3.0, 0.0),
            Vector3::new(1.0, 0.0, 4.0),
        );

        let product = m * Matrix3f::identity();

        assert!(product.approx_eq(&m));
        assert!(float_equal(product.at(0, 2), 1.0));
        assert_eq!(product.at_row(0), Vector3::new(2.0, 0.0, 1.0));
    }
}
