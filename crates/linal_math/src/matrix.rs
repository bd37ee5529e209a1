use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use log::trace;

use crate::error::{MathError, Result};
use crate::float_cmp::{ApproxEq, Tolerance};
use crate::number_traits::{Float, One, Zero};
use crate::vector::Vector3;

pub type Matrix3f = Matrix3<f32>;
pub type Matrix3d = Matrix3<f64>;

/// 3x3 matrix stored column-major: `columns[col][row]`.
///
/// `PartialEq` compares elements exactly. Use [`ApproxEq`] for results of
/// floating point arithmetic.
#[derive(Clone, Copy, PartialEq)]
pub struct Matrix3<T = f32> {
    columns: [Vector3<T>; 3],
}

impl<T> Debug for Matrix3<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[")?;
        for row in 0..Self::ROWS {
            write!(f, "\t")?;
            for column in &self.columns {
                write!(f, "{}, ", column[row])?;
            }
            writeln!(f)?;
        }
        writeln!(f, "]")
    }
}

impl<T> Matrix3<T> {
    const COLS: usize = 3;
    const ROWS: usize = 3;
    const ELEMENT_COUNT: usize = Self::COLS * Self::ROWS;

    /// Builds a matrix whose columns are `c0`, `c1` and `c2`, in that order.
    pub const fn new(c0: Vector3<T>, c1: Vector3<T>, c2: Vector3<T>) -> Self {
        Self {
            columns: [c0, c1, c2],
        }
    }
}

impl<T> Matrix3<T>
where
    T: Copy,
{
    /// Builds a matrix from its elements in column-major order.
    #[rustfmt::skip]
    pub fn with_values(values: [T; 9]) -> Self {
        Self::new(
            Vector3::new(values[0], values[1], values[2]),
            Vector3::new(values[3], values[4], values[5]),
            Vector3::new(values[6], values[7], values[8]),
        )
    }

    /// Element at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in `0..3`.
    pub fn at(&self, row: usize, col: usize) -> T {
        debug_assert!(row < Self::ROWS, "row index out of range: {row}");
        debug_assert!(col < Self::COLS, "column index out of range: {col}");
        self.columns[col][row]
    }

    /// # Panics
    ///
    /// Panics if `col` is not in `0..3`.
    pub fn at_col(&self, col: usize) -> Vector3<T> {
        debug_assert!(col < Self::COLS, "column index out of range: {col}");
        self.columns[col]
    }

    /// # Panics
    ///
    /// Panics if `row` is not in `0..3`.
    pub fn at_row(&self, row: usize) -> Vector3<T> {
        debug_assert!(row < Self::ROWS, "row index out of range: {row}");
        Vector3::new(
            self.columns[0][row],
            self.columns[1][row],
            self.columns[2][row],
        )
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < Self::ROWS && col < Self::COLS {
            Some(self.columns[col][row])
        } else {
            None
        }
    }

    pub fn transpose(&mut self) {
        let [c0, c1, c2] = &mut self.columns;
        std::mem::swap(&mut c0.y, &mut c1.x);
        std::mem::swap(&mut c0.z, &mut c2.x);
        std::mem::swap(&mut c1.z, &mut c2.y);
    }

    #[must_use]
    pub fn transposed(&self) -> Self {
        let mut transposed = *self;
        transposed.transpose();
        transposed
    }
}

impl<T> Matrix3<T>
where
    T: Copy + Zero + One,
{
    pub fn set_zero(&mut self) {
        *self = Self::zero();
    }

    pub fn set_identity(&mut self) {
        self.set_zero();
        for i in 0..Self::COLS {
            self.columns[i][i] = T::one();
        }
    }
}

impl<T> Matrix3<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    pub fn scale(&mut self, scalar: T) {
        for column in &mut self.columns {
            *column = *column * scalar;
        }
    }

    #[must_use]
    pub fn scaled(&self, scalar: T) -> Self {
        let mut scaled = *self;
        scaled.scale(scalar);
        scaled
    }

    /// Applies the matrix to a column vector.
    pub fn transform_vec(&self, vec: &Vector3<T>) -> Vector3<T> {
        self.columns[0] * vec.x + self.columns[1] * vec.y + self.columns[2] * vec.z
    }
}

impl<T> Zero for Matrix3<T>
where
    T: Copy + Zero,
{
    fn zero() -> Self {
        let column = Vector3::new(T::zero(), T::zero(), T::zero());
        Self::new(column, column, column)
    }
}

impl<T> Default for Matrix3<T>
where
    T: Copy + Zero,
{
    fn default() -> Self {
        Self::zero()
    }
}

pub trait Identity {
    fn identity() -> Self;
}

#[rustfmt::skip]
impl<T> Identity for Matrix3<T>
    where T: Copy + One + Zero {
    fn identity() -> Self {
        Self::new(
            Vector3::new(T::one(), T::zero(), T::zero()),
            Vector3::new(T::zero(), T::one(), T::zero()),
            Vector3::new(T::zero(), T::zero(), T::one()),
        )
    }
}

/// `self * rhs`: each result column is a combination of the columns of
/// `self` weighted by the matching column of `rhs`.
impl<T> Mul<Self> for Matrix3<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            columns: rhs.columns.map(|column| self.transform_vec(&column)),
        }
    }
}

impl<T> MulAssign<Self> for Matrix3<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Self) {
        // Every output element reads a whole row of the receiver.
        *self = *self * rhs;
    }
}

impl<T> Mul<T> for Matrix3<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        self.scaled(rhs)
    }
}

impl<T> MulAssign<T> for Matrix3<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: T) {
        self.scale(rhs);
    }
}

impl<T> Add for Matrix3<T>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T> AddAssign for Matrix3<T>
where
    T: Copy + Add<Output = T>,
{
    fn add_assign(&mut self, rhs: Self) {
        for (column, rhs_column) in self.columns.iter_mut().zip(rhs.columns) {
            *column = *column + rhs_column;
        }
    }
}

impl<T> Sub for Matrix3<T>
where
    T: Copy + Sub<Output = T>,
{
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<T> SubAssign for Matrix3<T>
where
    T: Copy + Sub<Output = T>,
{
    fn sub_assign(&mut self, rhs: Self) {
        for (column, rhs_column) in self.columns.iter_mut().zip(rhs.columns) {
            *column = *column - rhs_column;
        }
    }
}

/// `m[col]` is a column, so `m[col][row]` follows the storage layout.
impl<T> Index<usize> for Matrix3<T> {
    type Output = Vector3<T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.columns[index]
    }
}

impl<T> IndexMut<usize> for Matrix3<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.columns[index]
    }
}

impl<T> TryFrom<&[T]> for Matrix3<T>
where
    T: Copy,
{
    type Error = MathError;

    /// Reads the elements in column-major order.
    fn try_from(values: &[T]) -> Result<Self> {
        let values: [T; 9] = values
            .try_into()
            .map_err(|_| MathError::InvalidElementCount {
                expected: Self::ELEMENT_COUNT,
                actual: values.len(),
            })?;
        Ok(Self::with_values(values))
    }
}

impl<T> From<Matrix3<T>> for [[T; 3]; 3] {
    fn from(matrix: Matrix3<T>) -> Self {
        matrix.columns.map(Into::into)
    }
}

impl<T> ApproxEq<T> for Matrix3<T>
where
    T: Float,
{
    fn approx_eq_with(&self, other: &Self, tolerance: &Tolerance<T>) -> bool {
        for (col, (a, b)) in self.columns.iter().zip(&other.columns).enumerate() {
            if !a.approx_eq_with(b, tolerance) {
                trace!("matrix column {col} differs: {a} != {b}");
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[rustfmt::skip]
    fn sample() -> Matrix3f {
        Matrix3f::new(
            Vector3::new(1.0, 4.0, 7.0),
            Vector3::new(2.0, 5.0, 8.0),
            Vector3::new(3.0, 6.0, 10.0),
        )
    }

    #[test]
    fn identity() {
        let m = Matrix3::<i32>::identity();

        for row in 0..3 {
            for col in 0..3 {
                if row == col {
                    assert_eq!(m.at(row, col), 1);
                } else {
                    assert_eq!(m.at(row, col), 0);
                }
            }
        }
    }

    #[test]
    fn default_is_zero() {
        let m = Matrix3f::default();

        for col in 0..3 {
            assert_eq!(m.at_col(col), Vector3::default());
        }
        assert_eq!(m, Matrix3f::zero());
    }

    #[test]
    fn set_zero_and_set_identity() {
        let mut m = sample();

        m.set_zero();
        assert_eq!(m, Matrix3f::zero());

        let mut m = sample();
        m.set_identity();
        assert_eq!(m, Matrix3f::identity());
    }

    #[test]
    fn copies_are_independent() {
        let original = sample();
        let mut copy = original;

        copy[0][0] = 42.0;

        assert_float_absolute_eq!(original.at(0, 0), 1.0, 0.0);
        assert_float_absolute_eq!(copy.at(0, 0), 42.0, 0.0);
    }

    #[test]
    fn column_round_trip() {
        let c0 = Vector3::new(1.5, -2.0, 3.25);
        let c1 = Vector3::new(0.1, 0.2, 0.3);
        let c2 = Vector3::new(-7.0, 8.0, 9.0);

        let m = Matrix3f::new(c0, c1, c2);

        assert_eq!(m.at_col(0), c0);
        assert_eq!(m.at_col(1), c1);
        assert_eq!(m.at_col(2), c2);
    }

    #[test]
    fn at_reads_row_then_column() {
        let m = sample();

        assert_float_absolute_eq!(m.at(0, 1), 2.0, 0.0);
        assert_float_absolute_eq!(m.at(1, 0), 4.0, 0.0);
        assert_float_absolute_eq!(m.at(2, 2), 10.0, 0.0);
        assert_float_absolute_eq!(m[1][0], 2.0, 0.0);
    }

    #[test]
    fn at_row() {
        let m = sample();

        assert_eq!(m.at_row(0), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m.at_row(1), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.at_row(2), Vector3::new(7.0, 8.0, 10.0));
    }

    #[test]
    fn get() {
        let m = sample();

        assert_eq!(m.get(2, 1), Some(8.0));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 3), None);
    }

    #[test]
    #[should_panic(expected = "index out of")]
    fn at_out_of_range() {
        let _ = sample().at(0, 3);
    }

    #[test]
    #[should_panic(expected = "index out of")]
    fn at_row_out_of_range() {
        let _ = sample().at_row(3);
    }

    #[test]
    #[should_panic(expected = "index out of")]
    fn at_col_out_of_range() {
        let _ = sample().at_col(5);
    }

    #[test]
    fn transpose() {
        let mut m = sample();

        m.transpose();

        assert_eq!(m.at_col(0), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(m.at_col(1), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.at_col(2), Vector3::new(7.0, 8.0, 10.0));
    }

    #[test]
    fn transpose_involution() {
        let m = sample();

        let mut twice = m;
        twice.transpose();
        twice.transpose();

        assert_eq!(twice, m);
        assert_eq!(m.transposed().transposed(), m);
    }

    #[rustfmt::skip]
    #[test]
    fn mul() {
        let a = Matrix3::<i32>::with_values([
            1, 4, 7,
            2, 5, 8,
            3, 6, 9,
        ]);
        let b = Matrix3::<i32>::with_values([
            10, 13, 16,
            11, 14, 17,
            12, 15, 18,
        ]);

        let result = a * b;

        assert_eq!(result.at_row(0), Vector3::new(84, 90, 96));
        assert_eq!(result.at_row(1), Vector3::new(201, 216, 231));
        assert_eq!(result.at_row(2), Vector3::new(318, 342, 366));
    }

    #[test]
    fn mul_assign_uses_receiver_as_left_operand() {
        let mut a = sample();
        let b = Matrix3f::with_values([0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

        a *= b;

        // Right-multiplying by a permutation swaps the receiver's columns.
        assert_eq!(a.at_col(0), sample().at_col(1));
        assert_eq!(a.at_col(1), sample().at_col(0));
        assert_eq!(a.at_col(2), sample().at_col(2));
        assert_eq!(a, sample() * b);
        assert_ne!(a, b * sample());
    }

    #[test]
    fn mul_assign_with_itself() {
        let mut a = sample();
        let copy = a;

        a *= copy;

        assert_eq!(a, sample() * sample());
        assert_float_absolute_eq!(a.at(0, 0), 30.0, 0.0001);
        assert_float_absolute_eq!(a.at(2, 2), 169.0, 0.0001);
    }

    #[test]
    fn identity_is_neutral_for_mul() {
        let m = sample();

        assert_eq!(m * Matrix3f::identity(), m);
        assert_eq!(Matrix3f::identity() * m, m);
    }

    #[test]
    fn mul_is_associative() {
        let a = sample();
        let b = Matrix3f::with_values([0.5, -1.25, 2.0, 3.0, 0.1, -0.7, 1.0, 1.0, 0.3]);
        let c = Matrix3f::with_values([2.0, 0.0, 1.0, -3.0, 0.25, 0.5, 0.9, -0.4, 1.1]);

        assert!(((a * b) * c).approx_eq(&(a * (b * c))));
    }

    #[test]
    fn add_and_sub() {
        let m = sample();

        assert_eq!(m + Matrix3f::zero(), m);
        assert_eq!(m - m, Matrix3f::zero());

        let mut doubled = m;
        doubled += m;
        assert_eq!(doubled, m * 2.0);

        doubled -= m;
        assert_eq!(doubled, m);
    }

    #[test]
    fn scale() {
        let mut m = sample();

        m.scale(0.5);

        assert_float_absolute_eq!(m.at(2, 2), 5.0, 0.0);
        assert_float_absolute_eq!(m.at(0, 1), 1.0, 0.0);
    }

    #[test]
    fn scale_composition() {
        let m = sample();

        assert!(m.scaled(0.3).scaled(7.1).approx_eq(&m.scaled(0.3 * 7.1)));

        let mut chained = m;
        chained *= 1.7;
        chained *= -2.9;
        assert!(chained.approx_eq(&(m * (1.7 * -2.9))));
    }

    #[test]
    fn transform_vec() {
        let m = sample();

        let result = m.transform_vec(&Vector3::new(1.0, 0.0, -1.0));

        assert_eq!(result, Vector3::new(-2.0, -2.0, -3.0));
    }

    #[test]
    fn approx_eq() {
        let m = sample();
        let mut nudged = m;
        nudged[2][1] += 1e-5;

        assert_ne!(m, nudged);
        assert!(m.approx_eq(&nudged));

        nudged[0][0] += 0.1;
        assert!(!m.approx_eq(&nudged));
        assert!(m.approx_eq_with(&nudged, &Tolerance::new(0.2, 0.0)));
    }

    #[test]
    fn approx_eq_rejects_nan() {
        let mut m = Matrix3d::identity();
        m[1][1] = f64::NAN;

        assert!(!m.approx_eq(&m));
    }

    #[test]
    fn columns_and_transformed_vectors_compare_tolerantly() {
        let rotation = Matrix3f::new(
            Vector3::new(0.6, 0.8, 0.0),
            Vector3::new(-0.8, 0.6, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        let round_trip = rotation * rotation.transposed();

        for col in 0..3 {
            assert!(round_trip.at_col(col).approx_eq(&Matrix3f::identity().at_col(col)));
        }
        assert!(rotation
            .transform_vec(&Vector3::new(1.0, 0.0, 0.0))
            .approx_eq(&Vector3::new(0.6, 0.8, 0.0)));
    }

    #[test]
    fn try_from_slice() {
        let values = [1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 10.0];

        let m = Matrix3f::try_from(&values[..]).unwrap();

        assert_eq!(m, sample());
    }

    #[test]
    fn try_from_slice_with_wrong_length() {
        let values = [1.0_f32; 8];

        let error = Matrix3f::try_from(&values[..]).unwrap_err();

        assert_eq!(
            error,
            MathError::InvalidElementCount {
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn into_column_arrays() {
        let columns: [[f32; 3]; 3] = sample().into();

        assert_eq!(columns[0], [1.0, 4.0, 7.0]);
        assert_eq!(columns[2], [3.0, 6.0, 10.0]);
    }

    #[test]
    fn debug_prints_rows() {
        let output = format!("{:?}", Matrix3::<i32>::identity());

        assert_eq!(output, "[\n\t1, 0, 0, \n\t0, 1, 0, \n\t0, 0, 1, \n]\n");
    }
}
