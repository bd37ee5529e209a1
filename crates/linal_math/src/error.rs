use std::fmt::{Display, Formatter};

pub type Result<T> = std::result::Result<T, MathError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// A matrix was built from a slice that does not hold exactly one value per element.
    InvalidElementCount { expected: usize, actual: usize },
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::InvalidElementCount { expected, actual } => {
                write!(f, "expected {expected} elements, got {actual}")
            }
        }
    }
}

impl std::error::Error for MathError {}
