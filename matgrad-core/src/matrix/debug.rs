// src/matrix/debug.rs
use crate::matrix::Matrix;
use crate::ops::traits::Element;
use std::fmt;

impl<T: Element + fmt::Display> fmt::Display for Matrix<T> {
    /// Prints one `| ... |` framed line per row followed by the shape, e.g.
    /// `(| 1 2 |\n| 3 4 |, shape=(2, 2))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let cols = self.shape.cols();
        for r in 0..self.shape.rows() {
            write!(f, "| ")?;
            for value in &self.data[r * cols..(r + 1) * cols] {
                write!(f, "{} ", value)?;
            }
            write!(f, "|")?;
            if r + 1 != self.shape.rows() {
                writeln!(f)?;
            }
        }
        write!(f, ", shape={})", self.shape)
    }
}
