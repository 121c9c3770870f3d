use std::fmt;

/// The `(rows, cols)` dimensions of a 2-D matrix.
///
/// Shapes are immutable once built. Besides holding the two dimensions, `Shape` owns the
/// broadcasting rule shared by every elementwise operation and the matrix-product
/// compatibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// The `(1, 1)` shape of a scalar wrapper.
    pub const fn scalar() -> Self {
        Shape { rows: 1, cols: 1 }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements, `rows * cols`.
    pub const fn numel(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_scalar(&self) -> bool {
        self.rows == 1 && self.cols == 1
    }

    /// Shape with rows and columns swapped.
    pub const fn transposed(&self) -> Self {
        Shape {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Checks whether two shapes can be combined elementwise.
    ///
    /// Two shapes are broadcastable if any of the following holds:
    /// - one of them is `(1, 1)`;
    /// - they share rows and one of them has a single column;
    /// - they share columns and one of them has a single row;
    /// - they are equal.
    pub fn is_broadcastable_with(&self, other: &Shape) -> bool {
        self.is_scalar()
            || other.is_scalar()
            || (self.rows == other.rows && (self.cols == 1 || other.cols == 1))
            || (self.cols == other.cols && (self.rows == 1 || other.rows == 1))
            || self == other
    }

    /// Result shape of broadcasting `self` against `other`, or `None` if the
    /// shapes are not broadcastable.
    ///
    /// The larger non-1 dimension wins on each axis; `(1, 1)` against anything
    /// yields the other shape.
    pub fn broadcast(&self, other: &Shape) -> Option<Shape> {
        if self == other {
            return Some(*self);
        }
        if self.is_scalar() {
            return Some(*other);
        }
        if other.is_scalar() {
            return Some(*self);
        }
        if self.rows == other.rows && (self.cols == 1 || other.cols == 1) {
            return Some(Shape::new(self.rows, self.cols.max(other.cols)));
        }
        if self.cols == other.cols && (self.rows == 1 || other.rows == 1) {
            return Some(Shape::new(self.rows.max(other.rows), self.cols));
        }
        None
    }

    /// Checks whether `self · other` is a valid matrix product.
    pub fn is_dot_compatible(&self, other: &Shape) -> bool {
        self.cols == other.rows
    }

    /// Result shape of `self · other`: `(self.rows, other.cols)`.
    pub fn dot(&self, other: &Shape) -> Option<Shape> {
        if self.is_dot_compatible(other) {
            Some(Shape::new(self.rows, other.cols))
        } else {
            None
        }
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Shape::new(rows, cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcastable_rules() {
        let m = Shape::new(3, 4);
        assert!(m.is_broadcastable_with(&Shape::scalar()));
        assert!(Shape::scalar().is_broadcastable_with(&m));
        assert!(m.is_broadcastable_with(&Shape::new(1, 4)));
        assert!(m.is_broadcastable_with(&Shape::new(3, 1)));
        assert!(m.is_broadcastable_with(&Shape::new(3, 4)));
        assert!(!m.is_broadcastable_with(&Shape::new(4, 3)));
        assert!(!m.is_broadcastable_with(&Shape::new(2, 4)));
        // A row vector and a column vector do not share any axis.
        assert!(!Shape::new(1, 3).is_broadcastable_with(&Shape::new(2, 1)));
    }

    #[test]
    fn test_broadcast_result() {
        let m = Shape::new(3, 4);
        assert_eq!(m.broadcast(&Shape::scalar()), Some(m));
        assert_eq!(Shape::scalar().broadcast(&m), Some(m));
        assert_eq!(Shape::new(1, 4).broadcast(&m), Some(m));
        assert_eq!(m.broadcast(&Shape::new(3, 1)), Some(m));
        assert_eq!(Shape::new(3, 1).broadcast(&Shape::new(3, 1)), Some(Shape::new(3, 1)));
        assert_eq!(m.broadcast(&Shape::new(2, 4)), None);
    }

    #[test]
    fn test_broadcast_agrees_with_predicate() {
        let shapes = [
            Shape::new(1, 1),
            Shape::new(1, 3),
            Shape::new(2, 1),
            Shape::new(2, 3),
            Shape::new(3, 2),
        ];
        for a in &shapes {
            for b in &shapes {
                assert_eq!(a.is_broadcastable_with(b), a.broadcast(b).is_some(), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_dot_shape() {
        let a = Shape::new(2, 3);
        let b = Shape::new(3, 5);
        assert!(a.is_dot_compatible(&b));
        assert_eq!(a.dot(&b), Some(Shape::new(2, 5)));
        assert!(!b.is_dot_compatible(&a));
        assert_eq!(b.dot(&a), None);
    }

    #[test]
    fn test_display_and_transpose() {
        let s = Shape::new(2, 7);
        assert_eq!(s.to_string(), "(2, 7)");
        assert_eq!(s.transposed(), Shape::new(7, 2));
        assert_eq!(s.numel(), 14);
        assert_eq!(Shape::from((4, 1)), Shape::new(4, 1));
    }
}
