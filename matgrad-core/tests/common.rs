use matgrad_core::{Matrix, Real};

// Helper to build a `Matrix<Real>` from nested rows in tests.
// Not every integration test uses every helper.
#[allow(dead_code)]
pub fn matrix(rows: Vec<Vec<Real>>) -> Matrix {
    Matrix::from_rows(rows).expect("Test matrix creation failed")
}

// Sums every element of a matrix into a plain number.
#[allow(dead_code)]
pub fn total(m: &Matrix) -> Real {
    m.sum().item().expect("sum is always (1, 1)")
}
