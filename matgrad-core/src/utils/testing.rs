use crate::matrix::Matrix;
use crate::shape::Shape;
use crate::types::Real;

/// Checks that a matrix has the expected shape and that every element is within
/// `tolerance` of the expected row-major data.
///
/// Panics with the first offending index otherwise.
pub fn check_matrix_near(
    actual: &Matrix,
    expected_shape: Shape,
    expected_data: &[Real],
    tolerance: Real,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(
        actual.numel(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual.as_slice().iter().zip(expected_data.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}
