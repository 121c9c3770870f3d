use crate::types::Real;
use num_traits::Num;
use std::fmt::Debug;

/// A trait representing numeric types usable as matrix elements.
///
/// Besides plain arithmetic (`Num`), every element type converts to and from the
/// canonical [`Real`] type. Operations that must not truncate (division, `powf`,
/// gradient reductions) go through `Real`.
pub trait Element: Num + Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Widens the value to the canonical floating-point type.
    fn to_real(self) -> Real;

    /// Converts from the canonical floating-point type. Integer types round to nearest.
    fn from_real(value: Real) -> Self;
}

impl Element for f32 {
    fn to_real(self) -> Real {
        self as Real
    }

    fn from_real(value: Real) -> Self {
        value as f32
    }
}

impl Element for f64 {
    fn to_real(self) -> Real {
        self
    }

    fn from_real(value: Real) -> Self {
        value
    }
}

impl Element for i32 {
    fn to_real(self) -> Real {
        self as Real
    }

    fn from_real(value: Real) -> Self {
        value.round() as i32
    }
}

impl Element for i64 {
    fn to_real(self) -> Real {
        self as Real
    }

    fn from_real(value: Real) -> Self {
        value.round() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<T: Element>(value: T) -> T {
        T::from_real(value.to_real())
    }

    #[test]
    fn test_float_round_trip() {
        assert_eq!(round_trip(1.5f32), 1.5f32);
        assert_eq!(round_trip(-2.25f64), -2.25f64);
    }

    #[test]
    fn test_integer_rounds_to_nearest() {
        assert_eq!(i32::from_real(2.6), 3);
        assert_eq!(i32::from_real(-2.6), -3);
        assert_eq!(i64::from_real(7.4), 7);
        assert_eq!(round_trip(42i64), 42);
    }
}
