//! Elementwise comparisons producing 0/1 indicator matrices.
//!
//! The indicator keeps the element type of its inputs so it can multiply another
//! matrix of that type directly, e.g. to mask a gradient.

pub mod eq;
pub mod gt;
pub mod lt;

pub use eq::{eq_op, eq_scalar_op};
pub use gt::{gt_op, gt_scalar_op};
pub use lt::{lt_op, lt_scalar_op};

use crate::ops::traits::Element;

#[inline]
pub(crate) fn indicator<T: Element>(flag: bool) -> T {
    if flag {
        T::one()
    } else {
        T::zero()
    }
}
