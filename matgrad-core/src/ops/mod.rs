//! # Matrix Operations Module (`ops`)
//!
//! Pure numeric operations on [`Matrix`](crate::Matrix) values. Nothing in here knows
//! about graphs: every function takes matrices by reference and returns a new matrix
//! (or a typed error), so the autograd layer can call them from both its forward and
//! backward steps.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function named `xxx_op`. Methods on
//!   `Matrix` (e.g. `dot`, `transpose`, `sum_axis`) delegate to these.
//! - **Broadcasting:** Elementwise binary ops follow the rule owned by
//!   [`Shape`](crate::Shape); see [`view::broadcast_to_op`] for the explicit expansion.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: Elementwise `+ - * /`, power, negation and scalar variants.
//! - [`linalg`]: Matrix product and transpose.
//! - [`reduction`]: Axis sums and the gradient reduction `reduce_mean_to_op`.
//! - [`comparison`]: Elementwise `<`, `>`, `==` producing 0/1 indicator matrices.
//! - [`view`]: Explicit broadcasting.
//! - [`dtype`]: Element type conversion.

pub mod arithmetic;
pub mod comparison;
pub mod dtype;
pub mod linalg;
pub mod reduction;
pub mod traits;
pub mod view;
