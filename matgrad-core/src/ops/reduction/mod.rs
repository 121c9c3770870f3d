pub mod mean;
pub mod sum;

pub use mean::reduce_mean_to_op;
pub use sum::{sum_axis_op, sum_op};
