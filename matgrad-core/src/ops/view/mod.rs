pub mod expand;

pub use expand::broadcast_to_op;
