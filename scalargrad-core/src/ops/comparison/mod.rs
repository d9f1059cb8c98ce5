pub mod min_max;

pub use min_max::{max_op, min_op};
