//! Operation builders: each constructs a new graph node from existing
//! operand node(s), computes the forward value and records the local
//! gradient rule. Usable as named functions (`add_op`, `tanh_op`, ...) or,
//! for the arithmetic ones, through `std::ops` on `&Value`.

pub mod activation;
pub mod arithmetic;
pub mod comparison;
pub mod math_elem;
pub mod reduction;
