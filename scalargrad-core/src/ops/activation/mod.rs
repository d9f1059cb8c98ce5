pub mod relu;
pub mod softmax;
pub mod tanh;

pub use relu::relu_op;
pub use softmax::softmax_op;
pub use tanh::tanh_op;
