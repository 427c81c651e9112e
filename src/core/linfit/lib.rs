
mod house;
mod jacobi;

pub use house::*;
pub use jacobi::*;
