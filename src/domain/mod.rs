pub mod employee;
pub mod status;

pub use employee::*;
pub use status::*;
