pub mod builder;
pub mod filler;

pub use builder::*;
pub use filler::*;
