pub mod field;
pub mod form;
pub mod template;

pub use field::*;
pub use form::*;
pub use template::*;
