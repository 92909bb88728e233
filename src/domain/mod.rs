pub mod machine;
pub mod product;

pub use machine::*;
pub use product::*;
