#[macro_use]
mod macros;
mod machine_client;

pub use machine_client::*;
