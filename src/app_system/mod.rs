//! System orchestration, configuration, startup and shutdown.

pub mod config;
pub mod logging;
pub mod vending_system;

pub use config::*;
pub use logging::*;
pub use vending_system::*;
