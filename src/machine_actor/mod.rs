//! The single-writer service that serialises access to a machine.

pub mod error;
mod messages;
mod service;

pub use error::*;
pub use messages::*;
pub use service::*;
