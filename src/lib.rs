//! # Vending Machine
//!
//! A small transactional state machine: a catalog of products, a customer
//! credit balance and a change reserve, with purchases that either complete
//! in full or leave the machine untouched.
//!
//! ## Layout
//!
//! - **Domain** - the synchronous core → [`Product`], [`Machine`], [`Receipt`]
//! - **Errors** - typed failures with a fixed customer message per kind → [`VendingError`], [`ErrorKind`]
//! - **Service** - single-writer actor owning one machine → [`MachineService`]
//! - **Client** - cloneable async handle with traced methods → [`MachineClient`]
//! - **System** - startup, shutdown, configuration and tracing → [`VendingSystem`], [`SystemConfig`], [`setup_tracing`]
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use vending_machine::{Machine, Product};
//!
//! let soda = Product::new("Soda", Decimal::new(150, 2)).unwrap().with_stock(3);
//! let mut machine = Machine::new(vec![soda]);
//!
//! machine.insert_credit(Decimal::new(200, 2));
//! let receipt = machine.buy("Soda").unwrap();
//! assert_eq!(receipt.remaining_credit, Decimal::new(50, 2));
//! ```
//!
//! Concurrent callers go through the service instead:
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), vending_machine::ServiceError> {
//! use vending_machine::{SystemConfig, VendingSystem};
//!
//! let system = VendingSystem::new(Vec::new(), &SystemConfig::default());
//! system.client.insert_credit(rust_decimal::Decimal::ONE).await?;
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod clients;
pub mod domain;
pub mod error;
pub mod machine_actor;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, SystemConfig, VendingSystem};
pub use clients::MachineClient;
pub use domain::{Machine, Product, Receipt};
pub use error::{ErrorKind, VendingError};
pub use machine_actor::{MachineService, MachineSnapshot, ServiceError};
