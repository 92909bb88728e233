use rust_decimal::Decimal;
use tokio::sync::oneshot;

use crate::domain::{Product, Receipt};
use crate::error::VendingError;

pub type ServiceResult<T> = std::result::Result<T, VendingError>;
pub type ServiceResponse<T> = oneshot::Sender<ServiceResult<T>>;

/// Point-in-time copy of a machine's balances and catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineSnapshot {
    pub credit: Decimal,
    pub change_reserve: Decimal,
    pub products: Vec<Product>,
}

/// Typed requests handled by [`super::MachineService`]. Each variant carries
/// its parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum MachineRequest {
    InsertCredit {
        amount: Decimal,
        respond_to: ServiceResponse<()>,
    },
    InsertChange {
        amount: Decimal,
        respond_to: ServiceResponse<()>,
    },
    Buy {
        name: String,
        respond_to: ServiceResponse<Receipt>,
    },
    Purchase {
        name: String,
        quantity: u32,
        respond_to: ServiceResponse<Receipt>,
    },
    ReturnChange {
        respond_to: ServiceResponse<Decimal>,
    },
    RenameProduct {
        name: String,
        new_name: String,
        respond_to: ServiceResponse<()>,
    },
    RepriceProduct {
        name: String,
        price: Decimal,
        respond_to: ServiceResponse<()>,
    },
    RestockProduct {
        name: String,
        amount: u32,
        respond_to: ServiceResponse<()>,
    },
    Snapshot {
        respond_to: ServiceResponse<MachineSnapshot>,
    },
    Shutdown,
}
