use rust_decimal::Decimal;
use thiserror::Error;

/// Failures raised by the vending machine core.
///
/// Every variant maps to exactly one [`ErrorKind`], whose message is what a
/// display collaborator shows to the customer. The `Display` text here adds
/// the amounts involved for logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VendingError {
    #[error("Product not registered: {0}")]
    ProductNotRegistered(String),
    #[error("Product unavailable: requested {requested}, in stock {available}")]
    ProductUnavailable { requested: u32, available: u32 },
    #[error("Insufficient funds: required {required}, credit {available}")]
    InsufficientFunds { required: Decimal, available: Decimal },
    #[error("Product delivery failed: {0}")]
    FailedDelivery(String),
    #[error("Change not available: owed {owed}, reserve {reserve}")]
    InsufficientChange { owed: Decimal, reserve: Decimal },
    #[error("Forbidden operation: {0}")]
    ForbiddenOperation(String),
}

/// The fieldless failure taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ProductNotRegistered,
    ProductUnavailable,
    InsufficientFunds,
    FailedDelivery,
    InsufficientChange,
    ForbiddenOperation,
}

impl ErrorKind {
    /// Customer-facing text for this kind of failure.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::ProductNotRegistered => "Product not registered",
            ErrorKind::ProductUnavailable => "Product unavailable",
            ErrorKind::InsufficientFunds => "Insufficient funds",
            ErrorKind::InsufficientChange => "Change not available",
            ErrorKind::FailedDelivery => "Product delivery failed",
            ErrorKind::ForbiddenOperation => {
                "Operation not permitted by the administrator of this machine"
            }
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl VendingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VendingError::ProductNotRegistered(_) => ErrorKind::ProductNotRegistered,
            VendingError::ProductUnavailable { .. } => ErrorKind::ProductUnavailable,
            VendingError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
            VendingError::FailedDelivery(_) => ErrorKind::FailedDelivery,
            VendingError::InsufficientChange { .. } => ErrorKind::InsufficientChange,
            VendingError::ForbiddenOperation(_) => ErrorKind::ForbiddenOperation,
        }
    }
}
