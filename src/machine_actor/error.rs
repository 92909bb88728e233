use thiserror::Error;

use crate::error::VendingError;

/// Errors returned by [`crate::clients::MachineClient`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    Vending(#[from] VendingError),
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl ServiceError {
    /// The domain failure, if this was one.
    pub fn as_vending(&self) -> Option<&VendingError> {
        match self {
            ServiceError::Vending(e) => Some(e),
            ServiceError::ActorCommunication(_) => None,
        }
    }
}
