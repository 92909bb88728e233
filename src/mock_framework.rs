//! # Mock Framework
//!
//! Utilities for testing [`MachineClient`] callers without a running service.
//!
//! Use [`create_mock_client`] to get a client and the receiving end of its
//! channel, then helpers like [`expect_buy`] to assert on the next request
//! and script the reply.

use rust_decimal::Decimal;
use tokio::sync::mpsc;

use crate::clients::MachineClient;
use crate::domain::Receipt;
use crate::machine_actor::{MachineRequest, ServiceResponse};

pub fn create_mock_client(buffer_size: usize) -> (MachineClient, mpsc::Receiver<MachineRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MachineClient::new(sender), receiver)
}

/// Next message must be an `InsertCredit` request.
pub async fn expect_insert_credit(
    receiver: &mut mpsc::Receiver<MachineRequest>,
) -> Option<(Decimal, ServiceResponse<()>)> {
    match receiver.recv().await {
        Some(MachineRequest::InsertCredit { amount, respond_to }) => Some((amount, respond_to)),
        _ => None,
    }
}

/// Next message must be a `Buy` request.
pub async fn expect_buy(
    receiver: &mut mpsc::Receiver<MachineRequest>,
) -> Option<(String, ServiceResponse<Receipt>)> {
    match receiver.recv().await {
        Some(MachineRequest::Buy { name, respond_to }) => Some((name, respond_to)),
        _ => None,
    }
}

/// Next message must be a `ReturnChange` request.
pub async fn expect_return_change(
    receiver: &mut mpsc::Receiver<MachineRequest>,
) -> Option<ServiceResponse<Decimal>> {
    match receiver.recv().await {
        Some(MachineRequest::ReturnChange { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VendingError;
    use crate::machine_actor::ServiceError;

    #[tokio::test]
    async fn test_mock_client_forwards_requests() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.insert_credit(Decimal::new(200, 2)).await });

        let (amount, responder) = expect_insert_credit(&mut receiver).await.expect("Expected InsertCredit");
        assert_eq!(amount, Decimal::new(200, 2));
        responder.send(Ok(())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn test_domain_error_is_wrapped() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.buy("Soda".to_string()).await });

        let (name, responder) = expect_buy(&mut receiver).await.expect("Expected Buy");
        assert_eq!(name, "Soda");
        let failure = VendingError::ProductUnavailable { requested: 1, available: 0 };
        responder.send(Err(failure.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Err(ServiceError::Vending(failure)));
    }

    #[tokio::test]
    async fn test_dropped_reply_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let task = tokio::spawn(async move { client.return_change().await });

        let responder = expect_return_change(&mut receiver).await.expect("Expected ReturnChange");
        drop(responder);

        assert!(matches!(task.await.unwrap(), Err(ServiceError::ActorCommunication(_))));
    }
}
