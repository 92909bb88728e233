#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::app_system::{SystemConfig, VendingSystem};
    use crate::domain::Product;
    use crate::error::ErrorKind;
    use crate::mock_framework::{create_mock_client, expect_buy, expect_insert_credit};

    fn money(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Soda", money(150)).unwrap().with_stock(3),
            Product::new("Sandwich", money(500)).unwrap().with_stock(1),
        ]
    }

    #[tokio::test]
    async fn test_full_customer_session() {
        let system = VendingSystem::new(catalog(), &SystemConfig::default());
        let client = system.client.clone();

        client.insert_change(money(1000)).await.unwrap();
        client.insert_credit(money(200)).await.unwrap();
        client.insert_credit(money(-500)).await.unwrap();

        let err = client.buy("Sandwich".to_string()).await.unwrap_err();
        assert_eq!(err.as_vending().map(|e| e.kind()), Some(ErrorKind::InsufficientFunds));

        let receipt = client.buy("Soda".to_string()).await.unwrap();
        assert_eq!(receipt.remaining_credit, money(50));

        assert_eq!(client.return_change().await.unwrap(), money(50));
        assert_eq!(client.return_change().await.unwrap(), Decimal::ZERO);

        drop(client);
        let machine = system.shutdown().await.unwrap();
        assert_eq!(machine.credit(), Decimal::ZERO);
        assert_eq!(machine.change_reserve(), money(950));
        assert_eq!(machine.product("Soda").unwrap().stock(), 2);
        assert_eq!(machine.product("Sandwich").unwrap().stock(), 1);
    }

    #[tokio::test]
    async fn test_change_shortfall_keeps_credit() {
        let system = VendingSystem::new(catalog(), &SystemConfig::default());

        system.client.insert_credit(money(300)).await.unwrap();
        system.client.insert_change(money(100)).await.unwrap();

        let err = system.client.return_change().await.unwrap_err();
        assert_eq!(err.as_vending().map(|e| e.kind()), Some(ErrorKind::InsufficientChange));

        let snapshot = system.client.snapshot().await.unwrap();
        assert_eq!(snapshot.credit, money(300));
        assert_eq!(snapshot.change_reserve, money(100));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_client_flow_against_mock() {
        let (client, mut rx) = create_mock_client(10);

        let session = tokio::spawn(async move {
            client.insert_credit(money(200)).await?;
            client.buy("Soda".to_string()).await
        });

        let (amount, responder) = expect_insert_credit(&mut rx).await.expect("Expected InsertCredit");
        assert_eq!(amount, money(200));
        responder.send(Ok(())).unwrap();

        let (name, responder) = expect_buy(&mut rx).await.expect("Expected Buy");
        assert_eq!(name, "Soda");
        let receipt = crate::domain::Receipt {
            product: name,
            quantity: 1,
            unit_price: money(150),
            total: money(150),
            remaining_credit: money(50),
        };
        responder.send(Ok(receipt.clone())).unwrap();

        assert_eq!(session.await.unwrap(), Ok(receipt));
    }
}
