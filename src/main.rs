use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

use vending_machine::{setup_tracing, Product, SystemConfig, VendingError, VendingSystem};

fn catalog() -> Result<Vec<Product>, VendingError> {
    Ok(vec![
        Product::new("Soda", Decimal::new(150, 2))?.with_stock(3),
        Product::new("Chips", Decimal::new(200, 2))?.with_stock(5),
        Product::new("Sandwich", Decimal::new(500, 2))?,
    ])
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env();
    setup_tracing(&config);

    info!("Starting vending machine");

    let system = VendingSystem::new(catalog().map_err(|e| e.to_string())?, &config);
    let client = system.client.clone();

    client
        .insert_change(Decimal::new(2000, 2))
        .await
        .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("customer_session");
    async {
        info!("Customer inserts credit");
        client.insert_credit(Decimal::new(200, 2)).await?;

        for name in ["Soda", "Sandwich", "Coffee"] {
            match client.buy(name.to_string()).await {
                Ok(receipt) => info!(
                    product = %receipt.product,
                    remaining_credit = %receipt.remaining_credit,
                    "Dispensed"
                ),
                Err(e) => error!(product = name, error = %e, "Purchase declined"),
            }
        }

        let refund = client.return_change().await?;
        info!(refund = %refund, "Change returned");
        Ok::<(), vending_machine::ServiceError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    drop(client);
    let machine = system.shutdown().await.map_err(|e| e.to_string())?;
    for product in machine.products() {
        info!(product = %product.name(), stock = product.stock(), "Final stock");
    }

    info!("Vending machine stopped");
    Ok(())
}
