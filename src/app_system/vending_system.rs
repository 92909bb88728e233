use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use super::SystemConfig;
use crate::clients::MachineClient;
use crate::domain::{Machine, Product};
use crate::machine_actor::{MachineService, ServiceError};

/// Starts the machine service and manages its lifecycle.
pub struct VendingSystem {
    pub client: MachineClient,
    handle: JoinHandle<Machine>,
}

impl VendingSystem {
    /// Spawns a [`MachineService`] stocked with `catalog`. Must be called
    /// inside a Tokio runtime.
    #[instrument(name = "vending_system", skip(catalog, config), fields(products = catalog.len()))]
    pub fn new(catalog: Vec<Product>, config: &SystemConfig) -> Self {
        info!("Starting vending system");

        let (service, client) = MachineService::new(config.channel_buffer.max(1), Machine::new(catalog));
        let handle = tokio::spawn(service.run());

        info!("Vending system started successfully");
        Self { client, handle }
    }

    /// Stops the service once queued requests are handled and returns the
    /// machine's final state.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<Machine, ServiceError> {
        info!("Shutting down vending system");

        if let Err(e) = self.client.shutdown().await {
            error!(error = %e, "Shutdown request not delivered");
        }
        drop(self.client);

        match self.handle.await {
            Ok(machine) => {
                info!(
                    credit = %machine.credit(),
                    change_reserve = %machine.change_reserve(),
                    "Vending system shutdown complete"
                );
                Ok(machine)
            }
            Err(e) => {
                error!(error = ?e, "Service task failed");
                Err(ServiceError::ActorCommunication(format!("Service task failed: {e}")))
            }
        }
    }
}
