use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::Receipt;
use crate::machine_actor::{MachineRequest, MachineSnapshot, ServiceError};

/// Cloneable handle to a running [`crate::machine_actor::MachineService`].
#[derive(Clone, Debug)]
pub struct MachineClient {
    sender: mpsc::Sender<MachineRequest>,
}

impl MachineClient {
    pub fn new(sender: mpsc::Sender<MachineRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), ServiceError> {
        debug!("Sending shutdown request");
        self.sender
            .send(MachineRequest::Shutdown)
            .await
            .map_err(|e| ServiceError::ActorCommunication(e.to_string()))
    }
}

client_method!(MachineClient => fn insert_credit(amount: Decimal) -> () as MachineRequest::InsertCredit);
client_method!(MachineClient => fn insert_change(amount: Decimal) -> () as MachineRequest::InsertChange);
client_method!(MachineClient => fn buy(name: String) -> Receipt as MachineRequest::Buy);
client_method!(MachineClient => fn purchase(name: String, quantity: u32) -> Receipt as MachineRequest::Purchase);
client_method!(MachineClient => fn return_change() -> Decimal as MachineRequest::ReturnChange);
client_method!(MachineClient => fn rename_product(name: String, new_name: String) -> () as MachineRequest::RenameProduct);
client_method!(MachineClient => fn reprice_product(name: String, price: Decimal) -> () as MachineRequest::RepriceProduct);
client_method!(MachineClient => fn restock_product(name: String, amount: u32) -> () as MachineRequest::RestockProduct);
client_method!(MachineClient => fn snapshot() -> MachineSnapshot as MachineRequest::Snapshot);
