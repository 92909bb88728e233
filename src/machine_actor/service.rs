use rust_decimal::Decimal;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use super::messages::{MachineRequest, MachineSnapshot, ServiceResponse};
use crate::clients::MachineClient;
use crate::domain::{Machine, Receipt};

/// Single-writer actor that owns one [`Machine`].
///
/// Requests are handled one at a time in arrival order, so the
/// check-then-commit sequence of a purchase can never interleave with
/// another caller's.
pub struct MachineService {
    receiver: mpsc::Receiver<MachineRequest>,
    machine: Machine,
}

impl MachineService {
    pub fn new(buffer_size: usize, machine: Machine) -> (Self, MachineClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, machine };
        let client = MachineClient::new(sender);
        (service, client)
    }

    /// Runs until a `Shutdown` request arrives or every client is dropped.
    /// Returns the machine in its final state.
    #[instrument(name = "machine_service", skip(self))]
    pub async fn run(mut self) -> Machine {
        info!(products = self.machine.products().len(), "MachineService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                MachineRequest::InsertCredit { amount, respond_to } => {
                    self.handle_insert_credit(amount, respond_to);
                }
                MachineRequest::InsertChange { amount, respond_to } => {
                    self.handle_insert_change(amount, respond_to);
                }
                MachineRequest::Buy { name, respond_to } => {
                    self.handle_purchase(name, 1, respond_to);
                }
                MachineRequest::Purchase {
                    name,
                    quantity,
                    respond_to,
                } => {
                    self.handle_purchase(name, quantity, respond_to);
                }
                MachineRequest::ReturnChange { respond_to } => {
                    self.handle_return_change(respond_to);
                }
                MachineRequest::RenameProduct {
                    name,
                    new_name,
                    respond_to,
                } => {
                    self.handle_rename_product(name, new_name, respond_to);
                }
                MachineRequest::RepriceProduct {
                    name,
                    price,
                    respond_to,
                } => {
                    self.handle_reprice_product(name, price, respond_to);
                }
                MachineRequest::RestockProduct {
                    name,
                    amount,
                    respond_to,
                } => {
                    self.handle_restock_product(name, amount, respond_to);
                }
                MachineRequest::Snapshot { respond_to } => {
                    self.handle_snapshot(respond_to);
                }
                MachineRequest::Shutdown => {
                    info!("MachineService shutting down");
                    break;
                }
            }
        }

        info!("MachineService stopped");
        self.machine
    }

    #[instrument(fields(amount = %amount), skip(self, respond_to))]
    fn handle_insert_credit(&mut self, amount: Decimal, respond_to: ServiceResponse<()>) {
        debug!("Processing insert_credit request");
        self.machine.insert_credit(amount);
        info!(credit = %self.machine.credit(), "Credit updated");
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(amount = %amount), skip(self, respond_to))]
    fn handle_insert_change(&mut self, amount: Decimal, respond_to: ServiceResponse<()>) {
        debug!("Processing insert_change request");
        self.machine.insert_change(amount);
        info!(change_reserve = %self.machine.change_reserve(), "Change reserve updated");
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(product = %name, quantity = quantity), skip(self, respond_to))]
    fn handle_purchase(&mut self, name: String, quantity: u32, respond_to: ServiceResponse<Receipt>) {
        debug!("Processing purchase request");

        let result = self.machine.purchase(&name, quantity);
        match &result {
            Ok(receipt) => info!(
                total = %receipt.total,
                remaining_credit = %receipt.remaining_credit,
                "Purchase completed"
            ),
            Err(e) => error!(kind = ?e.kind(), error = %e, "{}", e.kind().message()),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_return_change(&mut self, respond_to: ServiceResponse<Decimal>) {
        debug!("Processing return_change request");

        let result = self.machine.return_change();
        match &result {
            Ok(refund) => info!(
                refund = %refund,
                change_reserve = %self.machine.change_reserve(),
                "Change returned"
            ),
            Err(e) => error!(kind = ?e.kind(), error = %e, "{}", e.kind().message()),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(product = %name, new_name = %new_name), skip(self, respond_to))]
    fn handle_rename_product(&mut self, name: String, new_name: String, respond_to: ServiceResponse<()>) {
        debug!("Processing rename_product request");
        let result = self.machine.rename_product(&name, new_name);
        if let Err(e) = &result {
            error!(error = %e, "Rename failed");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product = %name, price = %price), skip(self, respond_to))]
    fn handle_reprice_product(&mut self, name: String, price: Decimal, respond_to: ServiceResponse<()>) {
        debug!("Processing reprice_product request");
        let result = self.machine.reprice_product(&name, price);
        match &result {
            Ok(()) => info!("Product repriced"),
            Err(e) => error!(error = %e, "Reprice failed"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product = %name, amount = amount), skip(self, respond_to))]
    fn handle_restock_product(&mut self, name: String, amount: u32, respond_to: ServiceResponse<()>) {
        debug!("Processing restock_product request");
        let result = self.machine.restock_product(&name, amount);
        match &result {
            Ok(()) => info!("Product restocked"),
            Err(e) => error!(error = %e, "Restock failed"),
        }
        let _ = respond_to.send(result);
    }

    fn handle_snapshot(&self, respond_to: ServiceResponse<MachineSnapshot>) {
        let snapshot = MachineSnapshot {
            credit: self.machine.credit(),
            change_reserve: self.machine.change_reserve(),
            products: self.machine.products().to_vec(),
        };
        let _ = respond_to.send(Ok(snapshot));
    }
}
