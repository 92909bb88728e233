use rust_decimal::Decimal;
use tracing::{debug, error, warn};

use super::product::Product;
use crate::error::VendingError;

/// The outcome of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub product: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub remaining_credit: Decimal,
}

/// The transactional core: a catalog, the current customer's credit and the
/// reserve used to pay out change.
///
/// Every operation either completes or leaves the machine exactly as it was.
/// `credit` and `change_reserve` never go below zero.
#[derive(Debug, Clone, Default)]
pub struct Machine {
    catalog: Vec<Product>,
    credit: Decimal,
    change_reserve: Decimal,
}

impl Machine {
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            credit: Decimal::ZERO,
            change_reserve: Decimal::ZERO,
        }
    }

    pub fn credit(&self) -> Decimal {
        self.credit
    }

    pub fn change_reserve(&self) -> Decimal {
        self.change_reserve
    }

    pub fn products(&self) -> &[Product] {
        &self.catalog
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.catalog.iter().find(|p| p.name() == name)
    }

    /// Adds customer money. Non-positive amounts are ignored.
    pub fn insert_credit(&mut self, amount: Decimal) {
        if let Some(credit) = deposit(self.credit, amount, "credit") {
            self.credit = credit;
        }
    }

    /// Adds money to the change reserve. Non-positive amounts are ignored.
    pub fn insert_change(&mut self, amount: Decimal) {
        if let Some(reserve) = deposit(self.change_reserve, amount, "change reserve") {
            self.change_reserve = reserve;
        }
    }

    /// Buys a single unit of the named product.
    pub fn buy(&mut self, name: &str) -> Result<Receipt, VendingError> {
        self.purchase(name, 1)
    }

    /// Buys `quantity` units of the named product.
    ///
    /// Funds and stock are both validated before anything is mutated, so a
    /// failed purchase leaves credit and stock untouched.
    ///
    /// # Errors
    /// Checked in this order:
    /// - `ProductNotRegistered` if no product has this name
    /// - `ForbiddenOperation` if `quantity` is zero
    /// - `InsufficientFunds` if credit does not cover the total
    /// - `ProductUnavailable` if stock does not cover `quantity`
    pub fn purchase(&mut self, name: &str, quantity: u32) -> Result<Receipt, VendingError> {
        let index = self.find_product(name)?;
        let total = self.charge(&self.catalog[index], quantity)?;
        self.catalog[index].ensure_available(quantity)?;

        // Commit.
        self.deliver(index, quantity)?;
        self.credit -= total;

        let product = &self.catalog[index];
        Ok(Receipt {
            product: product.name().to_string(),
            quantity,
            unit_price: product.price(),
            total,
            remaining_credit: self.credit,
        })
    }

    /// Pays out the remaining credit and draws it from the change reserve.
    ///
    /// Returns zero when there is no credit.
    ///
    /// # Errors
    /// `InsufficientChange` if the reserve cannot cover the credit; the credit
    /// is kept so the customer can still spend it.
    pub fn return_change(&mut self) -> Result<Decimal, VendingError> {
        if self.credit.is_zero() {
            return Ok(Decimal::ZERO);
        }
        if self.change_reserve < self.credit {
            return Err(VendingError::InsufficientChange {
                owed: self.credit,
                reserve: self.change_reserve,
            });
        }
        let refund = std::mem::take(&mut self.credit);
        self.change_reserve -= refund;
        Ok(refund)
    }

    /// Runs [`Machine::buy`] and reports a failure to the log instead of
    /// returning it.
    pub fn buy_or_report(&mut self, name: &str) {
        if let Err(e) = self.buy(name) {
            error!(kind = ?e.kind(), detail = %e, "{}", e.kind().message());
        }
    }

    /// Runs [`Machine::return_change`], reporting a failure to the log and
    /// returning zero in its place.
    pub fn return_change_or_report(&mut self) -> Decimal {
        self.return_change().unwrap_or_else(|e| {
            error!(kind = ?e.kind(), detail = %e, "{}", e.kind().message());
            Decimal::ZERO
        })
    }

    pub fn rename_product(&mut self, name: &str, new_name: impl Into<String>) -> Result<(), VendingError> {
        let index = self.find_product(name)?;
        self.catalog[index].rename(new_name);
        Ok(())
    }

    pub fn reprice_product(&mut self, name: &str, price: Decimal) -> Result<(), VendingError> {
        let index = self.find_product(name)?;
        self.catalog[index].reprice(price)
    }

    pub fn restock_product(&mut self, name: &str, amount: u32) -> Result<(), VendingError> {
        let index = self.find_product(name)?;
        self.catalog[index].restock(amount);
        Ok(())
    }

    fn find_product(&self, name: &str) -> Result<usize, VendingError> {
        self.catalog
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| VendingError::ProductNotRegistered(name.to_string()))
    }

    /// Prices `quantity` units against the current credit without deducting.
    fn charge(&self, product: &Product, quantity: u32) -> Result<Decimal, VendingError> {
        if quantity == 0 {
            return Err(VendingError::ForbiddenOperation(
                "quantity must be positive".to_string(),
            ));
        }
        let total = product
            .price()
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| VendingError::ForbiddenOperation("order total overflows".to_string()))?;
        if self.credit < total {
            return Err(VendingError::InsufficientFunds {
                required: total,
                available: self.credit,
            });
        }
        Ok(total)
    }

    fn deliver(&mut self, index: usize, quantity: u32) -> Result<(), VendingError> {
        self.catalog[index]
            .sell(quantity)
            .map_err(|e| VendingError::FailedDelivery(e.to_string()))
    }
}

fn deposit(balance: Decimal, amount: Decimal, ledger: &str) -> Option<Decimal> {
    if amount <= Decimal::ZERO {
        debug!(%amount, ledger, "Ignoring non-positive deposit");
        return None;
    }
    let updated = balance.checked_add(amount);
    if updated.is_none() {
        warn!(%amount, ledger, "Deposit would overflow balance, ignoring");
    }
    updated
}
