use rust_decimal::Decimal;

use crate::error::VendingError;

/// A sellable item in the machine's catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    name: String,
    price: Decimal,
    stock: u32,
}

impl Product {
    /// Creates a product with no stock.
    ///
    /// # Errors
    /// Returns `ForbiddenOperation` if `price` is negative.
    pub fn new(name: impl Into<String>, price: Decimal) -> Result<Self, VendingError> {
        ensure_price(price)?;
        Ok(Self {
            name: name.into(),
            price,
            stock: 0,
        })
    }

    /// Sets the initial stock count.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// # Errors
    /// Returns `ForbiddenOperation` if `price` is negative; the old price is kept.
    pub fn reprice(&mut self, price: Decimal) -> Result<(), VendingError> {
        ensure_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Replaces the stock count. This is an absolute set, not an increment.
    pub fn restock(&mut self, amount: u32) {
        self.stock = amount;
    }

    /// Checks that `quantity` units could be sold right now.
    ///
    /// # Errors
    /// - `ForbiddenOperation` if `quantity` is zero
    /// - `ProductUnavailable` if the product is out of stock or holds fewer
    ///   than `quantity` units
    pub fn ensure_available(&self, quantity: u32) -> Result<(), VendingError> {
        if quantity == 0 {
            return Err(VendingError::ForbiddenOperation(
                "quantity must be positive".to_string(),
            ));
        }
        if self.stock == 0 || quantity > self.stock {
            return Err(VendingError::ProductUnavailable {
                requested: quantity,
                available: self.stock,
            });
        }
        Ok(())
    }

    /// Removes `quantity` units from stock.
    ///
    /// # Errors
    /// Same as [`Product::ensure_available`]; stock is untouched on failure.
    pub fn sell(&mut self, quantity: u32) -> Result<(), VendingError> {
        self.ensure_available(quantity)?;
        self.stock -= quantity;
        Ok(())
    }
}

fn ensure_price(price: Decimal) -> Result<(), VendingError> {
    if price < Decimal::ZERO {
        return Err(VendingError::ForbiddenOperation(format!(
            "price must not be negative, got {price}"
        )));
    }
    Ok(())
}
