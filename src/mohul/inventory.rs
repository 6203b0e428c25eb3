//! # Catalog and Stock
//!
//! [`Inventory`] owns the fixed product catalog and the quantity on hand for
//! each product. The catalog is decided once, at construction, and never grows:
//! operations naming a product outside it fail with
//! [`MohulError::UnknownProduct`], and persisted records for such products are
//! dropped on load.
//!
//! ## Stock Rules
//!
//! - Production and returns add their quantity unconditionally.
//! - A sale only goes through when the quantity asked for does not exceed the
//!   quantity on hand; otherwise nothing changes.
//! - Quantities are not required to be positive unless the inventory is built
//!   with strict quantities. Under the permissive default a negative sale passes
//!   the stock check and raises stock.
//! - Counters never wrap; an addition that would overflow is refused.
//!
//! ## Loading
//!
//! Persisted quantities are added to the zeroed catalog, so a product listed
//! twice in the file ends up with the sum of both lines.

use crate::config::MohulConfig;
use crate::error::{MohulError, Result};
use crate::model::{Product, StockLevel, StockRecord};
use crate::store::DataStore;
use tracing::{debug, info, warn};

/// Receipt for a production run. Batch and date are echoed, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub product: String,
    pub quantity: i32,
    pub batch: String,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct Inventory {
    products: Vec<Product>,
    low_stock_threshold: i32,
    strict_quantities: bool,
}

impl Inventory {
    /// Seed the catalog at zero. Repeated names keep their first position.
    pub fn new<I, N>(catalog: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut products: Vec<Product> = Vec::new();
        for name in catalog {
            let name = name.into();
            if !products.iter().any(|p| p.name == name) {
                products.push(Product::new(name));
            }
        }
        let defaults = MohulConfig::default();
        Self {
            products,
            low_stock_threshold: defaults.low_stock_threshold,
            strict_quantities: defaults.strict_quantities,
        }
    }

    pub fn from_config(config: &MohulConfig) -> Self {
        Self::new(config.catalog.iter().cloned())
            .with_low_stock_threshold(config.low_stock_threshold)
            .with_strict_quantities(config.strict_quantities)
    }

    pub fn with_low_stock_threshold(mut self, threshold: i32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn with_strict_quantities(mut self, strict: bool) -> Self {
        self.strict_quantities = strict;
        self
    }

    pub fn product_names(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn quantity(&self, name: &str) -> Option<i32> {
        self.products
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.quantity)
    }

    fn product_mut(&mut self, name: &str) -> Result<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| MohulError::UnknownProduct(name.to_string()))
    }

    fn check_quantity(&self, quantity: i32) -> Result<()> {
        if self.strict_quantities && quantity <= 0 {
            return Err(MohulError::InvalidQuantity(quantity));
        }
        Ok(())
    }

    fn add_stock(&mut self, name: &str, quantity: i32) -> Result<i32> {
        self.check_quantity(quantity)?;
        let product = self.product_mut(name)?;
        product.quantity = product
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| MohulError::QuantityOverflow(name.to_string()))?;
        Ok(product.quantity)
    }

    pub fn add_production(
        &mut self,
        name: &str,
        quantity: i32,
        batch: &str,
        date: &str,
    ) -> Result<Production> {
        let on_hand = self.add_stock(name, quantity)?;
        info!(product = name, quantity, batch, date, on_hand, "production recorded");
        Ok(Production {
            product: name.to_string(),
            quantity,
            batch: batch.to_string(),
            date: date.to_string(),
        })
    }

    pub fn sell(&mut self, name: &str, quantity: i32) -> Result<()> {
        self.check_quantity(quantity)?;
        let product = self.product_mut(name)?;
        if quantity > product.quantity {
            return Err(MohulError::InsufficientStock {
                product: name.to_string(),
                requested: quantity,
                available: product.quantity,
            });
        }
        product.quantity = product
            .quantity
            .checked_sub(quantity)
            .ok_or_else(|| MohulError::QuantityOverflow(name.to_string()))?;
        info!(product = name, quantity, on_hand = product.quantity, "sale recorded");
        Ok(())
    }

    pub fn return_product(&mut self, name: &str, quantity: i32) -> Result<()> {
        let on_hand = self.add_stock(name, quantity)?;
        info!(product = name, quantity, on_hand, "return recorded");
        Ok(())
    }

    pub fn view_stock(&self) -> Vec<StockLevel> {
        self.products
            .iter()
            .map(|p| StockLevel {
                name: p.name.clone(),
                quantity: p.quantity,
                low: p.quantity < self.low_stock_threshold,
            })
            .collect()
    }

    /// Add persisted quantities onto the catalog.
    ///
    /// Returns the names of stored products that are not in the catalog, once
    /// each. On error, records read before the failure have already been
    /// applied.
    pub fn load<S: DataStore>(&mut self, store: &S) -> Result<Vec<String>> {
        let products = &mut self.products;
        let mut ignored: Vec<String> = Vec::new();
        store.load_stock(&mut |record: StockRecord| {
            match products.iter_mut().find(|p| p.name == record.name) {
                Some(product) => {
                    product.quantity = product.quantity.saturating_add(record.quantity);
                }
                None => {
                    debug!(product = %record.name, "ignoring stock for unknown product");
                    if !ignored.contains(&record.name) {
                        ignored.push(record.name);
                    }
                }
            }
        })?;
        debug!(products = self.products.len(), ignored = ignored.len(), "stock loaded");
        Ok(ignored)
    }

    pub fn persist<S: DataStore>(&self, store: &mut S) -> Result<()> {
        let records: Vec<StockRecord> = self.products.iter().map(StockRecord::from).collect();
        store.save_stock(&records).inspect_err(|e| warn!(error = %e, "saving stock failed"))
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::from_config(&MohulConfig::default())
    }
}
