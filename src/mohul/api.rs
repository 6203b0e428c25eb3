//! # API Facade
//!
//! [`MohulApi`] is the single entry point for every operation, whatever UI sits
//! on top. It owns the store and both managers for the life of the process:
//!
//! - [`MohulApi::open`] builds the catalog from config and loads both stores.
//! - Operation methods dispatch to [`commands`] and return a [`CmdResult`].
//! - [`MohulApi::shutdown`] flushes both managers back to the store.
//!
//! The facade does no terminal I/O and holds no session state; who is logged in
//! is the caller's business.
//!
//! ## Generic Over DataStore
//!
//! - Production: `MohulApi<FileStore>`
//! - Testing: `MohulApi<InMemoryStore>`

use crate::accounts::AccountManager;
use crate::commands;
use crate::config::MohulConfig;
use crate::error::Result;
use crate::inventory::Inventory;
use crate::model::{Account, Role};
use crate::store::DataStore;
use tracing::info;

pub struct MohulApi<S: DataStore> {
    store: S,
    accounts: AccountManager,
    inventory: Inventory,
}

impl<S: DataStore> MohulApi<S> {
    /// Wrap a store without loading anything from it.
    pub fn new(store: S, inventory: Inventory) -> Self {
        Self {
            store,
            accounts: AccountManager::new(),
            inventory,
        }
    }

    /// Build the catalog from `config` and load both stores.
    ///
    /// Read failures are reported in the returned messages; corrupt data is an
    /// `Err`.
    pub fn open(store: S, config: &MohulConfig) -> Result<(Self, commands::CmdResult)> {
        let mut api = Self::new(store, Inventory::from_config(config));
        let result = api.load()?;
        info!(
            accounts = api.accounts.count(),
            products = api.inventory.product_names().len(),
            "stores opened"
        );
        Ok((api, result))
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, &mut self.accounts, &mut self.inventory)
    }

    pub fn sign_up(
        &mut self,
        name: &str,
        id: &str,
        role: Role,
        password: &str,
    ) -> Result<commands::CmdResult> {
        commands::signup::run(&mut self.accounts, name, id, role, password)
    }

    pub fn log_in(&self, id: &str, password: &str) -> Result<commands::CmdResult> {
        commands::login::run(&self.accounts, id, password)
    }

    pub fn view_stock(&self) -> Result<commands::CmdResult> {
        commands::stock::run(&self.inventory)
    }

    pub fn add_production(
        &mut self,
        product: &str,
        quantity: i32,
        batch: &str,
        date: &str,
    ) -> Result<commands::CmdResult> {
        commands::production::run(&mut self.inventory, product, quantity, batch, date)
    }

    pub fn sell(&mut self, product: &str, quantity: i32) -> Result<commands::CmdResult> {
        commands::sell::run(&mut self.inventory, product, quantity)
    }

    pub fn return_product(&mut self, product: &str, quantity: i32) -> Result<commands::CmdResult> {
        commands::returns::run(&mut self.inventory, product, quantity)
    }

    pub fn view_employees(&self, viewer: &Account) -> Result<commands::CmdResult> {
        commands::employees::run(&self.accounts, viewer)
    }

    pub fn product_names(&self) -> Vec<&str> {
        self.inventory.product_names()
    }

    /// Flush both managers to the store.
    pub fn shutdown(&mut self) -> Result<commands::CmdResult> {
        info!("persisting stores");
        commands::save::run(&mut self.store, &self.accounts, &self.inventory)
    }

    pub fn accounts(&self) -> &AccountManager {
        &self.accounts
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn fresh() -> MohulApi<InMemoryStore> {
        let (api, result) = MohulApi::open(InMemoryStore::new(), &MohulConfig::default()).unwrap();
        assert!(result.messages.is_empty());
        api
    }

    #[test]
    fn open_uses_configured_catalog() {
        let config = MohulConfig {
            catalog: vec!["Soap".to_string(), "Wax".to_string()],
            ..MohulConfig::default()
        };
        let (api, _) = MohulApi::open(InMemoryStore::new(), &config).unwrap();
        assert_eq!(api.product_names(), vec!["Soap", "Wax"]);
    }

    #[test]
    fn sign_up_then_log_in() {
        let mut api = fresh();
        api.sign_up("Alice", "A1", Role::Owner, "pw").unwrap();

        let result = api.log_in("A1", "pw").unwrap();
        let account = result.account.unwrap();
        assert_eq!(account.role, Role::Owner);
        assert!(api.accounts().is_id_taken("A1"));
    }

    #[test]
    fn stock_scenario_end_to_end() {
        let mut api = fresh();
        api.add_production("Hair Oil", 50, "B1", "today").unwrap();

        let stock = api.view_stock().unwrap().stock;
        assert_eq!(stock[0].quantity, 50);
        assert!(!stock[0].low);

        assert!(api.sell("Hair Oil", 60).unwrap().has_errors());
        assert_eq!(api.inventory().quantity("Hair Oil"), Some(50));

        api.sell("Hair Oil", 10).unwrap();
        api.return_product("Hair Oil", 5).unwrap();
        assert_eq!(api.inventory().quantity("Hair Oil"), Some(45));
    }

    #[test]
    fn shutdown_then_reopen_restores_state() {
        let mut api = fresh();
        api.sign_up("Alice", "A1", Role::Owner, "pw").unwrap();
        api.add_production("Hair Oil", 45, "", "").unwrap();
        let result = api.shutdown().unwrap();
        assert!(result.messages.is_empty());

        let store = api.store().clone();
        assert!(store.stock_lines().contains(&"Hair Oil,45".to_string()));

        let (reopened, _) = MohulApi::open(store, &MohulConfig::default()).unwrap();
        assert_eq!(reopened.inventory().quantity("Hair Oil"), Some(45));
        assert!(reopened.log_in("A1", "pw").unwrap().account.is_some());
    }

    #[test]
    fn employees_need_capability() {
        let fixture = StoreFixture::new()
            .with_account("Alice", "A1", Role::Owner, "pw")
            .with_account("Sam", "S1", Role::Staff, "pw");
        let (api, _) = MohulApi::open(fixture.store, &MohulConfig::default()).unwrap();

        let owner = api.accounts().get("A1").unwrap().clone();
        let staff = api.accounts().get("S1").unwrap().clone();

        assert_eq!(api.view_employees(&owner).unwrap().employees.len(), 2);
        assert!(api.view_employees(&staff).unwrap().has_errors());
    }
}
