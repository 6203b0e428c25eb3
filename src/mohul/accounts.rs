//! Login identities.
//!
//! [`AccountManager`] is the only owner of the account map. Ids are unique and
//! accounts are never removed or edited once registered. Passwords are kept and
//! compared as plain text, exactly as they are stored in the account file.

use crate::error::{MohulError, Result};
use crate::model::{Account, Role};
use crate::store::DataStore;
use std::collections::HashMap;
use tracing::{debug, info, warn};

#[derive(Debug, Default, Clone)]
pub struct AccountManager {
    accounts: HashMap<String, Account>,
}

impl AccountManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &str, id: &str, role: Role, password: &str) -> Result<()> {
        if self.is_id_taken(id) {
            return Err(MohulError::IdTaken(id.to_string()));
        }
        self.accounts
            .insert(id.to_string(), Account::new(name, id, role, password));
        info!(id, %role, "account registered");
        Ok(())
    }

    pub fn authenticate(&self, id: &str, password: &str) -> Option<&Account> {
        let account = self.accounts.get(id).filter(|a| a.password == password);
        if account.is_none() {
            debug!(id, "authentication failed");
        }
        account
    }

    pub fn is_id_taken(&self, id: &str) -> bool {
        self.accounts.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Every account exactly once, in no particular order.
    pub fn list_all(&self) -> Vec<&Account> {
        self.accounts.values().collect()
    }

    pub fn count(&self) -> usize {
        self.accounts.len()
    }

    /// Merge persisted accounts in. A later line for the same id wins.
    ///
    /// On error, accounts read before the failure are kept.
    pub fn load<S: DataStore>(&mut self, store: &S) -> Result<()> {
        let accounts = &mut self.accounts;
        store.load_accounts(&mut |account: Account| {
            accounts.insert(account.id.clone(), account);
        })?;
        debug!(count = self.accounts.len(), "accounts loaded");
        Ok(())
    }

    pub fn persist<S: DataStore>(&self, store: &mut S) -> Result<()> {
        let accounts: Vec<Account> = self.accounts.values().cloned().collect();
        store
            .save_accounts(&accounts)
            .inspect_err(|e| warn!(error = %e, "saving accounts failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn register_then_authenticate() {
        let mut manager = AccountManager::new();
        manager.register("Alice", "A1", Role::Owner, "pw").unwrap();

        let account = manager.authenticate("A1", "pw").unwrap();
        assert_eq!(account.name, "Alice");
        assert_eq!(account.role, Role::Owner);
    }

    #[test]
    fn wrong_password_or_unknown_id_fails() {
        let mut manager = AccountManager::new();
        manager.register("Alice", "A1", Role::Owner, "pw").unwrap();

        assert!(manager.authenticate("A1", "PW").is_none());
        assert!(manager.authenticate("A1", "").is_none());
        assert!(manager.authenticate("B1", "pw").is_none());
    }

    #[test]
    fn duplicate_id_is_rejected_and_original_kept() {
        let mut manager = AccountManager::new();
        manager.register("Alice", "A1", Role::Owner, "pw").unwrap();

        match manager.register("Mallory", "A1", Role::Staff, "other") {
            Err(MohulError::IdTaken(id)) => assert_eq!(id, "A1"),
            other => panic!("Expected IdTaken, got {:?}", other),
        }
        assert_eq!(manager.count(), 1);
        let original = manager.get("A1").unwrap();
        assert_eq!(original.name, "Alice");
        assert_eq!(original.password, "pw");
    }

    #[test]
    fn ids_are_case_sensitive() {
        let mut manager = AccountManager::new();
        manager.register("Alice", "a1", Role::Staff, "pw").unwrap();
        assert!(!manager.is_id_taken("A1"));
        manager.register("Alan", "A1", Role::Staff, "pw").unwrap();
        assert_eq!(manager.count(), 2);
    }

    #[test]
    fn list_all_returns_each_account_once() {
        let mut manager = AccountManager::new();
        manager.register("Alice", "A1", Role::Owner, "pw").unwrap();
        manager.register("Mo", "M1", Role::Manager, "pw").unwrap();
        manager.register("Sam", "S1", Role::Staff, "pw").unwrap();

        let mut ids: Vec<&str> = manager.list_all().iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        assert_eq!(ids, vec!["A1", "M1", "S1"]);
    }

    #[test]
    fn load_later_line_overwrites_same_id() {
        let fixture = StoreFixture::new()
            .with_account("Alice", "A1", Role::Owner, "old")
            .with_account("Alice B", "A1", Role::Manager, "new");
        let mut manager = AccountManager::new();

        manager.load(&fixture.store).unwrap();

        assert_eq!(manager.count(), 1);
        let account = manager.get("A1").unwrap();
        assert_eq!(account.role, Role::Manager);
        assert_eq!(account.password, "new");
    }

    #[test]
    fn load_skips_short_lines_and_fails_on_bad_role() {
        let store = InMemoryStore::new().with_user_lines([
            "Alice,A1,Owner,pw",
            "half,a,line",
            "Bob,B1,Boss,pw",
            "Cy,C1,Staff,pw",
        ]);
        let mut manager = AccountManager::new();

        let result = manager.load(&store);

        assert!(matches!(result, Err(MohulError::InvalidRole(ref r)) if r == "Boss"));
        assert!(manager.is_id_taken("A1"));
        assert!(!manager.is_id_taken("C1"));
    }

    #[test]
    fn io_failure_keeps_partial_state() {
        let store = InMemoryStore::new()
            .with_user_lines(["Alice,A1,Owner,pw", "Bob,B1,Staff,pw"])
            .with_read_failure_after(1);
        let mut manager = AccountManager::new();

        assert!(matches!(manager.load(&store), Err(MohulError::Io(_))));
        assert_eq!(manager.count(), 1);
        assert!(manager.is_id_taken("A1"));
    }

    #[test]
    fn persist_then_load_round_trips() {
        let mut manager = AccountManager::new();
        manager.register("Alice", "A1", Role::Owner, "pw").unwrap();
        manager.register("Mo", "M1", Role::Manager, "s3cret").unwrap();
        manager.register("Sam", "S1", Role::Staff, "x").unwrap();

        let mut store = InMemoryStore::new();
        manager.persist(&mut store).unwrap();

        let mut reloaded = AccountManager::new();
        reloaded.load(&store).unwrap();

        assert_eq!(reloaded.count(), 3);
        for account in manager.list_all() {
            assert_eq!(reloaded.get(&account.id), Some(account));
        }
    }

    #[test]
    fn comma_in_field_does_not_survive_reload() {
        let mut manager = AccountManager::new();
        manager
            .register("Smith, John", "J1", Role::Staff, "pw")
            .unwrap();

        let mut store = InMemoryStore::new();
        manager.persist(&mut store).unwrap();

        let mut reloaded = AccountManager::new();
        reloaded.load(&store).unwrap();
        assert_eq!(reloaded.count(), 0);
    }
}
