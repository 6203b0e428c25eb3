use super::records;
use super::DataStore;
use crate::error::Result;
use crate::model::{Account, StockRecord};
use std::io;

/// Keeps both "files" as line buffers and runs them through the same codec as
/// [`FileStore`](super::fs::FileStore), so parsing quirks show up in tests too.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    user_lines: Vec<String>,
    stock_lines: Vec<String>,
    fail_reads_after: Option<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_lines<I, L>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.user_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_stock_lines<I, L>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.stock_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Make every load fail with an I/O error after `count` lines.
    pub fn with_read_failure_after(mut self, count: usize) -> Self {
        self.fail_reads_after = Some(count);
        self
    }

    pub fn user_lines(&self) -> &[String] {
        &self.user_lines
    }

    pub fn stock_lines(&self) -> &[String] {
        &self.stock_lines
    }

    fn lines<'a>(&self, buffer: &'a [String]) -> impl Iterator<Item = io::Result<String>> + 'a {
        let fail_after = self.fail_reads_after;
        buffer
            .iter()
            .map(|line| Ok(line.clone()))
            .enumerate()
            .map(move |(idx, line)| match fail_after {
                Some(limit) if idx >= limit => {
                    Err(io::Error::new(io::ErrorKind::Other, "simulated read failure"))
                }
                _ => line,
            })
    }
}

impl DataStore for InMemoryStore {
    fn load_accounts(&self, sink: &mut dyn FnMut(Account)) -> Result<()> {
        records::read_accounts(self.lines(&self.user_lines), sink)
    }

    fn save_accounts(&mut self, accounts: &[Account]) -> Result<()> {
        self.user_lines = accounts.iter().map(records::format_account).collect();
        Ok(())
    }

    fn load_stock(&self, sink: &mut dyn FnMut(StockRecord)) -> Result<()> {
        records::read_stock(self.lines(&self.stock_lines), sink)
    }

    fn save_stock(&mut self, stock: &[StockRecord]) -> Result<()> {
        self.stock_lines = stock.iter().map(records::format_stock).collect();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Role;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_account(mut self, name: &str, id: &str, role: Role, password: &str) -> Self {
            let line = records::format_account(&Account::new(name, id, role, password));
            self.store.user_lines.push(line);
            self
        }

        pub fn with_stock(mut self, name: &str, quantity: i32) -> Self {
            let line = records::format_stock(&StockRecord::new(name, quantity));
            self.store.stock_lines.push(line);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::error::MohulError;
    use crate::model::Role;

    #[test]
    fn empty_store_loads_nothing() {
        let store = InMemoryStore::new();
        let mut count = 0;
        store.load_accounts(&mut |_: Account| count += 1).unwrap();
        store.load_stock(&mut |_: StockRecord| count += 1).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn save_then_load_uses_the_line_format() {
        let mut store = InMemoryStore::new();
        store
            .save_accounts(&[Account::new("Alice", "A1", Role::Owner, "pw")])
            .unwrap();
        assert_eq!(store.user_lines(), ["Alice,A1,Owner,pw".to_string()]);

        let mut loaded = Vec::new();
        store.load_accounts(&mut |a: Account| loaded.push(a)).unwrap();
        assert_eq!(loaded[0].id, "A1");
    }

    #[test]
    fn simulated_failure_keeps_earlier_records() {
        let store = InMemoryStore::new()
            .with_stock_lines(["Hair Oil,1", "Hair Pack,2", "Hair Spray,3"])
            .with_read_failure_after(2);

        let mut loaded = Vec::new();
        let result = store.load_stock(&mut |r: StockRecord| loaded.push(r.name));

        assert!(matches!(result, Err(MohulError::Io(_))));
        assert_eq!(loaded, vec!["Hair Oil", "Hair Pack"]);
    }

    #[test]
    fn test_fixtures_coverage() {
        let fixture = StoreFixture::default()
            .with_account("Alice", "A1", Role::Owner, "pw")
            .with_account("Sam", "S1", Role::Staff, "pw2")
            .with_stock("Hair Oil", 12);

        assert_eq!(fixture.store.user_lines().len(), 2);
        assert_eq!(fixture.store.stock_lines(), ["Hair Oil,12".to_string()]);
    }
}
