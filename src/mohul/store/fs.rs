use super::records;
use super::DataStore;
use crate::config::MohulConfig;
use crate::error::Result;
use crate::model::{Account, StockRecord};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    root: PathBuf,
    users_file: String,
    inventory_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        let defaults = MohulConfig::default();
        Self::with_config(root, &defaults)
    }

    pub fn with_config(root: PathBuf, config: &MohulConfig) -> Self {
        Self {
            root,
            users_file: config.users_file.clone(),
            inventory_file: config.inventory_file.clone(),
        }
    }

    pub fn users_path(&self) -> PathBuf {
        self.root.join(&self.users_file)
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.root.join(&self.inventory_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn open_lines(path: &Path) -> Result<std::io::Lines<BufReader<File>>> {
        let file = File::open(path)?;
        Ok(BufReader::new(file).lines())
    }

    fn write_lines<I>(&self, path: &Path, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        self.ensure_dir()?;
        let mut writer = BufWriter::new(File::create(path)?);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_accounts(&self, sink: &mut dyn FnMut(Account)) -> Result<()> {
        let path = self.users_path();
        debug!(path = %path.display(), "loading accounts");
        records::read_accounts(Self::open_lines(&path)?, sink)
    }

    fn save_accounts(&mut self, accounts: &[Account]) -> Result<()> {
        let path = self.users_path();
        debug!(path = %path.display(), count = accounts.len(), "saving accounts");
        self.write_lines(&path, accounts.iter().map(records::format_account))
    }

    fn load_stock(&self, sink: &mut dyn FnMut(StockRecord)) -> Result<()> {
        let path = self.inventory_path();
        debug!(path = %path.display(), "loading stock");
        records::read_stock(Self::open_lines(&path)?, sink)
    }

    fn save_stock(&mut self, stock: &[StockRecord]) -> Result<()> {
        let path = self.inventory_path();
        debug!(path = %path.display(), count = stock.len(), "saving stock");
        self.write_lines(&path, stock.iter().map(records::format_stock))
    }
}
