//! # Command Layer
//!
//! One module per operation the operator can trigger. Each `run` function works
//! on the managers it needs and returns a [`CmdResult`] holding structured data
//! plus the [`CmdMessage`]s to show.
//!
//! Business-rule rejections (taken id, short stock, unknown product) are not
//! errors at this level: they come back as `MessageLevel::Error` messages and the
//! session carries on. `Err` is reserved for conditions that should stop the
//! program, such as a corrupt data file during [`load`].

use crate::model::{Account, StockLevel};

pub mod employees;
pub mod load;
pub mod login;
pub mod production;
pub mod returns;
pub mod save;
pub mod sell;
pub mod signup;
pub mod stock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub account: Option<Account>,
    pub stock: Vec<StockLevel>,
    pub employees: Vec<Account>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_stock(mut self, stock: Vec<StockLevel>) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_employees(mut self, employees: Vec<Account>) -> Self {
        self.employees = employees;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
