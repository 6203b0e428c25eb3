use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MohulError;

/// What an account is allowed to do once logged in.
///
/// The declaration order is the menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewStock,
    AddProduction,
    SellProduct,
    ReturnProduct,
    ViewEmployees,
    LogOut,
}

impl Capability {
    pub fn label(&self) -> &'static str {
        match self {
            Capability::ViewStock => "View Stock",
            Capability::AddProduction => "Add Production",
            Capability::SellProduct => "Sell Product",
            Capability::ReturnProduct => "Return Product",
            Capability::ViewEmployees => "View Employee Info",
            Capability::LogOut => "Log Out",
        }
    }
}

const SUPERVISOR_CAPABILITIES: &[Capability] = &[
    Capability::ViewStock,
    Capability::AddProduction,
    Capability::SellProduct,
    Capability::ReturnProduct,
    Capability::ViewEmployees,
    Capability::LogOut,
];

const STAFF_CAPABILITIES: &[Capability] = &[
    Capability::ViewStock,
    Capability::AddProduction,
    Capability::SellProduct,
    Capability::ReturnProduct,
    Capability::LogOut,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Owner,
    Manager,
    Staff,
}

impl Role {
    /// Roles in the order they are offered at sign-up.
    pub const ALL: [Role; 3] = [Role::Owner, Role::Manager, Role::Staff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "Owner",
            Role::Manager => "Manager",
            Role::Staff => "Staff",
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Owner | Role::Manager => SUPERVISOR_CAPABILITIES,
            Role::Staff => STAFF_CAPABILITIES,
        }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = MohulError;

    // Exact, case-sensitive match against the persisted literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Owner" => Ok(Role::Owner),
            "Manager" => Ok(Role::Manager),
            "Staff" => Ok(Role::Staff),
            other => Err(MohulError::InvalidRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub id: String,
    pub role: Role,
    pub password: String,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        role: Role,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            role,
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub quantity: i32,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: 0,
        }
    }
}

/// One row of the stock report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevel {
    pub name: String,
    pub quantity: i32,
    pub low: bool,
}

/// Persisted `name,quantity` pair, before it is matched against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRecord {
    pub name: String,
    pub quantity: i32,
}

impl StockRecord {
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

impl From<&Product> for StockRecord {
    fn from(product: &Product) -> Self {
        Self::new(product.name.clone(), product.quantity)
    }
}
