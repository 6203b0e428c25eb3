//! # Mohul Architecture
//!
//! Mohul tracks stock for a small manufacturing shop: a fixed product catalog,
//! production runs, sales and returns, all behind a role-based login. It is a
//! library with a terminal client, and the layers below the client know
//! nothing about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Argument parsing, prompts, menus, colored output         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store and both managers                         │
//! │  - Open (load) / shutdown (flush)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult + messages   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Managers (accounts.rs, inventory.rs)                       │
//! │  - In-memory state and business rules                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore and InMemoryStore             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Roles
//!
//! Every account has a [`model::Role`]. The role carries a fixed list of
//! [`model::Capability`] values and the menu is built from that list, so there
//! is one menu routine for all roles. Owners and managers can list employees;
//! staff cannot.
//!
//! ## Persistence
//!
//! State lives in memory while the program runs. It is read once at startup and
//! written once at a clean exit; see [`store`] for the file formats and the
//! difference between skipped lines and corrupt ones.
//!
//! ## Testing Strategy
//!
//! 1. **Managers and codecs**: unit tests against `InMemoryStore`.
//! 2. **Commands**: message wording and state changes.
//! 3. **Session**: scripted input through the menu loop (binary crate).
//! 4. **End to end**: the built binary driven over stdin in a temp directory.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`accounts`]: Account registry and authentication
//! - [`inventory`]: Catalog and stock rules
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Account`, `Role`, `Product`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod accounts;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod store;
