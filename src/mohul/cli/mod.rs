//! # Terminal Client
//!
//! Everything that touches stdin, stdout or the process lives here:
//!
//! - [`setup`]: argument parsing and logging
//! - [`prompt`]: line-oriented input over any `BufRead`
//! - [`render`]: menus, stock and employee listings, colored messages
//! - [`session`]: the login and role menu loop
//!
//! The library below never prints; it hands back `CmdResult`s and this module
//! decides how they look.

mod commands;
mod prompt;
mod render;
mod session;
mod setup;
mod styles;

pub use commands::run;
