//! # Session
//!
//! The interactive menu loop. A [`Session`] owns the API and a [`Console`] and
//! moves between three states:
//!
//! ```text
//! Unauthenticated --log in--> Authenticated(account) --log out--> Unauthenticated
//!        |
//!        +--exit--> Exiting (stores flushed, loop ends)
//! ```
//!
//! End of input is treated as the operator leaving: an authenticated session
//! logs out and the top level exits, so stores are still flushed.

use super::prompt::Console;
use super::render;
use chrono::Local;
use mohul::api::MohulApi;
use mohul::error::Result;
use mohul::model::{Account, Capability, Role};
use mohul::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

const CHOICE_PROMPT: &str = "Enter your choice: ";
const INVALID_MENU_CHOICE: &str = "Invalid choice. Try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated(Account),
    Exiting,
}

/// Which inventory change a product sub-flow performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StockChange {
    Production,
    Sale,
    Return,
}

impl StockChange {
    fn title(self) -> &'static str {
        match self {
            StockChange::Production => "Add Production",
            StockChange::Sale => "Sell Product",
            StockChange::Return => "Return Product",
        }
    }

    fn quantity_prompt(self) -> &'static str {
        match self {
            StockChange::Production => "Enter Quantity: ",
            StockChange::Sale => "Enter Quantity to Sell: ",
            StockChange::Return => "Enter Quantity to Return: ",
        }
    }
}

pub struct Session<S: DataStore, R, W> {
    api: MohulApi<S>,
    console: Console<R, W>,
    state: SessionState,
}

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(api: MohulApi<S>, console: Console<R, W>) -> Self {
        Self {
            api,
            console,
            state: SessionState::Unauthenticated,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Run until the operator exits, then flush the stores.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let state = self.state.clone();
            match state {
                SessionState::Unauthenticated => self.top_menu()?,
                SessionState::Authenticated(account) => self.role_menu(&account)?,
                SessionState::Exiting => break,
            }
        }

        let result = self.api.shutdown()?;
        let out = self.console.out();
        render::render_messages(out, &result.messages)?;
        writeln!(out, "Exiting... Goodbye!")?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (MohulApi<S>, Console<R, W>) {
        (self.api, self.console)
    }

    fn top_menu(&mut self) -> Result<()> {
        render::render_top_menu(self.console.out())?;

        let Some(choice) = self.console.read_int(CHOICE_PROMPT)? else {
            self.state = SessionState::Exiting;
            return Ok(());
        };

        match choice {
            1 => self.log_in(),
            2 => self.sign_up(),
            3 => {
                self.state = SessionState::Exiting;
                Ok(())
            }
            _ => {
                writeln!(self.console.out(), "{}", INVALID_MENU_CHOICE)?;
                Ok(())
            }
        }
    }

    fn log_in(&mut self) -> Result<()> {
        render::render_heading(self.console.out(), "Log In")?;
        let Some(id) = self.console.read_trimmed("Enter ID: ")? else {
            return self.leave();
        };
        let Some(password) = self.console.read_trimmed("Enter Password: ")? else {
            return self.leave();
        };

        let result = self.api.log_in(&id, &password)?;
        render::render_messages(self.console.out(), &result.messages)?;
        if let Some(account) = result.account {
            debug!(id = %account.id, role = %account.role, "session authenticated");
            self.state = SessionState::Authenticated(account);
        }
        Ok(())
    }

    fn sign_up(&mut self) -> Result<()> {
        render::render_heading(self.console.out(), "Sign Up")?;
        let Some(name) = self.console.read_trimmed("Enter Name: ")? else {
            return self.leave();
        };
        let Some(id) = self.console.read_trimmed("Enter ID: ")? else {
            return self.leave();
        };
        let Some(role) = self.read_role()? else {
            return self.leave();
        };
        let Some(password) = self.console.read_trimmed("Enter Password: ")? else {
            return self.leave();
        };

        let result = self.api.sign_up(&name, &id, role, &password)?;
        render::render_messages(self.console.out(), &result.messages)?;
        Ok(())
    }

    fn read_role(&mut self) -> Result<Option<Role>> {
        loop {
            render::render_role_choices(self.console.out())?;
            let Some(choice) = self.console.read_int(CHOICE_PROMPT)? else {
                return Ok(None);
            };
            let role = usize::try_from(choice)
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|idx| Role::ALL.get(idx).copied());
            match role {
                Some(role) => return Ok(Some(role)),
                None => writeln!(self.console.out(), "{}", INVALID_MENU_CHOICE)?,
            }
        }
    }

    fn role_menu(&mut self, account: &Account) -> Result<()> {
        render::render_role_menu(self.console.out(), account.role)?;

        let Some(choice) = self.console.read_int(CHOICE_PROMPT)? else {
            self.state = SessionState::Unauthenticated;
            return Ok(());
        };

        let capabilities = account.role.capabilities();
        let picked = usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| capabilities.get(idx).copied());

        match picked {
            Some(Capability::ViewStock) => {
                let result = self.api.view_stock()?;
                let out = self.console.out();
                render::render_stock(out, &result.stock)?;
                render::render_messages(out, &result.messages)?;
            }
            Some(Capability::AddProduction) => self.change_stock(StockChange::Production)?,
            Some(Capability::SellProduct) => self.change_stock(StockChange::Sale)?,
            Some(Capability::ReturnProduct) => self.change_stock(StockChange::Return)?,
            Some(Capability::ViewEmployees) => {
                let result = self.api.view_employees(account)?;
                let out = self.console.out();
                if !result.has_errors() {
                    render::render_employees(out, &result.employees)?;
                }
                render::render_messages(out, &result.messages)?;
            }
            Some(Capability::LogOut) => {
                writeln!(self.console.out(), "Logging Out...")?;
                debug!(id = %account.id, "session logged out");
                self.state = SessionState::Unauthenticated;
            }
            None => writeln!(self.console.out(), "{}", INVALID_MENU_CHOICE)?,
        }
        Ok(())
    }

    fn change_stock(&mut self, change: StockChange) -> Result<()> {
        render::render_heading(self.console.out(), change.title())?;
        let names: Vec<String> = self
            .api
            .product_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        render::render_products(self.console.out(), &refs)?;

        let Some(choice) = self.console.read_int("Choose a product: ")? else {
            return self.leave();
        };
        let Some(product) = usize::try_from(choice)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| names.get(idx))
        else {
            writeln!(self.console.out(), "Invalid choice.")?;
            return Ok(());
        };

        let Some(quantity) = self.console.read_int(change.quantity_prompt())? else {
            return self.leave();
        };

        let result = match change {
            StockChange::Production => {
                let Some(batch) = self.console.read_line("Enter Batch Number: ")? else {
                    return self.leave();
                };
                let Some(date) = self.console.read_line("Enter Date: ")? else {
                    return self.leave();
                };
                let date = if date.trim().is_empty() {
                    Local::now().format("%Y-%m-%d").to_string()
                } else {
                    date
                };
                self.api.add_production(product, quantity, &batch, &date)?
            }
            StockChange::Sale => self.api.sell(product, quantity)?,
            StockChange::Return => self.api.return_product(product, quantity)?,
        };
        render::render_messages(self.console.out(), &result.messages)?;
        Ok(())
    }

    /// Input ran out mid-flow: step back one level.
    fn leave(&mut self) -> Result<()> {
        self.state = match self.state {
            SessionState::Authenticated(_) => SessionState::Unauthenticated,
            _ => SessionState::Exiting,
        };
        Ok(())
    }
}
