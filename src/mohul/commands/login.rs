use crate::accounts::AccountManager;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(accounts: &AccountManager, id: &str, password: &str) -> Result<CmdResult> {
    let result = match accounts.authenticate(id, password) {
        Some(account) => CmdResult::default()
            .with_message(CmdMessage::success(format!("Welcome, {}!", account.name)))
            .with_account(account.clone()),
        None => CmdResult::default().with_message(CmdMessage::error("Invalid ID or Password.")),
    };
    Ok(result)
}
