use crate::accounts::AccountManager;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Account, Capability};

pub fn run(accounts: &AccountManager, viewer: &Account) -> Result<CmdResult> {
    if !viewer.role.can(Capability::ViewEmployees) {
        return Ok(CmdResult::default().with_message(CmdMessage::error(format!(
            "{} accounts cannot view employee information.",
            viewer.role
        ))));
    }
    let employees = accounts.list_all().into_iter().cloned().collect();
    Ok(CmdResult::default().with_employees(employees))
}
