use crate::accounts::AccountManager;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MohulError, Result};
use crate::model::Role;

pub fn run(
    accounts: &mut AccountManager,
    name: &str,
    id: &str,
    role: Role,
    password: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match accounts.register(name, id, role, password) {
        Ok(()) => result.add_message(CmdMessage::success("User Registered Successfully!")),
        Err(MohulError::IdTaken(_)) => result.add_message(CmdMessage::error(
            "Error: ID already taken. Please try again with a different ID.",
        )),
        Err(e) => return Err(e),
    }
    Ok(result)
}
