use crate::accounts::AccountManager;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;

/// Flush both managers. A failed write is reported and the other store is still
/// attempted.
pub fn run<S: DataStore>(
    store: &mut S,
    accounts: &AccountManager,
    inventory: &Inventory,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Err(e) = accounts.persist(store) {
        result.add_message(CmdMessage::error(format!("Error saving users: {}", e)));
    }
    if let Err(e) = inventory.persist(store) {
        result.add_message(CmdMessage::error(format!("Error saving inventory: {}", e)));
    }

    Ok(result)
}
