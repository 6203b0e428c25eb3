use crate::accounts::AccountManager;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::inventory::Inventory;
use crate::store::DataStore;
use tracing::warn;

/// Load accounts, then stock.
///
/// Stock for products outside the catalog is dropped with a warning.
/// Read failures become error messages and the managers keep whatever was read
/// before the failure. Corrupt records are returned as `Err` and stop the load.
pub fn run<S: DataStore>(
    store: &S,
    accounts: &mut AccountManager,
    inventory: &mut Inventory,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if let Err(e) = accounts.load(store) {
        if e.is_fatal() {
            return Err(e);
        }
        warn!(error = %e, "account load incomplete");
        result.add_message(CmdMessage::error(format!("Error loading users: {}", e)));
    }

    match inventory.load(store) {
        Ok(ignored) => {
            for name in ignored {
                result.add_message(CmdMessage::warning(format!(
                    "Ignoring stock for unknown product: {}",
                    name
                )));
            }
        }
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            warn!(error = %e, "stock load incomplete");
            result.add_message(CmdMessage::error(format!("Error loading inventory: {}", e)));
        }
    }

    Ok(result)
}
