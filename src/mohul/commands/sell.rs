use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MohulError, Result};
use crate::inventory::Inventory;

pub fn run(inventory: &mut Inventory, product: &str, quantity: i32) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match inventory.sell(product, quantity) {
        Ok(()) => result.add_message(CmdMessage::success(format!(
            "{} units of {} sold.",
            quantity, product
        ))),
        Err(MohulError::InsufficientStock { .. } | MohulError::UnknownProduct(_)) => result
            .add_message(CmdMessage::error("Insufficient stock or invalid product.")),
        Err(e) => result.add_message(CmdMessage::error(e.to_string())),
    }
    Ok(result)
}
