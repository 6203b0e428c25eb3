use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MohulError, Result};
use crate::inventory::Inventory;

pub fn run(
    inventory: &mut Inventory,
    product: &str,
    quantity: i32,
    batch: &str,
    date: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match inventory.add_production(product, quantity, batch, date) {
        Ok(receipt) => result.add_message(CmdMessage::success(format!(
            "{} units of {} added. Batch: {}, Date: {}",
            receipt.quantity, receipt.product, receipt.batch, receipt.date
        ))),
        Err(MohulError::UnknownProduct(_)) => {
            result.add_message(CmdMessage::error("Invalid product name."))
        }
        Err(e) => result.add_message(CmdMessage::error(e.to_string())),
    }
    Ok(result)
}
