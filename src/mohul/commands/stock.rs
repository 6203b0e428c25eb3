use crate::commands::CmdResult;
use crate::error::Result;
use crate::inventory::Inventory;

pub fn run(inventory: &Inventory) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stock(inventory.view_stock()))
}
