use console::Style;
use once_cell::sync::Lazy;

pub static BANNER: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static MENU_ITEM: Lazy<Style> = Lazy::new(Style::new);
pub static LOW_STOCK: Lazy<Style> = Lazy::new(|| Style::new().yellow());
