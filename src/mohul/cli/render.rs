//! # Rendering
//!
//! Turns API results into the text the operator sees. Everything writes to a
//! caller-supplied `Write` so the session can be exercised against a buffer.
//!
//! Message levels map to colors (success green, warning yellow, error red).
//! Colors are applied to whole lines only, so the plain wording is always
//! present as a contiguous substring.

use super::styles::{BANNER, HEADING, LOW_STOCK, MENU_ITEM};
use colored::Colorize;
use mohul::api::{CmdMessage, MessageLevel};
use mohul::model::{Account, Capability, Role, StockLevel};
use std::io::{self, Write};

const LOW_STOCK_WARNING: &str = "\tWarning: Running Low!";

pub(super) fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "\t\t\t{}", BANNER.apply_to("MOHUL"))?;
    writeln!(out, "\t{}", BANNER.apply_to("Inventory Management System"))?;
    writeln!(out)
}

pub(super) fn render_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub(super) fn render_heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", HEADING.apply_to(format!("--- {} ---", title)))
}

fn render_numbered<W, I, T>(out: &mut W, items: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    for (idx, item) in items.into_iter().enumerate() {
        writeln!(out, "{}", MENU_ITEM.apply_to(format!("{}. {}", idx + 1, item.as_ref())))?;
    }
    Ok(())
}

pub(super) fn render_top_menu<W: Write>(out: &mut W) -> io::Result<()> {
    render_numbered(out, ["Log In", "Sign Up", "Exit"])
}

pub(super) fn render_role_choices<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Enter Designation (Choose one): ")?;
    render_numbered(out, Role::ALL.iter().map(Role::as_str))
}

pub(super) fn render_role_menu<W: Write>(out: &mut W, role: Role) -> io::Result<()> {
    writeln!(out, "{}", HEADING.apply_to(format!("--- {} Menu ---", role)))?;
    render_numbered(out, role.capabilities().iter().map(Capability::label))
}

pub(super) fn render_products<W: Write>(out: &mut W, names: &[&str]) -> io::Result<()> {
    writeln!(out, "Available Products:")?;
    render_numbered(out, names)
}

pub(super) fn render_stock<W: Write>(out: &mut W, stock: &[StockLevel]) -> io::Result<()> {
    render_heading(out, "Current Stock")?;
    for level in stock {
        writeln!(out, "{}: {} units", level.name, level.quantity)?;
        if level.low {
            writeln!(out, "{}", LOW_STOCK.apply_to(LOW_STOCK_WARNING))?;
        }
    }
    Ok(())
}

pub(super) fn render_employees<W: Write>(out: &mut W, employees: &[Account]) -> io::Result<()> {
    render_heading(out, "Employee Information")?;
    for account in employees {
        writeln!(
            out,
            "Name: {}, ID: {}, Designation: {}",
            account.name, account.id, account.role
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn stock_lines_and_low_warning() {
        let stock = vec![
            StockLevel {
                name: "Hair Oil".into(),
                quantity: 50,
                low: false,
            },
            StockLevel {
                name: "Hair Pack".into(),
                quantity: 3,
                low: true,
            },
        ];
        let text = render(|out| render_stock(out, &stock));

        assert!(text.contains("--- Current Stock ---"));
        assert!(text.contains("Hair Oil: 50 units\nHair Pack: 3 units\n\tWarning: Running Low!\n"));
    }

    #[test]
    fn owner_menu_has_six_entries() {
        let text = render(|out| render_role_menu(out, Role::Owner));
        assert!(text.contains("--- Owner Menu ---"));
        assert!(text.contains("5. View Employee Info"));
        assert!(text.contains("6. Log Out"));
    }

    #[test]
    fn staff_menu_logs_out_at_five() {
        let text = render(|out| render_role_menu(out, Role::Staff));
        assert!(text.contains("--- Staff Menu ---"));
        assert!(text.contains("5. Log Out"));
        assert!(!text.contains("Employee"));
    }

    #[test]
    fn employee_line_format() {
        let staff = vec![Account::new("Alice", "A1", Role::Owner, "pw")];
        let text = render(|out| render_employees(out, &staff));
        assert!(text.contains("Name: Alice, ID: A1, Designation: Owner"));
        assert!(!text.contains("pw"));
    }

    #[test]
    fn messages_keep_their_wording() {
        let messages = vec![
            CmdMessage::success("User Registered Successfully!"),
            CmdMessage::warning("Ignoring stock for unknown product: Soap"),
            CmdMessage::error("Invalid ID or Password."),
        ];
        let text = render(|out| render_messages(out, &messages));
        assert_eq!(
            text,
            "User Registered Successfully!\n\
             Ignoring stock for unknown product: Soap\n\
             Invalid ID or Password.\n"
        );
    }
}
