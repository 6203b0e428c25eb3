//! Line codecs for the two data files.
//!
//! Both files are plain comma-separated lines with no header and no escaping:
//!
//! ```text
//! Alice,A1,Owner,secret
//! Hair Oil,45
//! ```
//!
//! A line is first split into fields, dropping trailing empty fields. A line
//! with the wrong number of fields is skipped without complaint. A line with the
//! right shape but an invalid field (unknown role, non-integer quantity) is an
//! error: the data file is corrupt, not just noisy.
//!
//! Commas inside a field are not escaped, so such a value shifts every field
//! after it and the line no longer round-trips.

use crate::error::{MohulError, Result};
use crate::model::{Account, Role, StockRecord};
use std::io;

const DELIMITER: char = ',';

/// Split on the delimiter, discarding trailing empty fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = line.split(DELIMITER).collect();
    while fields.len() > 1 && fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}

/// Parse one account line. `Ok(None)` means the line was skipped.
pub fn parse_account(line: &str) -> Result<Option<Account>> {
    match split_fields(line).as_slice() {
        [name, id, role, password] => {
            let role: Role = role.parse()?;
            Ok(Some(Account::new(*name, *id, role, *password)))
        }
        _ => Ok(None),
    }
}

pub fn format_account(account: &Account) -> String {
    format!(
        "{}{d}{}{d}{}{d}{}",
        account.name,
        account.id,
        account.role,
        account.password,
        d = DELIMITER
    )
}

/// Parse one stock line. `Ok(None)` means the line was skipped.
pub fn parse_stock(line: &str, line_no: usize) -> Result<Option<StockRecord>> {
    match split_fields(line).as_slice() {
        [name, quantity] => {
            let quantity = quantity
                .parse::<i32>()
                .map_err(|e| MohulError::MalformedRecord {
                    line: line_no,
                    reason: format!("quantity {:?} for {}: {}", quantity, name, e),
                })?;
            Ok(Some(StockRecord::new(*name, quantity)))
        }
        _ => Ok(None),
    }
}

pub fn format_stock(record: &StockRecord) -> String {
    format!("{}{}{}", record.name, DELIMITER, record.quantity)
}

/// Feed account lines through the codec into `sink`.
///
/// Stops at the first read or parse error; records already handed to `sink`
/// stay delivered.
pub fn read_accounts<I>(lines: I, sink: &mut dyn FnMut(Account)) -> Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    for line in lines {
        if let Some(account) = parse_account(&line?)? {
            sink(account);
        }
    }
    Ok(())
}

/// Feed stock lines through the codec into `sink`. Same stopping rule as
/// [`read_accounts`].
pub fn read_stock<I>(lines: I, sink: &mut dyn FnMut(StockRecord)) -> Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    for (idx, line) in lines.into_iter().enumerate() {
        if let Some(record) = parse_stock(&line?, idx + 1)? {
            sink(record);
        }
    }
    Ok(())
}
