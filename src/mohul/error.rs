use thiserror::Error;

#[derive(Error, Debug)]
pub enum MohulError {
    #[error("ID already taken: {0}")]
    IdTaken(String),

    #[error("Invalid product name: {0}")]
    UnknownProduct(String),

    #[error("Insufficient stock of {product}: requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: i32,
        available: i32,
    },

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i32),

    #[error("Quantity of {0} would overflow")]
    QuantityOverflow(String),

    #[error("Invalid designation in file: {0}")]
    InvalidRole(String),

    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl MohulError {
    /// Fatal errors abort startup; everything else is reported and survived.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MohulError::InvalidRole(_) | MohulError::MalformedRecord { .. } | MohulError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MohulError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_data_errors_are_fatal() {
        assert!(MohulError::InvalidRole("Boss".into()).is_fatal());
        assert!(MohulError::MalformedRecord {
            line: 3,
            reason: "bad".into()
        }
        .is_fatal());
    }

    #[test]
    fn io_and_business_errors_are_not_fatal() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "users.txt");
        assert!(!MohulError::Io(io).is_fatal());
        assert!(!MohulError::IdTaken("A1".into()).is_fatal());
        assert!(!MohulError::UnknownProduct("Soap".into()).is_fatal());
    }

    #[test]
    fn invalid_role_message_names_the_token() {
        let err = MohulError::InvalidRole("Intern".into());
        assert_eq!(err.to_string(), "Invalid designation in file: Intern");
    }
}
