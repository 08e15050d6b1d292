// ⚠️ Registry errors - recoverable outcomes reported back to the caller
//
// Neither variant is fatal: the interactive session shows the message and
// returns to the menu.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No student carries this id
    #[error("Student with ID: {id} not found.")]
    NotFound { id: u64 },

    /// Payment larger than the outstanding balance; nothing was applied
    #[error("Insufficient balance")]
    Insufficient { requested: i64, balance: i64 },

    /// Applying the amount would overflow the balance; nothing was applied
    #[error("Amount {amount} is out of range for a balance of {balance}.")]
    AmountOutOfRange { amount: i64, balance: i64 },

    /// The id source has no unused id left
    #[error("No student IDs left to assign.")]
    IdsExhausted,
}

pub type RegistryResult<T> = Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RegistryError::NotFound { id: 10042 }.to_string(),
            "Student with ID: 10042 not found."
        );
        assert_eq!(
            RegistryError::Insufficient { requested: 500, balance: 100 }.to_string(),
            "Insufficient balance"
        );
        assert_eq!(
            RegistryError::AmountOutOfRange { amount: i64::MIN, balance: 0 }.to_string(),
            "Amount -9223372036854775808 is out of range for a balance of 0."
        );
        assert_eq!(RegistryError::IdsExhausted.to_string(), "No student IDs left to assign.");
    }
}
