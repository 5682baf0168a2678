//! Registry error model.

use thiserror::Error;

/// Result type used across the registry core.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// A rejected command.
///
/// Every variant is a user-input failure except [`RegistryError::OutOfMemory`].
/// Variants carrying a name are the "not found" family, rendered as
/// `<name>: <message>`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("batch capacity reached")]
    TooManyBatches,

    #[error("invalid date")]
    InvalidDate,

    #[error("duplicate batch id")]
    DuplicateBatch,

    #[error("invalid vaccine name")]
    InvalidName,

    #[error("invalid batch id")]
    InvalidBatch,

    #[error("invalid dose quantity")]
    InvalidQuantity,

    #[error("no such vaccine: {0}")]
    NoSuchVaccine(String),

    #[error("no such batch: {0}")]
    NoSuchBatch(String),

    #[error("no such user: {0}")]
    NoSuchUser(String),

    #[error("no stock")]
    NoStock,

    #[error("already vaccinated")]
    AlreadyVaccinated,

    /// Storage could not grow. Terminates the session.
    #[error("out of memory")]
    OutOfMemory,
}

impl RegistryError {
    /// Name shown before the message for "not found" errors.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::NoSuchVaccine(name) | Self::NoSuchBatch(name) | Self::NoSuchUser(name) => {
                Some(name.as_str())
            }
            _ => None,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::OutOfMemory)
    }
}
