use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown type: {0}")]
    TypeNotFound(String),

    #[error("Unknown creature: {0}")]
    CreatureNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Type data provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),
}

impl Error {
    /// True for the unknown-name conditions
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::TypeNotFound(_) | Error::CreatureNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
