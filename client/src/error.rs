use pokedex_core::{Error as CoreError, FetchError};
use pokedex_protocol::ParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Parse(#[from] ParseError),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }

    /// Map a failed creature lookup onto the core taxonomy
    pub fn into_creature_error(self) -> CoreError {
        match self {
            ClientError::NotFound(name) => CoreError::CreatureNotFound(name),
            ClientError::InvalidName(name) => {
                CoreError::InvalidInput(format!("invalid creature name {:?}", name))
            }
            other => CoreError::ProviderUnavailable(other.to_string()),
        }
    }
}

impl From<ClientError> for FetchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(name) | ClientError::InvalidName(name) => {
                FetchError::NotFound(name)
            }
            other => FetchError::Unavailable(other.to_string()),
        }
    }
}
