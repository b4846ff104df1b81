// Outbound ports to the external providers.
// Every gateway decodes the provider responses into
// the typed structures defined here, untyped data
// never crosses this boundary.

use thiserror::Error;

pub mod geocode;
pub mod imagery;
pub mod storage;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to reach the provider: {0}")]
    Transport(String),
    #[error("The provider responded with status '{0}'")]
    Status(String),
    #[error("Invalid provider response: {0}")]
    Decode(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
