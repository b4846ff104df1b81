// Low-level access to the record cache.
// Records are appended and never updated or deleted.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AddressCacheRepo {
    /// Find a record whose normalized address contains
    /// the query text, ignoring case.
    ///
    /// If multiple records match, the first one returned
    /// by the storage wins.
    fn find_address(&self, query: &str) -> Result<Option<AddressRecord>>;

    /// Append a new record. Existing records with the same
    /// address are left untouched.
    fn insert_address(&self, record: &AddressRecord) -> Result<()>;
}
