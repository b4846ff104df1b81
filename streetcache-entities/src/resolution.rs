use strum::{AsRefStr, Display, EnumString};

use crate::artifact::ImageKind;

/// Where the data of a resolved address came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Provenance {
    /// A previously stored record.
    Cache,
    /// Freshly fetched from the external providers.
    Fresh,
}

impl Provenance {
    pub const fn is_cached(self) -> bool {
        matches!(self, Self::Cache)
    }
}

/// A non-fatal failure that occurred while resolving an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degradation {
    /// The cache could not be queried and was treated as a miss.
    CacheLookupFailed,
    /// The image could not be fetched, its URL is empty.
    ImageFetchFailed(ImageKind),
    /// The image could not be stored, its URL is empty.
    UploadFailed(ImageKind),
    /// The fresh record could not be cached.
    CacheInsertFailed,
}
