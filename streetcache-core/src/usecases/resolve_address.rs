use super::prelude::*;
use crate::util::{address::normalize_address, geo::street_view_heading};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionResult {
    pub record: AddressRecord,
    pub provenance: Provenance,
    pub degradations: Vec<Degradation>,
}

impl ResolutionResult {
    pub fn is_degraded(&self) -> bool {
        !self.degradations.is_empty()
    }
}

/// Resolves addresses from the cache or, on a miss, from the providers.
///
/// The resolver has no mutable state of its own. Resolving the same
/// address concurrently may store the record twice.
#[derive(Debug)]
pub struct AddressResolver<R, G, I, S> {
    cache: R,
    geocoding: G,
    imagery: I,
    artifacts: S,
    bucket: String,
}

impl<R, G, I, S> AddressResolver<R, G, I, S>
where
    R: AddressCacheRepo,
    G: GeoCodingGateway,
    I: ImageryGateway,
    S: ArtifactStore,
{
    pub fn new(
        cache: R,
        geocoding: G,
        imagery: I,
        artifacts: S,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            cache,
            geocoding,
            imagery,
            artifacts,
            bucket: bucket.into(),
        }
    }

    pub fn cache(&self) -> &R {
        &self.cache
    }

    pub fn geocoding(&self) -> &G {
        &self.geocoding
    }

    pub fn imagery(&self) -> &I {
        &self.imagery
    }

    pub fn artifacts(&self) -> &S {
        &self.artifacts
    }

    pub fn resolve_address(&self, address: &str) -> Result<ResolutionResult> {
        let query = address.trim();
        if query.is_empty() {
            return Err(Error::EmptyAddress);
        }
        let mut degradations = vec![];

        match self.cache.find_address(query) {
            Ok(Some(record)) => {
                log::debug!("Found cached record for '{query}': {}", record.address);
                return Ok(ResolutionResult {
                    record,
                    provenance: Provenance::Cache,
                    degradations,
                });
            }
            Ok(None) => {
                log::info!("Nothing cached for '{query}', asking the providers");
            }
            Err(err) => {
                log::warn!("Failed to query the address cache for '{query}': {err}");
                degradations.push(Degradation::CacheLookupFailed);
            }
        }

        let GeocodedAddress { pos, components } = self
            .geocoding
            .resolve_address(query)
            .inspect_err(|err| log::warn!("Failed to geocode '{query}': {err}"))?
            .ok_or_else(|| {
                log::info!("No geocoding results for '{query}'");
                Error::NotFound
            })?;
        let address = normalize_address(&components);
        log::debug!("Resolved '{query}' to '{address}' at {pos}");

        let camera = match self.imagery.street_view_metadata(pos)? {
            StreetViewMetadata::Available { camera } => camera,
            StreetViewMetadata::Unavailable { status } => {
                log::info!("No street view imagery for '{address}' ({status})");
                return Err(Error::ImageryUnavailable);
            }
        };
        let heading = street_view_heading(camera, pos);
        log::debug!("Street view camera at {camera} with heading {heading}");

        let street_view_image_url = self.fetch_and_store(
            ImageKind::StreetView,
            || self.imagery.fetch_street_view_image(camera, heading),
            &mut degradations,
        );
        let map_image_url = self.fetch_and_store(
            ImageKind::Map,
            || self.imagery.fetch_map_image(pos),
            &mut degradations,
        );

        let record = AddressRecord {
            address,
            pos,
            street_view_image_url,
            map_image_url,
        };
        if let Err(err) = self.cache.insert_address(&record) {
            log::warn!("Failed to cache the record of '{}': {err}", record.address);
            degradations.push(Degradation::CacheInsertFailed);
        }

        Ok(ResolutionResult {
            record,
            provenance: Provenance::Fresh,
            degradations,
        })
    }

    // Returns the public URL of the stored image or an
    // empty string if either fetching or storing failed.
    fn fetch_and_store<F>(
        &self,
        kind: ImageKind,
        fetch: F,
        degradations: &mut Vec<Degradation>,
    ) -> String
    where
        F: FnOnce() -> crate::gateways::Result<Vec<u8>>,
    {
        let data = match fetch() {
            Ok(data) => data,
            Err(err) => {
                log::warn!("Failed to fetch {kind} image: {err}");
                degradations.push(Degradation::ImageFetchFailed(kind));
                return String::new();
            }
        };
        let name = ArtifactName::new_jpeg();
        match self
            .artifacts
            .upload(&self.bucket, &name, JPEG_CONTENT_TYPE, data)
        {
            Ok(url) => {
                log::debug!("Stored {kind} image as {url}");
                url
            }
            Err(err) => {
                log::warn!("Failed to upload {kind} image '{name}': {err}");
                degradations.push(Degradation::UploadFailed(kind));
                String::new()
            }
        }
    }
}
