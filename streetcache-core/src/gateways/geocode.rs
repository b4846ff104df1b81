use super::Result;
use crate::entities::{AddressComponent, MapPoint};

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    pub pos: MapPoint,
    pub components: Vec<AddressComponent>,
}

pub trait GeoCodingGateway {
    /// Resolve a free-text address with a single provider request.
    ///
    /// Returns `Ok(None)` if the provider did not find any result.
    fn resolve_address(&self, address: &str) -> Result<Option<GeocodedAddress>>;
}
