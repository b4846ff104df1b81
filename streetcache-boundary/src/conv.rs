use super::*;
use e::geo::{MapPoint, MapPointError};
use std::convert::TryFrom;
use streetcache_entities as e;

impl From<e::record::AddressRecord> for AddressRecord {
    fn from(from: e::record::AddressRecord) -> Self {
        let e::record::AddressRecord {
            address,
            pos,
            street_view_image_url,
            map_image_url,
        } = from;
        Self {
            address,
            lat: pos.lat(),
            lng: pos.lng(),
            street_view_img_url: street_view_image_url,
            map_img_url: map_image_url,
        }
    }
}

impl TryFrom<AddressRecord> for e::record::AddressRecord {
    type Error = MapPointError;
    fn try_from(from: AddressRecord) -> Result<Self, Self::Error> {
        let AddressRecord {
            address,
            lat,
            lng,
            street_view_img_url,
            map_img_url,
        } = from;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng)?;
        Ok(Self {
            address,
            pos,
            street_view_image_url: street_view_img_url,
            map_image_url: map_img_url,
        })
    }
}

impl From<e::resolution::Provenance> for Source {
    fn from(from: e::resolution::Provenance) -> Self {
        use e::resolution::Provenance as P;
        match from {
            P::Cache => Self::Cache,
            P::Fresh => Self::Fresh,
        }
    }
}

impl From<e::artifact::ImageKind> for ImageKind {
    fn from(from: e::artifact::ImageKind) -> Self {
        use e::artifact::ImageKind as K;
        match from {
            K::StreetView => Self::StreetView,
            K::Map => Self::Map,
        }
    }
}

impl From<e::resolution::Degradation> for Degradation {
    fn from(from: e::resolution::Degradation) -> Self {
        use e::resolution::Degradation as D;
        match from {
            D::CacheLookupFailed => Self::CacheLookupFailed,
            D::ImageFetchFailed(kind) => Self::ImageFetchFailed(kind.into()),
            D::UploadFailed(kind) => Self::UploadFailed(kind.into()),
            D::CacheInsertFailed => Self::CacheInsertFailed,
        }
    }
}
