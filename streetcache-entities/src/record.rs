use crate::geo::MapPoint;

/// A resolved address with references to its stored images.
///
/// The `address` is always the normalized form built from the
/// structured geocoder output and never the raw user input.
/// An image URL is empty if the image could not be stored.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    pub address               : String,
    pub pos                   : MapPoint,
    pub street_view_image_url : String,
    pub map_image_url         : String,
}

impl AddressRecord {
    pub fn has_street_view_image(&self) -> bool {
        !self.street_view_image_url.is_empty()
    }

    pub fn has_map_image(&self) -> bool {
        !self.map_image_url.is_empty()
    }
}
