use super::Result;
use crate::entities::{Degrees, MapPoint};

pub const IMAGE_WIDTH: u16 = 600;
pub const IMAGE_HEIGHT: u16 = 400;

pub const STREET_VIEW_PITCH: Degrees = -0.76;
pub const MAP_ZOOM: u8 = 16;

#[derive(Debug, Clone, PartialEq)]
pub enum StreetViewMetadata {
    /// Imagery exists, taken by a camera at the given position.
    Available { camera: MapPoint },
    /// No usable imagery, with the status reported by the provider.
    Unavailable { status: String },
}

pub trait ImageryGateway {
    fn street_view_metadata(&self, pos: MapPoint) -> Result<StreetViewMetadata>;

    /// A `IMAGE_WIDTH`×`IMAGE_HEIGHT` photo taken from `camera`
    /// looking into direction `heading` with `STREET_VIEW_PITCH`.
    fn fetch_street_view_image(&self, camera: MapPoint, heading: Degrees) -> Result<Vec<u8>>;

    /// A `IMAGE_WIDTH`×`IMAGE_HEIGHT` map centered at `pos` with
    /// zoom level `MAP_ZOOM` and a marker at `pos`.
    fn fetch_map_image(&self, pos: MapPoint) -> Result<Vec<u8>>;
}
