use reqwest::blocking::{Client, Response};
use serde::{de::DeserializeOwned, Deserialize};
use std::time::Duration;
use streetcache_core::{
    entities::*,
    gateways::{geocode::*, imagery::*, Error, Result},
};

use crate::http;

pub const DEFAULT_API_BASE_URL: &str = "https://maps.googleapis.com";

const GEOCODE_PATH: &str = "/maps/api/geocode/json";
const STREET_VIEW_METADATA_PATH: &str = "/maps/api/streetview/metadata";
const STREET_VIEW_IMAGE_PATH: &str = "/maps/api/streetview";
const STATIC_MAP_PATH: &str = "/maps/api/staticmap";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

type Params = Vec<(&'static str, String)>;

/// Client for the Geocoding, Street View Static and
/// Maps Static APIs that share a single API key.
#[derive(Clone)]
pub struct GoogleMaps {
    client: Client,
    api_base_url: String,
    api_key: String,
}

impl GoogleMaps {
    pub fn try_new(api_base_url: &str, api_key: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = http::new_client(timeout)?;
        Ok(Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
            api_key,
        })
    }

    fn get(&self, path: &str, params: &Params) -> Result<Response> {
        // Never log the key
        log::debug!("GET {path} {params:?}");
        let url = format!("{}{path}", self.api_base_url);
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("key", &self.api_key)])
            .send()
            .map_err(http::from_reqwest_err)?;
        http::ensure_success(response)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T> {
        self.get(path, params)?
            .json()
            .map_err(http::from_reqwest_err)
    }

    fn get_image(&self, path: &str, params: &Params) -> Result<Vec<u8>> {
        let data = self
            .get(path, params)?
            .bytes()
            .map_err(http::from_reqwest_err)?;
        if data.is_empty() {
            return Err(Error::Decode("Empty image".into()));
        }
        log::debug!("Received image with {} bytes from {path}", data.len());
        Ok(data.to_vec())
    }
}

impl GeoCodingGateway for GoogleMaps {
    fn resolve_address(&self, address: &str) -> Result<Option<GeocodedAddress>> {
        let response: GeocodeResponse = self.get_json(GEOCODE_PATH, &geocode_params(address))?;
        response.try_into_geocoded_address()
    }
}

impl ImageryGateway for GoogleMaps {
    fn street_view_metadata(&self, pos: MapPoint) -> Result<StreetViewMetadata> {
        let response: MetadataResponse =
            self.get_json(STREET_VIEW_METADATA_PATH, &metadata_params(pos))?;
        response.try_into_street_view_metadata()
    }

    fn fetch_street_view_image(&self, camera: MapPoint, heading: Degrees) -> Result<Vec<u8>> {
        self.get_image(
            STREET_VIEW_IMAGE_PATH,
            &street_view_image_params(camera, heading),
        )
    }

    fn fetch_map_image(&self, pos: MapPoint) -> Result<Vec<u8>> {
        self.get_image(STATIC_MAP_PATH, &static_map_params(pos))
    }
}

fn image_size() -> String {
    format!("{IMAGE_WIDTH}x{IMAGE_HEIGHT}")
}

fn geocode_params(address: &str) -> Params {
    vec![("address", address.to_owned())]
}

fn metadata_params(pos: MapPoint) -> Params {
    vec![("location", pos.to_string())]
}

fn street_view_image_params(camera: MapPoint, heading: Degrees) -> Params {
    vec![
        ("size", image_size()),
        ("location", camera.to_string()),
        ("heading", heading.to_string()),
        ("pitch", STREET_VIEW_PITCH.to_string()),
    ]
}

fn static_map_params(pos: MapPoint) -> Params {
    vec![
        ("center", pos.to_string()),
        ("zoom", MAP_ZOOM.to_string()),
        ("size", image_size()),
        ("markers", format!("color:red|{pos}")),
    ]
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl LatLng {
    fn try_into_map_point(self) -> Result<MapPoint> {
        let Self { lat, lng } = self;
        MapPoint::try_from_lat_lng_deg(lat, lng)
            .map_err(|err| Error::Decode(format!("Invalid location ({lat},{lng}): {err}")))
    }
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct JsonAddressComponent {
    long_name: String,
    short_name: String,
    #[serde(default)]
    types: Vec<String>,
}

impl From<JsonAddressComponent> for AddressComponent {
    fn from(from: JsonAddressComponent) -> Self {
        let JsonAddressComponent {
            long_name,
            short_name,
            types,
        } = from;
        Self {
            long_name,
            short_name,
            types,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
    #[serde(default)]
    address_components: Vec<JsonAddressComponent>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

impl GeocodeResponse {
    fn try_into_geocoded_address(self) -> Result<Option<GeocodedAddress>> {
        let Self {
            status,
            results,
            error_message,
        } = self;
        if status == STATUS_ZERO_RESULTS {
            return Ok(None);
        }
        if status != STATUS_OK {
            let message = match error_message {
                Some(msg) => format!("{status}: {msg}"),
                None => status,
            };
            return Err(Error::Status(message));
        }
        let Some(GeocodeResult {
            geometry,
            address_components,
        }) = results.into_iter().next()
        else {
            return Ok(None);
        };
        let pos = geometry.location.try_into_map_point()?;
        let components = address_components.into_iter().map(Into::into).collect();
        Ok(Some(GeocodedAddress { pos, components }))
    }
}

#[derive(Debug, Deserialize)]
struct MetadataResponse {
    status: String,
    location: Option<LatLng>,
}

impl MetadataResponse {
    fn try_into_street_view_metadata(self) -> Result<StreetViewMetadata> {
        let Self { status, location } = self;
        if status != STATUS_OK {
            return Ok(StreetViewMetadata::Unavailable { status });
        }
        let camera = location
            .ok_or_else(|| Error::Decode("Street view metadata without location".into()))?
            .try_into_map_point()?;
        Ok(StreetViewMetadata::Available { camera })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode_geocode(value: serde_json::Value) -> Result<Option<GeocodedAddress>> {
        serde_json::from_value::<GeocodeResponse>(value)
            .unwrap()
            .try_into_geocoded_address()
    }

    fn decode_metadata(value: serde_json::Value) -> Result<StreetViewMetadata> {
        serde_json::from_value::<MetadataResponse>(value)
            .unwrap()
            .try_into_street_view_metadata()
    }

    #[test]
    fn decode_geocoded_address() {
        let response = json!({
            "status": "OK",
            "results": [{
                "formatted_address": "Google Building 40, 1600 Amphitheatre Pkwy, Mountain View, CA 94043, USA",
                "geometry": {
                    "location": { "lat": 37.4224, "lng": -122.0841 },
                    "location_type": "ROOFTOP"
                },
                "address_components": [
                    { "long_name": "1600", "short_name": "1600", "types": ["street_number"] },
                    { "long_name": "Amphitheatre Parkway", "short_name": "Amphitheatre Pkwy", "types": ["route"] },
                    { "long_name": "California", "short_name": "CA", "types": ["administrative_area_level_1", "political"] }
                ],
                "place_id": "ChIJj38IfwK6j4ARNcyPDnEGa9g"
            }, {
                "geometry": { "location": { "lat": 0.0, "lng": 0.0 } },
                "address_components": []
            }]
        });
        let GeocodedAddress { pos, components } = decode_geocode(response).unwrap().unwrap();
        assert_eq!(MapPoint::from_lat_lng_deg(37.4224, -122.0841), pos);
        assert_eq!(3, components.len());
        assert_eq!("Amphitheatre Pkwy", components[1].short_name);
        assert_eq!("Amphitheatre Parkway", components[1].long_name);
        assert!(components[2].has_type("administrative_area_level_1"));
    }

    #[test]
    fn decode_zero_results() {
        let response = json!({ "status": "ZERO_RESULTS", "results": [] });
        assert!(decode_geocode(response).unwrap().is_none());
        let response = json!({ "status": "OK", "results": [] });
        assert!(decode_geocode(response).unwrap().is_none());
    }

    #[test]
    fn reject_failed_geocoding() {
        let response = json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid.",
            "results": []
        });
        match decode_geocode(response) {
            Err(Error::Status(msg)) => {
                assert_eq!("REQUEST_DENIED: The provided API key is invalid.", msg);
            }
            res => panic!("unexpected result: {res:?}"),
        }
        let response = json!({ "status": "OVER_QUERY_LIMIT" });
        assert!(matches!(decode_geocode(response), Err(Error::Status(msg)) if msg == "OVER_QUERY_LIMIT"));
    }

    #[test]
    fn reject_invalid_geocoded_location() {
        let response = json!({
            "status": "OK",
            "results": [{ "geometry": { "location": { "lat": 91.0, "lng": 0.0 } } }]
        });
        assert!(matches!(decode_geocode(response), Err(Error::Decode(_))));
    }

    #[test]
    fn decode_available_street_view() {
        let response = json!({
            "copyright": "© Google",
            "date": "2023-06",
            "location": { "lat": 37.42245, "lng": -122.08404 },
            "pano_id": "tu510ie_z4ptBZYo2BGEJg",
            "status": "OK"
        });
        assert_eq!(
            StreetViewMetadata::Available {
                camera: MapPoint::from_lat_lng_deg(37.42245, -122.08404)
            },
            decode_metadata(response).unwrap()
        );
    }

    #[test]
    fn decode_unavailable_street_view() {
        let response = json!({ "status": "ZERO_RESULTS" });
        assert_eq!(
            StreetViewMetadata::Unavailable {
                status: "ZERO_RESULTS".into()
            },
            decode_metadata(response).unwrap()
        );
        let response = json!({ "status": "OK" });
        assert!(matches!(decode_metadata(response), Err(Error::Decode(_))));
    }

    #[test]
    fn street_view_image_query() {
        let camera = MapPoint::from_lat_lng_deg(37.42245, -122.08404);
        assert_eq!(
            vec![
                ("size", "600x400".to_string()),
                ("location", "37.42245,-122.08404".to_string()),
                ("heading", "90.5".to_string()),
                ("pitch", "-0.76".to_string()),
            ],
            street_view_image_params(camera, 90.5)
        );
    }

    #[test]
    fn static_map_query() {
        let pos = MapPoint::from_lat_lng_deg(37.4224, -122.0841);
        assert_eq!(
            vec![
                ("center", "37.4224,-122.0841".to_string()),
                ("zoom", "16".to_string()),
                ("size", "600x400".to_string()),
                ("markers", "color:red|37.4224,-122.0841".to_string()),
            ],
            static_map_params(pos)
        );
    }

    #[test]
    fn trim_base_url() {
        let gw = GoogleMaps::try_new(
            "http://localhost:8080/",
            "secret".into(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!("http://localhost:8080", gw.api_base_url);
    }
}
