use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// A cached or freshly resolved address.
///
/// The field names match the columns of the `address_cache` table.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub address             : String,
    pub lat                 : f64,
    pub lng                 : f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub street_view_img_url : String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub map_img_url         : String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Cache,
    Fresh,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "kebab-case")]
pub enum ImageKind {
    StreetView,
    Map,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
#[serde(rename_all = "kebab-case", tag = "kind", content = "image")]
pub enum Degradation {
    CacheLookupFailed,
    ImageFetchFailed(ImageKind),
    UploadFailed(ImageKind),
    CacheInsertFailed,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ResolutionResult {
    pub data: AddressRecord,
    pub source: Source,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degradations: Vec<Degradation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_record_with_column_names() {
        let record = AddressRecord {
            address: "1600 Amphitheatre Parkway, Mountain View, CA 94043".into(),
            lat: 37.4224,
            lng: -122.0841,
            street_view_img_url: "https://x/a.jpg".into(),
            map_img_url: "".into(),
        };
        assert_eq!(
            json!({
                "address": "1600 Amphitheatre Parkway, Mountain View, CA 94043",
                "lat": 37.4224,
                "lng": -122.0841,
                "streetViewImgUrl": "https://x/a.jpg",
                "mapImgUrl": ""
            }),
            serde_json::to_value(&record).unwrap()
        );
    }

    #[test]
    fn deserialize_row_with_extra_columns() {
        let row = json!({
            "id": 42,
            "created_at": "2024-09-01T12:00:00Z",
            "address": "1 Main St, Springfield, IL 62701",
            "lat": 39.8,
            "lng": -89.6,
            "streetViewImgUrl": "https://x/a.jpg",
            "mapImgUrl": null
        });
        let record: AddressRecord = serde_json::from_value(row).unwrap();
        assert_eq!(39.8, record.lat);
        assert_eq!("", record.map_img_url);

        let row = json!({
            "id": 42,
            "address": "1 Main St, Springfield, IL 62701",
            "lat": 39.8,
            "lng": -89.6,
            "streetViewImgUrl": "https://x/a.jpg"
        });
        let record: AddressRecord = serde_json::from_value(row).unwrap();
        assert_eq!("https://x/a.jpg", record.street_view_img_url);
        assert_eq!("", record.map_img_url);
    }

    #[test]
    fn serialize_result() {
        let result = ResolutionResult {
            data: AddressRecord {
                address: "a".into(),
                lat: 1.0,
                lng: 2.0,
                street_view_img_url: "".into(),
                map_img_url: "".into(),
            },
            source: Source::Fresh,
            degradations: vec![
                Degradation::UploadFailed(ImageKind::Map),
                Degradation::CacheInsertFailed,
            ],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(json!("fresh"), value["source"]);
        assert_eq!(
            json!([
                { "kind": "upload-failed", "image": "map" },
                { "kind": "cache-insert-failed" }
            ]),
            value["degradations"]
        );
    }

    #[test]
    fn omit_empty_degradations() {
        let result = ResolutionResult {
            data: AddressRecord {
                address: "a".into(),
                lat: 1.0,
                lng: 2.0,
                street_view_img_url: "".into(),
                map_img_url: "".into(),
            },
            source: Source::Cache,
            degradations: vec![],
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(json!("cache"), value["source"]);
        assert!(value.get("degradations").is_none());
    }
}
