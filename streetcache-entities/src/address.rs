use strum::{AsRefStr, EnumString};

/// A single structured part of a geocoded address.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressComponent {
    pub long_name  : String,
    pub short_name : String,
    pub types      : Vec<String>,
}

impl AddressComponent {
    pub fn has_type(&self, t: &str) -> bool {
        self.types.iter().any(|x| x == t)
    }
}

/// The component types that make up a normalized address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum AddressCategory {
    StreetNumber,
    Route,
    Locality,
    #[strum(serialize = "administrative_area_level_1")]
    AdministrativeAreaLevel1,
    PostalCode,
}

impl AddressCategory {
    /// The value used in place of a missing component.
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::StreetNumber => "Unknown Street Number",
            Self::Route => "Unknown Street Name",
            Self::Locality => "Unknown City",
            Self::AdministrativeAreaLevel1 => "Unknown State",
            Self::PostalCode => "Unknown ZIP",
        }
    }
}
