pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{component_builder::*, record_builder::*};

pub mod record_builder {

    use super::*;
    use crate::{geo::*, record::*};

    #[derive(Debug)]
    pub struct AddressRecordBuild {
        record: AddressRecord,
    }

    impl AddressRecordBuild {
        pub fn address(mut self, address: &str) -> Self {
            self.record.address = address.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.record.pos = pos;
            self
        }
        pub fn street_view_image_url(mut self, url: &str) -> Self {
            self.record.street_view_image_url = url.into();
            self
        }
        pub fn map_image_url(mut self, url: &str) -> Self {
            self.record.map_image_url = url.into();
            self
        }
        pub fn finish(self) -> AddressRecord {
            self.record
        }
    }

    impl Builder for AddressRecord {
        type Build = AddressRecordBuild;
        fn build() -> AddressRecordBuild {
            AddressRecordBuild {
                record: AddressRecord {
                    address: "1600 Amphitheatre Parkway, Mountain View, CA 94043".into(),
                    pos: MapPoint::from_lat_lng_deg(37.4224, -122.0841),
                    street_view_image_url: String::new(),
                    map_image_url: String::new(),
                },
            }
        }
    }
}

pub mod component_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressComponentBuild {
        component: AddressComponent,
    }

    impl AddressComponentBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.component.long_name = name.into();
            self.component.short_name = name.into();
            self
        }
        pub fn long_name(mut self, name: &str) -> Self {
            self.component.long_name = name.into();
            self
        }
        pub fn short_name(mut self, name: &str) -> Self {
            self.component.short_name = name.into();
            self
        }
        pub fn category(mut self, category: AddressCategory) -> Self {
            self.component.types.push(category.as_ref().to_owned());
            self
        }
        pub fn types(mut self, types: Vec<impl Into<String>>) -> Self {
            self.component.types = types.into_iter().map(|x| x.into()).collect();
            self
        }
        pub fn finish(self) -> AddressComponent {
            self.component
        }
    }

    impl Builder for AddressComponent {
        type Build = AddressComponentBuild;
        fn build() -> AddressComponentBuild {
            AddressComponentBuild {
                component: AddressComponent::default(),
            }
        }
    }
}
