use crate::entities::{AddressCategory, AddressComponent};

/// The short name of the first component of the given category.
pub fn extract_component(
    components: &[AddressComponent],
    category: AddressCategory,
) -> Option<&str> {
    components
        .iter()
        .find(|c| c.has_type(category.as_ref()))
        .map(|c| c.short_name.as_str())
}

fn component_or_placeholder(components: &[AddressComponent], category: AddressCategory) -> &str {
    extract_component(components, category).unwrap_or_else(|| category.placeholder())
}

/// Format the components as `<number> <street>, <city>, <state> <zip>`.
pub fn normalize_address(components: &[AddressComponent]) -> String {
    use AddressCategory as C;
    let number = component_or_placeholder(components, C::StreetNumber);
    let street = component_or_placeholder(components, C::Route);
    let city = component_or_placeholder(components, C::Locality);
    let state = component_or_placeholder(components, C::AdministrativeAreaLevel1);
    let zip = component_or_placeholder(components, C::PostalCode);
    format!("{number} {street}, {city}, {state} {zip}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use streetcache_entities::builders::*;

    fn component(name: &str, types: &[&str]) -> AddressComponent {
        AddressComponent::build()
            .name(name)
            .types(types.to_vec())
            .finish()
    }

    fn googleplex() -> Vec<AddressComponent> {
        vec![
            component("1600", &["street_number"]),
            component("Amphitheatre Parkway", &["route"]),
            component("Mountain View", &["locality", "political"]),
            component("Santa Clara County", &["administrative_area_level_2", "political"]),
            AddressComponent::build()
                .long_name("California")
                .short_name("CA")
                .types(vec!["administrative_area_level_1", "political"])
                .finish(),
            AddressComponent::build()
                .long_name("United States")
                .short_name("US")
                .types(vec!["country", "political"])
                .finish(),
            component("94043", &["postal_code"]),
        ]
    }

    #[test]
    fn normalize_complete_address() {
        assert_eq!(
            "1600 Amphitheatre Parkway, Mountain View, CA 94043",
            normalize_address(&googleplex())
        );
    }

    #[test]
    fn first_match_wins() {
        let components = vec![
            component("Springfield", &["locality"]),
            component("Shelbyville", &["locality"]),
        ];
        assert_eq!(
            Some("Springfield"),
            extract_component(&components, AddressCategory::Locality)
        );
    }

    #[test]
    fn use_short_name() {
        assert_eq!(
            Some("CA"),
            extract_component(&googleplex(), AddressCategory::AdministrativeAreaLevel1)
        );
    }

    #[test]
    fn missing_components_are_replaced_by_placeholders() {
        assert_eq!(
            "Unknown Street Number Unknown Street Name, Unknown City, Unknown State Unknown ZIP",
            normalize_address(&[])
        );
        let components = vec![
            component("Main Street", &["route"]),
            component("Springfield", &["locality"]),
        ];
        assert_eq!(
            "Unknown Street Number Main Street, Springfield, Unknown State Unknown ZIP",
            normalize_address(&components)
        );
    }
}
