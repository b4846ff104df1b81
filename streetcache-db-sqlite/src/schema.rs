table! {
    address_cache (id) {
        id -> BigInt,
        created_at -> BigInt,
        address -> Text,
        address_search -> Text,
        lat -> Double,
        lng -> Double,
        street_view_img_url -> Text,
        map_img_url -> Text,
    }
}
