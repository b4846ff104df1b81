#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = address_cache)]
pub struct NewAddressCacheEntry<'a> {
    pub created_at: i64,
    pub address: &'a str,
    pub address_search: &'a str,
    pub lat: f64,
    pub lng: f64,
    pub street_view_img_url: &'a str,
    pub map_img_url: &'a str,
}

#[derive(Queryable)]
pub struct AddressCacheEntry {
    pub id: i64,
    pub created_at: i64,
    pub address: String,
    pub address_search: String,
    pub lat: f64,
    pub lng: f64,
    pub street_view_img_url: String,
    pub map_img_url: String,
}
