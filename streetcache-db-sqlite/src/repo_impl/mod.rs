use anyhow::anyhow;
use diesel::{self, prelude::*, result::Error as DieselError};

use streetcache_core::{
    entities::*,
    repositories::{self as repo, *},
    util::query::{substring_like_pattern, LIKE_ESCAPE},
};

use super::*;


type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    repo::Error::Other(err.into())
}

fn now_millis() -> i64 {
    let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
    (nanos / 1_000_000) as i64
}

fn load_address_record(entry: models::AddressCacheEntry) -> Result<AddressRecord> {
    let models::AddressCacheEntry {
        id,
        created_at: _,
        address,
        address_search: _,
        lat,
        lng,
        street_view_img_url,
        map_img_url,
    } = entry;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .map_err(|err| anyhow!("Invalid position of cached address #{id}: {err}"))?;
    Ok(AddressRecord {
        address,
        pos,
        street_view_image_url: street_view_img_url,
        map_image_url: map_img_url,
    })
}

// SQLite only folds ASCII letters, so both sides are lowercased up front.
fn find_address(conn: &mut SqliteConnection, query: &str) -> Result<Option<AddressRecord>> {
    use schema::address_cache::dsl;
    let pattern = substring_like_pattern(&query.to_lowercase());
    schema::address_cache::table
        .filter(dsl::address_search.like(pattern).escape(LIKE_ESCAPE))
        .order(dsl::id.asc())
        .first::<models::AddressCacheEntry>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_address_record)
        .transpose()
}

fn insert_address(conn: &mut SqliteConnection, record: &AddressRecord) -> Result<()> {
    let AddressRecord {
        address,
        pos,
        street_view_image_url,
        map_image_url,
    } = record;
    let (lat, lng) = pos.to_lat_lng_deg();
    let address_search = address.to_lowercase();
    let insertable = models::NewAddressCacheEntry {
        created_at: now_millis(),
        address,
        address_search: &address_search,
        lat,
        lng,
        street_view_img_url: street_view_image_url,
        map_img_url: map_image_url,
    };
    diesel::insert_into(schema::address_cache::table)
        .values(&insertable)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

impl AddressCacheRepo for DbReadWrite<'_> {
    fn find_address(&self, query: &str) -> Result<Option<AddressRecord>> {
        find_address(&mut self.sqlite_conn(), query)
    }

    fn insert_address(&self, record: &AddressRecord) -> Result<()> {
        insert_address(&mut self.sqlite_conn(), record)
    }
}

/// Locks the pool only for the duration of a single statement.
impl AddressCacheRepo for Connections {
    fn find_address(&self, query: &str) -> Result<Option<AddressRecord>> {
        let db = self.shared()?;
        let mut conn = db.sqlite_conn();
        find_address(&mut conn, query)
    }

    fn insert_address(&self, record: &AddressRecord) -> Result<()> {
        self.exclusive()?.insert_address(record)
    }
}
