use reqwest::{
    blocking::{Client, RequestBuilder},
    header::CONTENT_TYPE,
};
use std::time::Duration;
use streetcache_boundary as json;
use streetcache_core::{
    entities::*,
    gateways::{storage::*, Result},
    repositories::AddressCacheRepo,
    util::query::escape_like_pattern,
    RepoError,
};

use crate::http;

const STORAGE_OBJECT_PATH: &str = "/storage/v1/object";
const REST_PATH: &str = "/rest/v1";

const ADDRESS_CACHE_TABLE: &str = "address_cache";

/// Client for the storage and the PostgREST API of a Supabase project.
#[derive(Clone)]
pub struct Supabase {
    client: Client,
    url: String,
    api_key: String,
}

impl Supabase {
    pub fn try_new(url: &str, api_key: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = http::new_client(timeout)?;
        Ok(Self {
            client,
            url: url.trim_end_matches('/').to_owned(),
            api_key,
        })
    }

    pub fn public_base_url(&self) -> String {
        format!("{}{STORAGE_OBJECT_PATH}/public", self.url)
    }

    fn object_url(&self, bucket: &str, name: &ArtifactName) -> String {
        format!("{}{STORAGE_OBJECT_PATH}/{bucket}/{name}", self.url)
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}{REST_PATH}/{table}", self.url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.api_key)
            .header("apikey", &self.api_key)
    }

    fn send(&self, request: RequestBuilder) -> Result<reqwest::blocking::Response> {
        let response = self
            .authorized(request)
            .send()
            .map_err(http::from_reqwest_err)?;
        http::ensure_success(response)
    }
}

impl ArtifactStore for Supabase {
    fn upload(
        &self,
        bucket: &str,
        name: &ArtifactName,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<String> {
        log::debug!("Uploading {} bytes to {bucket}/{name}", data.len());
        let request = self
            .client
            .post(self.object_url(bucket, name))
            .header(CONTENT_TYPE, content_type)
            .body(data);
        self.send(request)?;
        Ok(public_artifact_url(&self.public_base_url(), bucket, name))
    }
}

// PostgREST accepts `*` in place of `%`.
fn address_filter(query: &str) -> String {
    format!("ilike.*{}*", escape_like_pattern(query))
}

fn repo_err(err: impl Into<anyhow::Error>) -> RepoError {
    RepoError::Other(err.into())
}

impl AddressCacheRepo for Supabase {
    fn find_address(&self, query: &str) -> std::result::Result<Option<AddressRecord>, RepoError> {
        log::debug!("Looking up '{query}' in table {ADDRESS_CACHE_TABLE}");
        let request = self
            .client
            .get(self.table_url(ADDRESS_CACHE_TABLE))
            .query(&[
                ("select", "*".to_owned()),
                ("address", address_filter(query)),
                ("limit", "1".to_owned()),
            ]);
        let rows: Vec<json::AddressRecord> = self
            .send(request)
            .map_err(repo_err)?
            .json()
            .map_err(repo_err)?;
        rows.into_iter()
            .next()
            .map(AddressRecord::try_from)
            .transpose()
            .map_err(repo_err)
    }

    fn insert_address(&self, record: &AddressRecord) -> std::result::Result<(), RepoError> {
        let row = json::AddressRecord::from(record.clone());
        let request = self
            .client
            .post(self.table_url(ADDRESS_CACHE_TABLE))
            .header("Prefer", "return=minimal")
            .json(&row);
        self.send(request).map_err(repo_err)?;
        Ok(())
    }
}
