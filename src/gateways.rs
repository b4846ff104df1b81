use anyhow::{anyhow, Context as _, Result};
use streetcache_core::{
    entities::{AddressRecord, ArtifactName},
    gateways::{self, storage::ArtifactStore},
    repositories::AddressCacheRepo,
    RepoError,
};
use streetcache_db_sqlite as sqlite;
use streetcache_gateways::{google_maps::GoogleMaps, local_dir::LocalDirStore, supabase::Supabase};

use crate::config::{self, Config};

pub fn google_maps_gateway(cfg: &Config) -> Result<GoogleMaps> {
    let config::GoogleMaps {
        api_key,
        api_base_url,
        request_timeout,
    } = cfg
        .google_maps
        .as_ref()
        .ok_or_else(|| anyhow!("Missing 'google-maps' API key"))?;
    GoogleMaps::try_new(api_base_url, api_key.clone(), *request_timeout)
}

fn supabase_gateway(cfg: &Config) -> Result<Supabase> {
    let config::Supabase {
        url,
        api_key,
        request_timeout,
    } = cfg
        .supabase
        .as_ref()
        .ok_or_else(|| anyhow!("Missing 'supabase' gateway configuration"))?;
    Supabase::try_new(url, api_key.clone(), *request_timeout)
}

pub fn cache_repo(cfg: &Config) -> Result<CacheRepo> {
    match cfg.cache {
        config::Cache::Sqlite => {
            let config::Db {
                conn_sqlite,
                conn_pool_size,
            } = &cfg.db;
            log::info!("Use SQLite cache ({conn_sqlite})");
            let connections = sqlite::Connections::init(conn_sqlite, (*conn_pool_size).into())?;
            sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
            Ok(CacheRepo::new(connections))
        }
        config::Cache::Postgrest => {
            log::info!("Use PostgREST cache");
            Ok(CacheRepo::new(supabase_gateway(cfg)?))
        }
    }
}

pub fn artifact_store(cfg: &Config) -> Result<ArtifactStoreGw> {
    match &cfg.storage.gateway {
        config::StorageGateway::Supabase => {
            let gw = supabase_gateway(cfg)
                .context("The 'supabase' storage requires a Supabase configuration")?;
            log::info!("Use Supabase storage");
            Ok(ArtifactStoreGw::new(gw))
        }
        config::StorageGateway::LocalDir {
            dir,
            public_base_url,
        } => {
            let store = LocalDirStore::try_new(dir, public_base_url.clone())?;
            Ok(ArtifactStoreGw::new(store))
        }
    }
}

pub struct CacheRepo(Box<dyn AddressCacheRepo + Send + Sync + 'static>);

impl CacheRepo {
    pub fn new<R>(repo: R) -> Self
    where
        R: AddressCacheRepo + Send + Sync + 'static,
    {
        Self(Box::new(repo))
    }
}

impl AddressCacheRepo for CacheRepo {
    fn find_address(&self, query: &str) -> Result<Option<AddressRecord>, RepoError> {
        self.0.find_address(query)
    }

    fn insert_address(&self, record: &AddressRecord) -> Result<(), RepoError> {
        self.0.insert_address(record)
    }
}

pub struct ArtifactStoreGw(Box<dyn ArtifactStore + Send + Sync + 'static>);

impl ArtifactStoreGw {
    pub fn new<S>(store: S) -> Self
    where
        S: ArtifactStore + Send + Sync + 'static,
    {
        Self(Box::new(store))
    }
}

impl ArtifactStore for ArtifactStoreGw {
    fn upload(
        &self,
        bucket: &str,
        name: &ArtifactName,
        content_type: &str,
        data: Vec<u8>,
    ) -> gateways::Result<String> {
        self.0.upload(bucket, name, content_type, data)
    }
}
