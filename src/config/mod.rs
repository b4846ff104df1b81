use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "streetcache.toml";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_NAME_DB_URL: &str = "DATABASE_URL";
const ENV_NAME_GOOGLE_MAPS_API_KEY: &str = "GOOGLE_MAPS_API_KEY";
const ENV_NAME_SUPABASE_URL: &str = "SUPABASE_URL";
const ENV_NAME_SUPABASE_API_KEY: &str = "SUPABASE_API_KEY";

pub struct Config {
    pub db: Db,
    pub cache: Cache,
    pub storage: Storage,
    // Gateways are only validated when they are needed.
    pub google_maps: Option<GoogleMaps>,
    pub supabase: Option<Supabase>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        apply_env_overrides(&mut raw_config, |name| env::var(name).ok());
        Self::try_from(raw_config)
    }
}

fn apply_env_overrides<F>(cfg: &mut raw::Config, env_var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(db_url) = env_var(ENV_NAME_DB_URL) {
        cfg.db.get_or_insert_with(Default::default).connection_sqlite = db_url;
    }
    let gateway = cfg.gateway.get_or_insert_with(Default::default);
    if let Some(api_key) = env_var(ENV_NAME_GOOGLE_MAPS_API_KEY) {
        gateway
            .google_maps
            .get_or_insert_with(Default::default)
            .api_key = Some(api_key);
    }
    if let Some(url) = env_var(ENV_NAME_SUPABASE_URL) {
        gateway.supabase.get_or_insert_with(Default::default).url = Some(url);
    }
    if let Some(api_key) = env_var(ENV_NAME_SUPABASE_API_KEY) {
        gateway.supabase.get_or_insert_with(Default::default).api_key = Some(api_key);
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
}

pub enum Cache {
    Sqlite,
    /// The `address_cache` table of the Supabase project.
    Postgrest,
}

pub struct Storage {
    pub bucket: String,
    pub gateway: StorageGateway,
}

#[derive(Clone)]
pub enum StorageGateway {
    Supabase,
    /// For local testing purposes
    LocalDir {
        /// File system directory for writing images.
        dir: PathBuf,
        public_base_url: String,
    },
}

pub struct GoogleMaps {
    pub api_key: String,
    pub api_base_url: String,
    pub request_timeout: Duration,
}

pub struct Supabase {
    pub url: String,
    pub api_key: String,
    pub request_timeout: Duration,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            cache,
            storage,
            gateway,
        } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("Invalid database connection pool size"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::Gateway {
            google_maps,
            supabase,
            local_dir,
        } = gateway.unwrap_or_default();

        let raw::GoogleMaps {
            api_key,
            api_base_url,
            request_timeout,
        } = google_maps.unwrap_or_default();
        let google_maps = api_key
            .filter(|key| !key.trim().is_empty())
            .map(|api_key| GoogleMaps {
                api_key,
                api_base_url: api_base_url.unwrap_or_else(|| {
                    streetcache_gateways::google_maps::DEFAULT_API_BASE_URL.to_owned()
                }),
                request_timeout: request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            });

        let supabase = match supabase {
            Some(raw::Supabase {
                url,
                api_key,
                request_timeout,
            }) => {
                let url = url.ok_or_else(|| anyhow!("Missing 'supabase' URL"))?;
                let api_key = api_key.ok_or_else(|| anyhow!("Missing 'supabase' API key"))?;
                Some(Supabase {
                    url,
                    api_key,
                    request_timeout: request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
                })
            }
            None => None,
        };

        let raw::Cache { backend } = cache.unwrap_or_default();
        let cache = match backend {
            raw::CacheBackend::Sqlite => Cache::Sqlite,
            raw::CacheBackend::Postgrest => {
                if supabase.is_none() {
                    return Err(anyhow!(
                        "Missing 'supabase' gateway configuration for the 'postgrest' cache"
                    ));
                }
                Cache::Postgrest
            }
        };

        let raw::Storage { gateway, bucket } = storage.unwrap_or_default();
        if bucket.is_empty() {
            return Err(anyhow!("Missing storage bucket"));
        }
        let gateway = match gateway {
            raw::StorageGateway::Supabase => StorageGateway::Supabase,
            raw::StorageGateway::LocalDir => {
                let raw::LocalDir {
                    dir,
                    public_base_url,
                } = local_dir
                    .ok_or_else(|| anyhow!("Missing 'local-dir' gateway configuration"))?;
                log::info!("Use local directory storage ({})", dir.display());
                StorageGateway::LocalDir {
                    dir,
                    public_base_url,
                }
            }
        };
        let storage = Storage { bucket, gateway };

        Ok(Self {
            db,
            cache,
            storage,
            google_maps,
            supabase,
        })
    }
}
