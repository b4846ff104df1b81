pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use streetcache_entities::{
        address::*, artifact::*, geo::*, record::*, resolution::*,
    };
}

pub use self::repositories::Error as RepoError;
