pub mod address;
pub mod geo;
pub mod query;
