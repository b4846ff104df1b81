#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # streetcache-entities
//!
//! Reusable, agnostic domain entities for streetcache.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod address;
pub mod artifact;
pub mod geo;
pub mod record;
pub mod resolution;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
