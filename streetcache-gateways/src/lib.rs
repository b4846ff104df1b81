//! Adapters for the external providers.

mod http;

pub mod google_maps;
pub mod local_dir;
pub mod supabase;
