//! Environment-backed configuration loading.
//!
//! Pure parsing of `environment.conf` lives in `domain::environment_conf`.

mod resolve_search_path;

pub use resolve_search_path::{Resolution, SearchPathSource, resolve_search_path};
