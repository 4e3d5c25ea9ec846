//! Configuration layer.
//!
//! Every environment read goes through here; commands consume typed structs
//! instead of calling `std::env::var` directly.
//!
//! - `env_keys`: key constants
//! - `loader`: `env_or`, `env_optional`, `env_bool`
//! - `schema`: `ObservabilityConfig`, `PathsConfig`

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or};
pub use schema::{ObservabilityConfig, PathsConfig};
