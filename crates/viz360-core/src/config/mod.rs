//! Unified configuration layer.
//!
//! Every environment variable read goes through this module; callers use the
//! typed structs in `schema` instead of `std::env::var`.
//!
//! - `loader`: `env_or`, `env_optional`, `env_bool`, `.env` loading
//! - `schema`: `PathsConfig`, `ClassificationConfig`, `ObservabilityConfig`
//! - `env_keys`: key constants and their aliases

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_list, env_optional, env_or, load_dotenv};
pub use schema::{ClassificationConfig, ObservabilityConfig, PathsConfig};
