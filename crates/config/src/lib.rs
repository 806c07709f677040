//! Configuration for semifix.
//!
//! Handles discovery and parsing of `.semifixrc` / `semifix.config.*` files
//! (YAML, JSON, or TOML) and exposes the [`AutofixConfig`] model the engine
//! consumes. A missing config file is not an error; defaults apply.

mod config;
mod error;
mod loader;

pub use config::{AutofixConfig, SignatureConfig};
pub use error::{ConfigError, Result};
pub use loader::{find_config, load_config, load_config_from_str};
