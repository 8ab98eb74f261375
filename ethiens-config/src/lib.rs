//! Configuration loading for Ethiens.
//!
//! Settings come from three layers: built-in defaults, an optional
//! `ethiens.toml` file and the process environment (after `.env` has been
//! applied). Environment values win over the file, the file wins over
//! defaults. Problems that still leave a working configuration are reported
//! as [`ConfigWarnings`] instead of errors.

pub mod error;
pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use error::ConfigLoadError;
pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    Config, ConfigMetadata, CorsConfig, DEFAULT_HOST, DEFAULT_PORT,
    ServerConfig,
};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
