pub mod config_store;
pub mod error;

pub use config_store::{Config, ConfigStore};
pub use error::{ConfigError, Result};
