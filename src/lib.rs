//! In-memory INI configuration store
//!
//! Parses `[section]` / `option = value` text into a map of sections and
//! exposes add/remove/list operations over sections and their options.

pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the store and its mutation trait for easier access
pub use models::{Config, ConfigError, ConfigStore, Result};

// Re-export configuration types
pub use settings::{StoreOptions, ValueCapture};
