pub mod store_options;

pub use store_options::{StoreOptions, ValueCapture};
