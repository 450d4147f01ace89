pub mod file;

pub use file::{file_exists, open_buffered};
