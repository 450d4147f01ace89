//! Line-oriented INI parsing
//!
//! [`line`] decides what a single line is, [`reader`] walks a buffered
//! stream and applies each line to a [`Config`](crate::Config).

pub mod line;
pub mod reader;

pub use line::Line;
pub use reader::read_into;
