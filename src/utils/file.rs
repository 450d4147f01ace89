use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::models::error::Result;

/// Checks if a file exists at the given path
pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Open a file for line-by-line reading.
///
/// The handle is closed when the returned reader is dropped.
pub fn open_buffered<P: AsRef<Path>>(path: P) -> Result<BufReader<File>> {
    let path = path.as_ref();
    if !file_exists(path) {
        log::debug!("Config file {} does not exist", path.display());
    }
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}
