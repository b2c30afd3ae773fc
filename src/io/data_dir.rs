use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

/// Outcome of [`ensure_data_dir`]. Both variants are success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataDir {
    Created,
    Existing,
}

/// Make sure the output directory exists, creating parents as needed.
///
/// An existing directory is not an error. A path that exists but is not a
/// directory is.
pub fn ensure_data_dir<P: AsRef<Path>>(path: P) -> io::Result<DataDir> {
    let path = path.as_ref();
    if path.is_dir() {
        debug!("data directory {} already present", path.display());
        return Ok(DataDir::Existing);
    }
    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists and is not a directory", path.display()),
        ));
    }

    fs::create_dir_all(path)?;
    info!("created data directory {}", path.display());
    Ok(DataDir::Created)
}
