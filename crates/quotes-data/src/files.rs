//! Data directory listing.

use chrono::{DateTime, Utc};
use quotes_core::error::DataError;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// One entry of a data directory.
#[derive(Debug, Clone, Serialize)]
pub struct DataFile {
    pub name: String,
    pub size: u64,
    pub is_dir: bool,
    pub modified: Option<DateTime<Utc>>,
}

/// List a directory, sorted by name. An empty path means the current directory.
pub fn list_data_files(dir: impl AsRef<Path>) -> Result<Vec<DataFile>, DataError> {
    let mut dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        info!("No path provided, using current directory");
        dir = Path::new(".");
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        files.push(DataFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: metadata.len(),
            is_dir: metadata.is_dir(),
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
