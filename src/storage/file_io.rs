//! JSON documents on disk
//!
//! Reads treat a missing file as an empty document. Writes go through a
//! sibling temp file that is renamed over the target, so a crash mid-write
//! leaves the previous document in place.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ExpenseError, ExpenseResult};

fn storage_error(action: &str, path: &Path, cause: impl std::fmt::Display) -> ExpenseError {
    ExpenseError::Storage(format!("Failed to {} {}: {}", action, path.display(), cause))
}

/// Temp file next to `path`, so the final rename never crosses filesystems
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Load a document, or `T::default()` if the file has not been written yet
pub fn read_json<T, P>(path: P) -> ExpenseResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("open", path, e)),
    };

    serde_json::from_reader(BufReader::new(file)).map_err(|e| storage_error("parse", path, e))
}

/// Replace a document atomically, creating parent directories as needed
pub fn write_json_atomic<T, P>(path: P, data: &T) -> ExpenseResult<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    let staging = staging_path(path);
    let written = write_staged(&staging, data).and_then(|()| {
        fs::rename(&staging, path).map_err(|e| storage_error("replace", path, e))
    });

    if written.is_err() {
        let _ = fs::remove_file(&staging);
    }
    written?;

    tracing::debug!(path = %path.display(), "wrote json file");
    Ok(())
}

fn write_staged<T: Serialize + ?Sized>(staging: &Path, data: &T) -> ExpenseResult<()> {
    let file = File::create(staging).map_err(|e| storage_error("create", staging, e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| storage_error("serialize", staging, e))?;
    writer.flush().map_err(|e| storage_error("flush", staging, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| storage_error("sync", staging, e))
}
