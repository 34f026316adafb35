//! Staging directory helpers for downloaded files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;

use crate::error::Result;

/// Create a directory and any missing parents; fine if it already exists.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Remove a directory tree when present; a missing directory is a no-op.
pub fn remove_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_dir_all(path)?;
        info!("all contents deleted from folder: {}", path.display());
    }
    Ok(())
}

/// Build a unique path for a freshly downloaded file:
/// `<dir>/<millis>_<suggested_name>`.
pub fn staged_path<P: AsRef<Path>>(dir: P, suggested_name: &str) -> PathBuf {
    let stamp = Utc::now().timestamp_millis();
    dir.as_ref().join(format!("{stamp}_{suggested_name}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_and_remove_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b/c");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // idempotent
        ensure_dir(&nested).unwrap();

        remove_dir(dir.path().join("a")).unwrap();
        assert!(!nested.exists());
        // removing again is a no-op
        remove_dir(dir.path().join("a")).unwrap();
    }

    #[test]
    fn test_staged_path_shape() {
        let path = staged_path(".tmp", "report.pdf");
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with("_report.pdf"));
        let (stamp, _) = name.split_once('_').unwrap();
        assert!(stamp.parse::<i64>().is_ok());
    }
}
