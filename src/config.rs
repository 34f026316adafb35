//! JSON config persistence.
//!
//! A small typed key-value store backed by one JSON file. The suite keeps its
//! cached session token here between runs. Missing file: defaults are written
//! out. Empty file: defaults. Partial file: absent keys fall back to their
//! defaults, so updates never have to supply the whole config.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Typed content of the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Cached session JWT; empty when no session has been stored yet.
    #[serde(default)]
    pub jwt: String,
}

/// A config file handle: loads on open, persists on every update.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    settings: Settings,
}

impl ConfigStore {
    /// Open the config at `path`, creating it with defaults when absent.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let settings = Self::ensure(&path)?;
        Ok(Self { path, settings })
    }

    /// Open the config at [`DEFAULT_CONFIG_PATH`].
    pub fn open_default() -> Result<Self> {
        Self::open(DEFAULT_CONFIG_PATH)
    }

    fn ensure(path: &Path) -> Result<Settings> {
        if !path.exists() {
            let defaults = Settings::default();
            write_settings(path, &defaults)?;
            debug!("created config with defaults at {}", path.display());
            return Ok(defaults);
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }

        serde_json::from_str(&content).map_err(|e| Error::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Currently loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The cached session token, empty when none is stored.
    pub fn jwt(&self) -> &str {
        &self.settings.jwt
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply a mutation to the settings and persist the result immediately.
    pub fn update<F>(&mut self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Settings),
    {
        mutate(&mut self.settings);
        write_settings(&self.path, &self.settings)
    }
}

fn write_settings(path: &Path, settings: &Settings) -> Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
