use crate::model::OutputError;
use chrono::Utc;
use serde::Serialize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a result ended up, and what was written.
#[derive(Debug, Clone)]
pub struct SavedOutput {
    pub path: PathBuf,
    pub contents: String,
}

/// Writes results as JSON files into one directory.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Serializes `data` to `<dir>/<name>-<timestamp>.json`, creating `dir` if needed.
    pub fn save<T: Serialize>(&self, name: &str, data: &T) -> Result<SavedOutput, OutputError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(OutputError::EmptyName);
        }

        let contents = serde_json::to_string(data)?;
        fs::create_dir_all(&self.dir)?;

        let stamp = Utc::now().format("%Y%m%d%H%M%S").to_string();
        let (path, mut file) = self.create_unique(name, &stamp)?;
        file.write_all(contents.as_bytes())?;
        info!("Saved {} bytes to {}", contents.len(), path.display());

        Ok(SavedOutput { path, contents })
    }

    /// Opens `<name>-<stamp>.json`, or `<name>-<stamp>-<n>.json` when taken.
    fn create_unique(&self, name: &str, stamp: &str) -> Result<(PathBuf, File), OutputError> {
        let mut attempt = 0u32;
        loop {
            let file_name = match attempt {
                0 => format!("{}-{}.json", name, stamp),
                n => format!("{}-{}-{}.json", name, stamp, n),
            };
            let path = self.dir.join(file_name);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
