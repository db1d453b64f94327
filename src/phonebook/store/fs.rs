use super::DataStore;
use crate::error::{PhonebookError, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_FILENAME: &str = "phonebook.txt";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path.parent().filter(|p| !p.as_os_str().is_empty())
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(dir) = self.parent_dir() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| PhonebookError::file_op(dir, e))?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = format!(".phonebook-{}.tmp", Uuid::new_v4());
        match self.parent_dir() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

/// Write `text` to `tmp` and rename it over `target`. On any failure the
/// temporary file is removed and `target` is left as it was.
fn write_atomic(tmp: &Path, target: &Path, text: &str) -> Result<()> {
    let outcome = fs::write(tmp, text)
        .map_err(|e| PhonebookError::file_op(tmp, e))
        .and_then(|()| fs::rename(tmp, target).map_err(|e| PhonebookError::file_op(target, e)));
    if outcome.is_err() {
        let _ = fs::remove_file(tmp);
    }
    outcome
}

impl DataStore for FileStore {
    fn load(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist, starting empty", self.path.display());
                Ok(String::new())
            }
            Err(e) => Err(PhonebookError::file_op(&self.path, e)),
        }
    }

    fn save(&self, text: &str) -> Result<()> {
        self.ensure_parent()?;

        write_atomic(&self.tmp_path(), &self.path, text)?;
        debug!("Wrote {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }

    fn exists(&self) -> Result<bool> {
        self.path
            .try_exists()
            .map_err(|e| PhonebookError::file_op(&self.path, e))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
