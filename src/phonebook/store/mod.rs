//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence gateway for the contact file.
//! It deals only in raw text; turning text into contacts is the job of
//! [`crate::codec`].
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one plain text file on disk, written atomically.
//! - [`memory::InMemoryStore`]: a string in a `RefCell`, for tests. It can be
//!   told to fail writes.
//!
//! ## Absence Is Not An Error
//!
//! A missing file is the first-run path: [`DataStore::load`] returns an empty
//! string for it. Every other I/O failure is a
//! [`PhonebookError::FileOperation`](crate::error::PhonebookError::FileOperation).

use crate::codec;
use crate::error::Result;
use crate::model::seed_contacts;
use log::{debug, info};

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Full text of the backing file, or `""` if it does not exist.
    fn load(&self) -> Result<String>;

    /// Overwrite the backing file with `text`.
    fn save(&self, text: &str) -> Result<()>;

    fn exists(&self) -> Result<bool>;

    /// Human readable location, used in messages and logs.
    fn location(&self) -> String;

    /// Write the canonical seed contacts if the file is missing.
    ///
    /// Returns `true` when the file was created. An existing file is never
    /// touched.
    fn ensure_seeded(&self) -> Result<bool> {
        if self.exists()? {
            debug!("{} already exists, not seeding", self.location());
            return Ok(false);
        }
        self.save(&codec::format(&seed_contacts()))?;
        info!("Seeded {} with initial contacts", self.location());
        Ok(true)
    }
}
