use super::DataStore;
use crate::error::{PhonebookError, Result};
use std::cell::{Cell, RefCell};
use std::io;

const MEMORY_LOCATION: &str = "memory://phonebook";

/// In-memory storage for testing.
///
/// `None` stands for "file does not exist". Uses `RefCell` since the store is
/// single-threaded and `DataStore` takes `&self` everywhere.
#[derive(Default)]
pub struct InMemoryStore {
    text: RefCell<Option<String>>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose "file" already holds `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: RefCell::new(Some(text.into())),
            simulate_write_error: Cell::new(false),
        }
    }

    /// Make every subsequent `save` fail with a file operation error.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Current raw contents, `None` if never written.
    pub fn text(&self) -> Option<String> {
        self.text.borrow().clone()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<String> {
        Ok(self.text.borrow().clone().unwrap_or_default())
    }

    fn save(&self, text: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(PhonebookError::file_op(
                MEMORY_LOCATION,
                io::Error::other("Simulated write error"),
            ));
        }
        *self.text.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn exists(&self) -> Result<bool> {
        Ok(self.text.borrow().is_some())
    }

    fn location(&self) -> String {
        MEMORY_LOCATION.to_string()
    }
}
