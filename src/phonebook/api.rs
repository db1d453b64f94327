//! # API Facade
//!
//! [`PhonebookApi`] is the single entry point a UI drives. It owns the
//! persistence gateway and the in-memory [`Phonebook`], and dispatches every
//! operation to `commands/*.rs`.
//!
//! The facade does not print and does not save implicitly: the caller decides
//! when to call [`PhonebookApi::save`], normally right after a mutation. A
//! failed save leaves the in-memory phonebook untouched so it can be retried.
//!
//! ## Generic Over DataStore
//!
//! - Production: `PhonebookApi<FileStore>`
//! - Testing: `PhonebookApi<InMemoryStore>`

use crate::codec;
use crate::commands;
use crate::error::Result;
use crate::model::Contact;
use crate::phonebook::Phonebook;
use crate::store::DataStore;
use log::{debug, info};

pub struct PhonebookApi<S: DataStore> {
    store: S,
    book: Phonebook,
    paths: commands::PhonebookPaths,
}

impl<S: DataStore> PhonebookApi<S> {
    pub fn new(store: S, paths: commands::PhonebookPaths) -> Self {
        Self {
            store,
            book: Phonebook::new(),
            paths,
        }
    }

    pub fn ensure_seeded(&self) -> Result<commands::CmdResult> {
        commands::seed::run(&self.store)
    }

    /// Replace the in-memory phonebook with the file's contents.
    pub fn load(&mut self) -> Result<()> {
        let text = self.store.load()?;
        let contacts = codec::parse(&text);
        info!(
            "Loaded {} contact(s) from {}",
            contacts.len(),
            self.store.location()
        );
        self.book.replace_all(contacts);
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let text = codec::format(self.book.list_all());
        self.store.save(&text)?;
        debug!(
            "Saved {} contact(s) to {}",
            self.book.len(),
            self.store.location()
        );
        Ok(())
    }

    pub fn add_contact(&mut self, name: &str, phone: &str, id: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.book, name, phone, id)
    }

    pub fn rename_contact(&mut self, old_name: &str, new_name: &str) -> Result<commands::CmdResult> {
        commands::rename::run(&mut self.book, old_name, new_name)
    }

    pub fn remove_contacts(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.book, name)
    }

    pub fn find_contact(&self, id: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.book, id)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.book)
    }

    /// Snapshot of the current contacts, in file order.
    pub fn list_all(&self) -> Vec<Contact> {
        self.book.list_all().to_vec()
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PhonebookPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhonebookError;
    use crate::model::seed_contacts;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api(store: InMemoryStore) -> PhonebookApi<InMemoryStore> {
        let paths = PhonebookPaths {
            config_dir: PathBuf::from("memory://config"),
            data_file: PathBuf::from("memory://phonebook"),
        };
        PhonebookApi::new(store, paths)
    }

    fn seeded_api() -> PhonebookApi<InMemoryStore> {
        let mut api = api(InMemoryStore::new());
        api.ensure_seeded().unwrap();
        api.load().unwrap();
        api
    }

    #[test]
    fn load_of_absent_file_is_empty() {
        let mut api = api(InMemoryStore::new());
        api.load().unwrap();
        assert!(api.list_all().is_empty());
    }

    #[test]
    fn load_replaces_previous_contents() {
        let mut api = seeded_api();
        api.load().unwrap();
        assert_eq!(api.list_all(), seed_contacts());
    }

    #[test]
    fn load_skips_malformed_lines() {
        let store = InMemoryStore::with_text("Alan, +7 903\nAlex, +7 345, ID:907.\n\nX, Y, Z, W");
        let mut api = api(store);
        api.load().unwrap();
        assert_eq!(api.list_all().len(), 1);
        assert_eq!(api.list_all()[0].name(), "Alex");
    }

    #[test]
    fn rename_save_reload_end_to_end() {
        let mut api = seeded_api();
        api.rename_contact("Alan", "Alya").unwrap();
        api.save().unwrap();
        api.load().unwrap();

        let contacts = api.list_all();
        assert_eq!(contacts[0].name(), "Alya");
        assert_eq!(contacts[0].phone(), "+7 903");
        assert_eq!(contacts[0].id(), "907");
        assert_eq!(&contacts[1..], &seed_contacts()[1..]);
    }

    #[test]
    fn remove_then_save_writes_three_lines() {
        let mut api = seeded_api();
        api.remove_contacts("Alex").unwrap();
        api.save().unwrap();

        let text = api.store().text().unwrap();
        assert_eq!(
            text,
            "Alan, +7 903, ID:907\nAlice, +7 346, ID:9800\nAdelina, +7 367, ID:9678"
        );
    }

    #[test]
    fn not_found_leaves_store_unchanged() {
        let mut api = seeded_api();
        let err = api.rename_contact("Ghost", "X").unwrap_err();
        assert!(matches!(err, PhonebookError::ContactNotFound { .. }));
        assert!(api.remove_contacts("Ghost").unwrap_err().is_not_found());
        assert_eq!(api.list_all(), seed_contacts());
    }

    #[test]
    fn failed_save_keeps_memory_state() {
        let mut api = seeded_api();
        api.add_contact("Bob", "+1", "1").unwrap();
        api.store().set_simulate_write_error(true);

        let err = api.save().unwrap_err();
        assert!(matches!(err, PhonebookError::FileOperation { .. }));
        assert_eq!(api.list_all().len(), 5);

        api.store().set_simulate_write_error(false);
        api.save().unwrap();
        assert!(api.store().text().unwrap().ends_with("Bob, +1, ID:1"));
    }

    #[test]
    fn find_contact_by_legacy_id() {
        let api = seeded_api();
        let result = api.find_contact("9678.").unwrap();
        assert_eq!(result.listed_contacts[0].name(), "Adelina");
    }

    #[test]
    fn list_contacts_matches_list_all() {
        let api = seeded_api();
        assert_eq!(api.list_contacts().unwrap().listed_contacts, api.list_all());
    }
}
