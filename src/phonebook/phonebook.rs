use crate::error::{PhonebookError, Result};
use crate::model::{normalize_id, Contact};

/// Ordered, in-memory collection of contacts.
///
/// Names are not unique. [`Phonebook::remove_by_name`] drops every contact
/// with the given name, while [`Phonebook::rename`] only touches the first one
/// in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Phonebook {
    contacts: Vec<Contact>,
}

impl Phonebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Removes all contacts named exactly `name`, returning how many went.
    pub fn remove_by_name(&mut self, name: &str) -> Result<usize> {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.name() != name);
        let removed = before - self.contacts.len();
        if removed == 0 {
            return Err(PhonebookError::not_found_by_name(name));
        }
        Ok(removed)
    }

    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<&Contact> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.name() == old_name)
            .ok_or_else(|| PhonebookError::not_found_by_name(old_name))?;
        contact.set_name(new_name);
        Ok(&*contact)
    }

    pub fn find_by_identifier(&self, id: &str) -> Result<&Contact> {
        let wanted = normalize_id(id);
        self.contacts
            .iter()
            .find(|c| c.id() == wanted)
            .ok_or_else(|| PhonebookError::not_found_by_id(&wanted))
    }

    pub fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    /// Swaps in a freshly loaded set of contacts.
    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl From<Vec<Contact>> for Phonebook {
    fn from(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}
