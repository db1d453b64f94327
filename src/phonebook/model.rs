use serde::Serialize;
use std::fmt;

/// Characters stripped from both ends of an identifier.
fn is_id_punctuation(c: char) -> bool {
    c == '!' || c == '.' || c.is_whitespace()
}

/// Canonical form of a contact identifier: no leading or trailing `!`, `.`
/// or whitespace. Idempotent.
pub fn normalize_id(raw: &str) -> String {
    raw.trim_matches(is_id_punctuation).to_string()
}

/// A single phonebook entry.
///
/// The identifier is normalized on construction and stays normalized; the
/// name can only change through [`crate::phonebook::Phonebook::rename`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    name: String,
    phone: String,
    id: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, raw_id: &str) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            id: normalize_id(raw_id),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, ID:{}", self.name, self.phone, self.id)
    }
}

/// The records written by `ensure_seeded` when no contact file exists yet.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Alan", "+7 903", "907"),
        Contact::new("Alex", "+7 345", "907"),
        Contact::new("Alice", "+7 346", "9800"),
        Contact::new("Adelina", "+7 367", "9678"),
    ]
}
