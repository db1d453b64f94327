use crate::model::Contact;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod find;
pub mod list;
pub mod remove;
pub mod rename;
pub mod seed;

#[derive(Debug, Clone)]
pub struct PhonebookPaths {
    pub config_dir: PathBuf,
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<Contact>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    /// Whether the command changed the in-memory phonebook.
    pub fn is_mutation(&self) -> bool {
        !self.affected_contacts.is_empty()
    }
}
