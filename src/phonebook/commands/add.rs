use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::phonebook::Phonebook;

pub fn run(book: &mut Phonebook, name: &str, phone: &str, id: &str) -> Result<CmdResult> {
    let contact = Contact::new(name, phone, id);
    book.add(contact.clone());

    let mut result = CmdResult::default().with_affected_contacts(vec![contact.clone()]);
    result.add_message(CmdMessage::success(format!("Contact added: {}", contact)));
    Ok(result)
}
