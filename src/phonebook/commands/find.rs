use crate::commands::CmdResult;
use crate::error::Result;
use crate::phonebook::Phonebook;

pub fn run(book: &Phonebook, id: &str) -> Result<CmdResult> {
    let contact = book.find_by_identifier(id)?.clone();
    Ok(CmdResult::default().with_listed_contacts(vec![contact]))
}
