use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::phonebook::Phonebook;

pub fn run(book: &mut Phonebook, old_name: &str, new_name: &str) -> Result<CmdResult> {
    let renamed = book.rename(old_name, new_name)?.clone();

    let mut result = CmdResult::default().with_affected_contacts(vec![renamed]);
    result.add_message(CmdMessage::success(format!(
        "Contact renamed: {} -> {}",
        old_name, new_name
    )));
    Ok(result)
}
