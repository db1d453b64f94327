use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::phonebook::Phonebook;

/// Removes every contact named `name`.
pub fn run(book: &mut Phonebook, name: &str) -> Result<CmdResult> {
    let removed: Vec<_> = book.iter().filter(|c| c.name() == name).cloned().collect();
    let count = book.remove_by_name(name)?;

    let mut result = CmdResult::default().with_affected_contacts(removed);
    let noun = if count == 1 { "contact" } else { "contacts" };
    result.add_message(CmdMessage::success(format!(
        "Removed {} {} named {}",
        count, noun, name
    )));
    Ok(result)
}
