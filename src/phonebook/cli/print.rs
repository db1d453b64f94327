use colored::Colorize;
use phonebook::api::{CmdMessage, MessageLevel};
use phonebook::model::Contact;
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        println!("No contacts found.");
        return;
    }
    for line in contact_rows(contacts) {
        println!("{}", line);
    }
}

/// Numbered rows with name and phone columns padded to display width.
pub(super) fn contact_rows(contacts: &[Contact]) -> Vec<String> {
    let num_width = contacts.len().to_string().len();
    let name_width = column_width(contacts.iter().map(|c| c.name()));
    let phone_width = column_width(contacts.iter().map(|c| c.phone()));

    contacts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let num = format!("{:>width$}.", i + 1, width = num_width);
            format!(
                "{} {}  {}  {}",
                num.yellow(),
                pad_to_width(c.name(), name_width).bold(),
                pad_to_width(c.phone(), phone_width),
                format!("ID:{}", c.id()).dimmed()
            )
        })
        .collect()
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(|v| v.width()).max().unwrap_or(0)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
