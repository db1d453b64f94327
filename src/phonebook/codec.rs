//! # Line Codec
//!
//! Contacts are stored one per line:
//!
//! ```text
//! Alan, +7 903, ID:907
//! Alex, +7 345, ID:907
//! ```
//!
//! Parsing is lenient. Blank lines are skipped, and so is any line that does
//! not split into exactly three comma-separated fields. The third field may be
//! `ID:<value>` or a bare `<value>`; trailing `!`/`.` on the value are dropped.
//! Commas inside a name or phone are not escaped and will break the line.
//! A leading UTF-8 byte order mark is ignored.
//!
//! [`format`] always emits the `ID:` form, so `parse(&format(c)) == c` for
//! contacts with trimmed, comma-free names and phones.

use crate::model::{normalize_id, Contact};
use log::debug;

const FIELD_SEPARATOR: char = ',';
const ID_PREFIX: &str = "ID:";
const BYTE_ORDER_MARK: char = '\u{feff}';

pub fn parse(text: &str) -> Vec<Contact> {
    text.strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(text)
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(n, line)| {
            let parsed = parse_line(line);
            if parsed.is_none() {
                debug!("Skipping malformed contact line {}: {:?}", n + 1, line);
            }
            parsed
        })
        .collect()
}

/// Parse a single non-blank line. `None` when the field count is not three.
pub fn parse_line(line: &str) -> Option<Contact> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    let [name, phone, id_field] = fields.as_slice() else {
        return None;
    };

    let raw_id = match id_field.split_once(':') {
        Some((_, value)) => value,
        None => id_field,
    };

    Some(Contact::new(*name, *phone, &normalize_id(raw_id)))
}

pub fn format(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .map(|c| format!("{}, {}, {}{}", c.name(), c.phone(), ID_PREFIX, c.id()))
        .collect::<Vec<_>>()
        .join("\n")
}
