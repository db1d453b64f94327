//! The fixed interactive menu.
//!
//! Every failure inside the loop is reported on `out` and the loop goes on;
//! only console I/O errors end it early.

use log::{debug, warn};
use phonebook::api::{CmdResult, PhonebookApi};
use phonebook::error::Result;
use phonebook::store::DataStore;
use std::io::{BufRead, Write};

const MENU: &str = "\nPhonebook\n1. Replace Alan with Alya\n2. Remove Alex\n3. Show contents\n4. Exit";
const PROMPT: &str = "Choose an action: ";

pub fn run<S, R, W>(api: &mut PhonebookApi<S>, input: R, out: &mut W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        writeln!(out, "{}", MENU)?;
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        let line = line?;

        match line.trim() {
            "1" => {
                let outcome = api.rename_contact("Alan", "Alya");
                report_mutation(api, outcome, out)?;
            }
            "2" => {
                let outcome = api.remove_contacts("Alex");
                report_mutation(api, outcome, out)?;
            }
            "3" => {
                writeln!(out, "\nPhonebook contents:")?;
                for contact in api.list_all() {
                    writeln!(out, "{}", contact)?;
                }
            }
            "4" => {
                writeln!(out, "Goodbye.")?;
                return Ok(());
            }
            other => {
                debug!("Invalid menu choice: {:?}", other);
                writeln!(out, "Invalid choice, please try again.")?;
            }
        }
    }
}

/// Print the outcome of a mutation and save if it succeeded.
fn report_mutation<S: DataStore, W: Write>(
    api: &PhonebookApi<S>,
    outcome: Result<CmdResult>,
    out: &mut W,
) -> Result<()> {
    match outcome {
        Ok(result) => {
            for message in &result.messages {
                writeln!(out, "{}", message.content)?;
            }
            if let Err(e) = api.save() {
                warn!("Save failed: {}", e);
                writeln!(out, "Could not save the phonebook: {}", e)?;
            }
        }
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}
