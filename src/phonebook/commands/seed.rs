use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let created = store.ensure_seeded()?;
    let mut result = CmdResult::default();
    if created {
        result.add_message(CmdMessage::success(format!(
            "Created {} with initial contacts",
            store.location()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} already exists, left unchanged",
            store.location()
        )));
    }
    Ok(result)
}
