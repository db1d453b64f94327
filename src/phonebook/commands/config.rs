use crate::commands::{CmdMessage, CmdResult, PhonebookPaths};
use crate::config::PhonebookConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &PhonebookPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PhonebookConfig::load(&paths.config_dir)?;
    let mut result = CmdResult::default();

    let message = match action {
        ConfigAction::ShowAll => {
            for key in PhonebookConfig::keys() {
                result.add_message(describe(&config, key));
            }
            return Ok(result);
        }
        ConfigAction::ShowKey(key) => describe(&config, &key),
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(()) => {
                config.save(&paths.config_dir)?;
                CmdMessage::success(format!("Saved {}", describe(&config, &key).content))
            }
            Err(e) => CmdMessage::error(e.to_string()),
        },
    };

    result.add_message(message);
    Ok(result)
}

/// `key = value`, or an error message for keys the config does not know.
fn describe(config: &PhonebookConfig, key: &str) -> CmdMessage {
    match config.get(key) {
        Some(value) => CmdMessage::info(format!("{} = {}", key, value)),
        None => CmdMessage::error(format!(
            "Unknown config key '{}' (known: {})",
            key,
            PhonebookConfig::keys().join(", ")
        )),
    }
}
