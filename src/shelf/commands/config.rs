use crate::commands::{CmdMessage, CmdResult};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let path = ShelfConfig::path_in(config_dir);
    match action {
        ConfigAction::ShowAll => {
            let config = ShelfConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config, path))
        }
        ConfigAction::ShowKey(key) => {
            let config = ShelfConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            // an unreadable file is replaced rather than blocking the repair
            let mut config = ShelfConfig::load(config_dir).unwrap_or_default();
            match config.set(&key, &value) {
                Ok(()) => {}
                Err(ShelfError::Config(e)) => {
                    let mut result = CmdResult::default();
                    result.add_message(CmdMessage::error(e));
                    return Ok(result);
                }
                Err(e) => return Err(e),
            }
            config.save(config_dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config, path);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}
