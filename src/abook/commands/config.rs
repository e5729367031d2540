use crate::commands::{AbookPaths, CmdMessage, CmdResult};
use crate::config::AbookConfig;
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &AbookPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = AbookConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = AbookConfig::load(dir)?;
            let message = match config.get(&key) {
                Some(val) => CmdMessage::info(val),
                None => CmdMessage::error(format!("Unknown config key: {}", key)),
            };
            Ok(CmdResult::default().with_message(message))
        }
        ConfigAction::Set(key, value) => {
            let mut config = AbookConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e)));
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            if key == "data-file" {
                result.add_message(CmdMessage::info(
                    "The new data file is used from the next session on.",
                ));
            }
            Ok(result)
        }
    }
}
