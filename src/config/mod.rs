//! Window-alignment configuration: a JSON document of hotkey-bound actions whose move and
//! resize fields are expression sources.
//!
//! Keys are snake_case:
//!
//! ```json
//! {
//!   "actions": [
//!     {
//!       "hot_key": { "key_code": 126, "modifiers": ["shift", "command"] },
//!       "move": { "x": "screen.width * 0.125", "y": "screen.y" },
//!       "resize": { "width": "screen.width - (screen.width * 0.125) * 2", "height": "screen.height" }
//!     }
//!   ]
//! }
//! ```

pub mod action;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{ScriptError, ScriptResult};

/// File name of the configuration inside the user's home directory.
pub const CONFIG_FILE_NAME: &str = ".window_alignment.json";

/// Virtual key codes used by [`Config::example`].
pub const KEY_CODE_DOWN: u32 = 125;
pub const KEY_CODE_UP: u32 = 126;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub actions: Vec<ActionConfig>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    pub hot_key: HotKeyConfig,
    #[serde(rename = "move", default, skip_serializing_if = "Option::is_none")]
    pub move_to: Option<MoveConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize: Option<ResizeConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotKeyConfig {
    pub key_code: u32,
    pub modifiers: Vec<Modifier>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    Shift,
    Control,
    Option,
    Command,
}

/// Expression sources for the new window origin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveConfig {
    pub x: String,
    pub y: String,
}

/// Expression sources for the new window size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeConfig {
    pub width: String,
    pub height: String,
}

impl Config {
    /// `<home>/.window_alignment.json`.
    pub fn default_path(home: &Path) -> PathBuf {
        home.join(CONFIG_FILE_NAME)
    }

    pub fn from_json_str(s: &str) -> ScriptResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ScriptError::config(format!("invalid configuration JSON: {e}")))
    }

    pub fn to_json_string(&self) -> ScriptResult<String> {
        Ok(serde_json::to_string_pretty(self).context("serialize configuration")?)
    }

    #[tracing::instrument(err)]
    pub fn load(path: &Path) -> ScriptResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read configuration '{}'", path.display()))?;
        let config = Self::from_json_str(&s)?;
        tracing::debug!(actions = config.actions.len(), "loaded configuration");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> ScriptResult<()> {
        let s = self.to_json_string()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config dir '{}'", parent.display()))?;
        }
        std::fs::write(path, s)
            .with_context(|| format!("write configuration '{}'", path.display()))?;
        Ok(())
    }

    /// Load `path`, first writing [`Config::example`] there if nothing exists yet.
    pub fn load_or_create(path: &Path) -> ScriptResult<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "writing example configuration");
            Self::example().save(path)?;
        }
        Self::load(path)
    }

    /// Shift+Command+Up centers the window at three quarters of the screen width;
    /// Shift+Command+Down fills the screen.
    pub fn example() -> Self {
        let hot_key = |key_code| HotKeyConfig {
            key_code,
            modifiers: vec![Modifier::Shift, Modifier::Command],
        };
        Self {
            actions: vec![
                ActionConfig {
                    hot_key: hot_key(KEY_CODE_UP),
                    move_to: Some(MoveConfig {
                        x: "screen.width * 0.125".to_owned(),
                        y: "screen.y".to_owned(),
                    }),
                    resize: Some(ResizeConfig {
                        width: "screen.width - (screen.width * 0.125) * 2".to_owned(),
                        height: "screen.height".to_owned(),
                    }),
                },
                ActionConfig {
                    hot_key: hot_key(KEY_CODE_DOWN),
                    move_to: Some(MoveConfig {
                        x: "screen.x".to_owned(),
                        y: "screen.y".to_owned(),
                    }),
                    resize: Some(ResizeConfig {
                        width: "screen.width".to_owned(),
                        height: "screen.height".to_owned(),
                    }),
                },
            ],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/config.rs"]
mod tests;
