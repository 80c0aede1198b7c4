//! Game settings
//!
//! Settings load from a YAML file at startup and are validated into typed
//! values before the engine starts. A missing file, a missing field, or an
//! unrecognized key label is an error at load time, not a crash mid-game.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::input::{Action, BindingSet, parse_key_label};

/// Key labels for the movement actions, as written in the settings file.
///
/// Labels stay as strings here so a settings file can round-trip untouched;
/// [`Keybinds::resolve`] turns them into key codes and rejects bad ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keybinds {
    /// Label for the move-left key
    pub left: String,
    /// Label for the move-right key
    pub right: String,
    /// Label for the move-up key
    pub up: String,
    /// Label for the move-down key
    pub down: String,
}

impl Keybinds {
    /// The usual WASD layout.
    #[must_use]
    pub fn wasd() -> Self {
        Self {
            left: "a".to_string(),
            right: "d".to_string(),
            up: "w".to_string(),
            down: "s".to_string(),
        }
    }

    /// Resolve the labels into a concrete binding set.
    ///
    /// # Errors
    ///
    /// Returns an error if any label does not name a key. Two actions
    /// sharing one key is allowed but logged, since it is usually a typo.
    pub fn resolve(&self) -> Result<BindingSet, ConfigError> {
        let mut bindings = BindingSet::new();
        let labels = [&self.left, &self.right, &self.up, &self.down];
        for (action, label) in Action::MOVEMENT.into_iter().zip(labels) {
            let key = parse_key_label(label).ok_or_else(|| ConfigError::UnknownKey {
                action: action.label(),
                label: label.clone(),
            })?;
            bindings.bind(action, key);
        }

        for (key, actions) in bindings.collisions() {
            let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
            log::warn!(
                "Key {:?} is bound to multiple actions: {}",
                key,
                labels.join(", ")
            );
        }

        Ok(bindings)
    }
}

impl Default for Keybinds {
    fn default() -> Self {
        Self::wasd()
    }
}

/// Game settings loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Movement key bindings
    pub keybinds: Keybinds,
}

impl Settings {
    /// Load settings from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML for
    /// this structure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let settings: Settings =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(settings)
    }

    /// Save settings to a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let yaml_string =
            serde_yaml::to_string(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, yaml_string).map_err(|e| ConfigError::IoError(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur while loading settings
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error
    IoError(String),
    /// YAML parse error
    ParseError(String),
    /// A key label that does not name any key
    UnknownKey {
        /// Action the label was given for
        action: &'static str,
        /// The offending label
        label: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::ParseError(e) => write!(f, "Parse error: {e}"),
            Self::UnknownKey { action, label } => {
                write!(f, "Unknown key label {label:?} for action {action:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
