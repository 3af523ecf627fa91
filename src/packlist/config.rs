use crate::error::{PackError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_SLOT: &str = "packing-list";

/// Configuration for packlist, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackConfig {
    /// Name of the storage slot holding the list (file `<slot>.json`)
    #[serde(default = "default_slot")]
    pub slot: String,

    /// Ask before clearing the whole list
    #[serde(default = "default_confirm_reset")]
    pub confirm_reset: bool,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

fn default_confirm_reset() -> bool {
    true
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            confirm_reset: default_confirm_reset(),
        }
    }
}

impl PackConfig {
    pub const KEYS: [&'static str; 2] = ["slot", "confirm-reset"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PackError::Io)?;
        let config: PackConfig =
            serde_json::from_str(&content).map_err(PackError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PackError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PackError::Serialization)?;
        fs::write(config_path, content).map_err(PackError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "slot" => Some(self.slot.clone()),
            "confirm-reset" => Some(self.confirm_reset.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "slot" => {
                self.slot = normalize_slot(value)?;
                Ok(())
            }
            "confirm-reset" => {
                self.confirm_reset = parse_bool(value)
                    .ok_or_else(|| format!("Invalid value for confirm-reset: {}", value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

/// Slot names become file names, so keep them to a safe character set.
fn normalize_slot(value: &str) -> std::result::Result<String, String> {
    let slot = value.trim();
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(slot.to_string())
    } else {
        Err(format!(
            "Invalid slot name: {:?} (use letters, digits, '-' or '_')",
            value
        ))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PackConfig::default();
        assert_eq!(config.slot, "packing-list");
        assert!(config.confirm_reset);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PackConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, PackConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");

        let mut config = PackConfig::default();
        config.set("slot", "weekend").unwrap();
        config.set("confirm-reset", "no").unwrap();
        config.save(&nested).unwrap();

        let loaded = PackConfig::load(&nested).unwrap();
        assert_eq!(loaded.slot, "weekend");
        assert!(!loaded.confirm_reset);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"slot": "camping"}"#).unwrap();

        let loaded = PackConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.slot, "camping");
        assert!(loaded.confirm_reset);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = PackConfig::default();
        assert!(config.set("slot", "../etc").is_err());
        assert!(config.set("slot", "  ").is_err());
        assert!(config.set("confirm-reset", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, PackConfig::default());
    }

    #[test]
    fn test_get_known_keys() {
        let config = PackConfig::default();
        for key in PackConfig::KEYS {
            assert!(config.get(key).is_some());
        }
        assert_eq!(config.get("nope"), None);
    }
}
