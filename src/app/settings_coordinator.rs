//! Settings persistence coordination.
//!
//! Persists serializable settings to eframe's storage as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates settings persistence.
///
/// Provides type-safe loading and saving of any serializable settings to
/// eframe's persistent storage.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface
    /// * `key` - The storage key for this setting
    /// * `default` - The value to use if loading fails
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    ///
    /// Malformed stored values are logged and treated as missing.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let json_str = storage?.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("Ignoring malformed stored setting '{key}': {err}");
                None
            }
        }
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Examples
    /// ```ignore
    /// SettingsCoordinator::save_setting(storage, "ruler_settings", &state.settings());
    /// ```
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => log::error!("Failed to serialize setting '{key}': {err}"),
        }
    }
}
